use crate::model::event::event::CreateEvent;
use crate::model::event::Event;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<()>;
    /// All events, ordered by event date ascending.
    async fn find_all(&self) -> AppResult<Vec<Event>>;
}

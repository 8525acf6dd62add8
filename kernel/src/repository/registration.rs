use crate::model::id::{EventId, RegistrationId};
use crate::model::registration::event::CreateRegistration;
use crate::model::registration::Registration;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Registers a user for an event, snapshotting the event's name and
    /// date. Fails with EntityNotFound when the event does not exist and
    /// with DuplicateEntity when the (event, user) pair is already
    /// registered.
    async fn create(&self, event: CreateRegistration) -> AppResult<RegistrationId>;
    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Registration>>;
}

use crate::model::id::EventId;
use derive_new::new;

#[derive(new)]
pub struct CreateRegistration {
    pub event_id: EventId,
    pub user_name: String,
}

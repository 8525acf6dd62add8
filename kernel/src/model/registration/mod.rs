pub mod event;

use crate::model::id::{EventId, RegistrationId};
use chrono::NaiveDate;

/// A confirmed registration. Event name and date are snapshots taken at
/// registration time, not joins against the events table.
#[derive(Debug)]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub event_name: String,
    pub event_date: Option<NaiveDate>,
    pub user_name: String,
}

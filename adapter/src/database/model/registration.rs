use chrono::NaiveDate;
use kernel::model::id::{EventId, RegistrationId};
use kernel::model::registration::Registration;

#[derive(sqlx::FromRow)]
pub struct RegistrationRow {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub event_name: String,
    pub event_date: Option<NaiveDate>,
    pub user_name: String,
}

impl From<RegistrationRow> for Registration {
    fn from(value: RegistrationRow) -> Self {
        let RegistrationRow {
            id,
            event_id,
            event_name,
            event_date,
            user_name,
        } = value;
        Registration {
            id,
            event_id,
            event_name,
            event_date,
            user_name,
        }
    }
}

/// The slice of an event captured into a registration at insert time.
#[derive(sqlx::FromRow)]
pub struct EventSnapshotRow {
    pub event_name: String,
    pub event_date: Option<NaiveDate>,
}

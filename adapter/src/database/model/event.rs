use chrono::NaiveDate;
use kernel::model::event::Event;
use kernel::model::id::EventId;

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub id: EventId,
    pub event_name: String,
    pub event_date: Option<NaiveDate>,
    pub venue: String,
    pub reg_fee: f64,
    pub reg_close_date: Option<NaiveDate>,
    pub max_participants: i32,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            id,
            event_name,
            event_date,
            venue,
            reg_fee,
            reg_close_date,
            max_participants,
        } = value;
        Event {
            id,
            event_name,
            event_date,
            venue,
            reg_fee,
            reg_close_date,
            max_participants,
        }
    }
}

pub mod event;

use crate::model::id::EventId;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct Event {
    pub id: EventId,
    pub event_name: String,
    pub event_date: Option<NaiveDate>,
    pub venue: String,
    pub reg_fee: f64,
    pub reg_close_date: Option<NaiveDate>,
    pub max_participants: i32,
}

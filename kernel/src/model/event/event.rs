use chrono::NaiveDate;

pub struct CreateEvent {
    pub event_name: String,
    pub event_date: NaiveDate,
    pub venue: String,
    pub reg_fee: f64,
    pub reg_close_date: NaiveDate,
    pub max_participants: i32,
}

use chrono::NaiveDate;
use garde::Validate;
use kernel::model::event::event::CreateEvent;
use kernel::model::event::Event;
use kernel::model::id::EventId;
use serde::{Serialize, Serializer};
use shared::error::{AppError, AppResult};

use crate::form::FieldMap;
use crate::model::parse_field;

#[derive(Debug, Validate)]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub event_name: String,
    #[garde(skip)]
    pub event_date: NaiveDate,
    #[garde(length(min = 1))]
    pub venue: String,
    #[garde(custom(non_negative))]
    pub reg_fee: f64,
    #[garde(skip)]
    pub reg_close_date: NaiveDate,
    #[garde(range(min = 1))]
    pub max_participants: i32,
}

fn non_negative(value: &f64, _ctx: &()) -> garde::Result {
    if *value < 0.0 {
        return Err(garde::Error::new("must not be negative"));
    }
    Ok(())
}

impl CreateEventRequest {
    /// Presence of all six fields is checked before any parsing, so a
    /// submission is either rejected whole or parsed whole.
    pub fn from_fields(fields: &FieldMap) -> AppResult<Self> {
        let event_name = fields.get("event_name");
        let event_date = fields.get("event_date");
        let venue = fields.get("venue");
        let registration_fee = fields.get("registration_fee");
        let registration_closes_on = fields.get("registration_closes_on");
        let max_participants = fields.get("max_participants");

        if [
            event_name,
            event_date,
            venue,
            registration_fee,
            registration_closes_on,
            max_participants,
        ]
        .iter()
        .any(|v| v.is_empty())
        {
            return Err(AppError::MissingInput("Missing required fields".into()));
        }

        Ok(Self {
            event_name: event_name.into(),
            event_date: parse_field(event_date)?,
            venue: venue.into(),
            reg_fee: parse_field(registration_fee)?,
            reg_close_date: parse_field(registration_closes_on)?,
            max_participants: parse_field(max_participants)?,
        })
    }
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            event_name,
            event_date,
            venue,
            reg_fee,
            reg_close_date,
            max_participants,
        } = value;
        Self {
            event_name,
            event_date,
            venue,
            reg_fee,
            reg_close_date,
            max_participants,
        }
    }
}

/// Wire shape of one event in the listing. Key names and types are part
/// of the contract consumed by the admin and events pages.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub event_name: String,
    #[serde(serialize_with = "serialize_date_or_empty")]
    pub event_date: Option<NaiveDate>,
    pub venue: String,
    pub reg_fee: f64,
    #[serde(serialize_with = "serialize_date_or_empty")]
    pub reg_close_date: Option<NaiveDate>,
    pub max_participants: i32,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            id,
            event_name,
            event_date,
            venue,
            reg_fee,
            reg_close_date,
            max_participants,
        } = value;
        Self {
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

/// Dates render as ISO `YYYY-MM-DD`; a missing date renders as the empty
/// string, never as JSON null.
fn serialize_date_or_empty<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.to_string()),
        None => serializer.serialize_str(""),
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use kernel::model::id::EventId;
use kernel::model::registration::event::CreateRegistration;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::SessionUser;
use crate::form::FormBody;
use crate::model::parse_field;

/// Registrations with no live session are allowed and attributed to this
/// shared name.
const GUEST_USER_NAME: &str = "Guest";

pub async fn register(
    user: SessionUser,
    State(registry): State<AppRegistry>,
    FormBody(fields): FormBody,
) -> AppResult<(StatusCode, &'static str)> {
    let raw_event_id = fields.get("event_id");
    if raw_event_id.is_empty() {
        return Err(AppError::MissingInput("Missing event_id".into()));
    }
    let event_id: EventId = parse_field(raw_event_id)?;

    let user_name = user
        .into_name()
        .unwrap_or_else(|| GUEST_USER_NAME.to_string());

    registry
        .registration_repository()
        .create(CreateRegistration::new(event_id, user_name))
        .await
        .map(|_| (StatusCode::OK, "Registered successfully!"))
}

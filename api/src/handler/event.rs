use axum::extract::State;
use axum::response::Response;
use axum::Json;
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::form::FormBody;
use crate::handler::found;
use crate::model::event::{CreateEventRequest, EventResponse};

pub async fn add_event(
    State(registry): State<AppRegistry>,
    FormBody(fields): FormBody,
) -> AppResult<Response> {
    let req = CreateEventRequest::from_fields(&fields)?;
    req.validate(&())?;

    registry.event_repository().create(req.into()).await?;

    // The success flag lets the admin page show its confirmation.
    Ok(found("/admin.html?success=1"))
}

pub async fn events_data(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventResponse>>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(|events| Json(events.into_iter().map(EventResponse::from).collect()))
}

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub mod auth;
pub mod event;
pub mod health;
pub mod registration;

// axum's Redirect emits 303/307/308; the form flows answer 302 Found.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

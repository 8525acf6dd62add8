use shared::error::{AppError, AppResult};
use std::fmt::Display;
use std::str::FromStr;

pub mod auth;
pub mod event;

/// Typed parse of an already-present form field. Presence is checked
/// before parsing, so a failure here is a malformed value, surfaced as a
/// conversion error rather than missing input.
pub(crate) fn parse_field<T>(raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|e: T::Err| AppError::ConversionEntityError(e.to_string()))
}

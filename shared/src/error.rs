use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidFormEncoding(String),
    #[error("{0}")]
    MissingInput(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    DuplicateEntity(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("Database error: {0}")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("Database error: {0}")]
    TransactionError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::InvalidFormEncoding(_)
            | AppError::MissingInput(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEntity(_) => StatusCode::CONFLICT,
            e @ (AppError::ConversionEntityError(_)
            | AppError::SpecificOperationError(_)
            | AppError::TransactionError(_)
            | AppError::NoRowsAffectedError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Error bodies stay plain text; clients key off the status code.
        (status_code, self.to_string()).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy. Every handler returns `AppResult<T>` and the
/// boundary maps each kind to a status code here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied input failed a field-level constraint.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A business-rule violation in the booking/cancellation workflow.
    #[error("{0}")]
    Booking(String),

    /// A uniqueness violation (duplicate flight number, duplicate email).
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "Validation Error", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Resource Not Found", msg),
            AppError::Booking(msg) => (StatusCode::BAD_REQUEST, "Booking Error", msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": error,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// API error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Required fields missing or empty
    #[error("{0}")]
    Validation(String),

    /// Body present but not usable as JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Email already exists")]
    Conflict,

    #[error("{0} not found")]
    NotFound(String),

    /// Storage failure; the message is surfaced as `details`
    #[error("Database error: {0}")]
    Database(String),

    /// Health probe failure
    #[error("Unhealthy: {0}")]
    Unhealthy(String),
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::InvalidInput(msg) => ApiError::Validation(msg),
            RosterError::Duplicate(_) => ApiError::Conflict,
            RosterError::NotFound { entity, .. } => ApiError::NotFound(entity),
            RosterError::Storage(msg) => ApiError::Database(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::InvalidBody(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request body", "details": details }),
            ),
            ApiError::Conflict => (
                StatusCode::CONFLICT,
                json!({ "error": "Email already exists" }),
            ),
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{} not found", entity) }),
            ),
            ApiError::Database(details) => {
                tracing::error!("Database error: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Database error", "details": details }),
                )
            }
            ApiError::Unhealthy(msg) => {
                tracing::error!("Health check failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "status": "unhealthy", "error": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

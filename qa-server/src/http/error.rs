//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Body shape: `{"error": "<message>", "status": <code>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404); `id` is logged, not returned
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed { method: String, path: String },

    /// Write rejected by a constraint (409)
    Conflict { message: String },

    /// Storage unreachable (503, logged)
    Unavailable(DbError),

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "not found");
                format!("{} not found", resource)
            }
            Self::MethodNotAllowed { method, path } => {
                format!("Method {} not allowed on {}", method, path)
            }
            Self::Conflict { message } => message.clone(),
            Self::Unavailable(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database unavailable: {}", e);
                "Database unavailable".to_string()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Constraint { constraint, .. } => Self::Conflict {
                message: format!("request conflicts with existing data ({})", constraint),
            },
            DbError::Unavailable(_) => Self::Unavailable(e),
            DbError::Query(_) => Self::Database(e),
        }
    }
}

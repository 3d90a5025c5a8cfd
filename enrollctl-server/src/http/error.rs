//! API error types with IntoResponse
//!
//! The one place where error kinds become status codes. Client errors carry
//! `{"message": ...}`; server errors carry `{"error": ..., "message": ...}`
//! with the underlying error text.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::{BodyError, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing or blank (400)
    Validation(ValidationError),

    /// Body that could not be read or coerced into a payload (500, logged)
    Internal { message: String },

    /// Resource, row or collection absent (404)
    NotFound { message: &'static str },

    /// Delete blocked by rows still referencing the target (409)
    Conflict { message: &'static str },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn not_found(message: &'static str) -> Self {
        Self::NotFound { message }
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::Conflict { message }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(e) => json!({ "message": e.to_string() }),
            Self::NotFound { message } | Self::Conflict { message } => {
                json!({ "message": message })
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                json!({
                    "error": "Internal Server Error",
                    "message": e.to_string()
                })
            }
            Self::Internal { message } => {
                tracing::error!("Request error: {}", message);
                json!({
                    "error": "Internal Server Error",
                    "message": message
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<BodyError> for ApiError {
    fn from(e: BodyError) -> Self {
        match e {
            BodyError::Invalid(e) => Self::Validation(e),
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Internal {
            message: rejection.body_text(),
        }
    }
}

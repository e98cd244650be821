//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every body carries a single `detail` key.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input (422)
    Validation(Vec<ValidationError>),

    /// Referenced entity does not exist (404)
    NotFound { resource: &'static str, id: i64 },

    /// Student already registered to the class (400)
    AlreadyEnrolled { class_id: i64, student_id: i64 },

    /// Storage failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": errors }),
            ),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id, "entity not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "detail": format!("{} not found", resource) }),
                )
            }
            Self::AlreadyEnrolled {
                class_id,
                student_id,
            } => {
                tracing::debug!(class_id, student_id, "duplicate enrollment");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "detail": "Student already registered to this class" }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(vec![e])
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::AlreadyEnrolled {
                class_id,
                student_id,
            } => Self::AlreadyEnrolled {
                class_id,
                student_id,
            },
            _ => Self::Database(e),
        }
    }
}

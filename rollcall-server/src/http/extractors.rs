//! Custom Axum extractors
//!
//! Rejections become [`ApiError::Validation`] so malformed input always
//! answers 422 with a structured detail list.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, RawPathParams, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{ValidationError, ValidationKind};

/// JSON request body whose deserialization failures map to 422
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection_to_validation(rejection).into()),
        }
    }
}

fn json_rejection_to_validation(rejection: JsonRejection) -> ValidationError {
    match rejection {
        JsonRejection::JsonDataError(e) => ValidationError::from_deserialize_message(&e.body_text()),
        JsonRejection::JsonSyntaxError(e) => {
            ValidationError::body(e.body_text(), ValidationKind::JsonInvalid)
        }
        JsonRejection::MissingJsonContentType(e) => {
            ValidationError::body(e.body_text(), ValidationKind::MissingContentType)
        }
        other => ValidationError::body(other.body_text(), ValidationKind::BodyUnreadable),
    }
}

/// Read one integer path parameter by name.
async fn id_param<S>(parts: &mut Parts, state: &S, name: &str) -> Result<i64, ApiError>
where
    S: Send + Sync,
{
    let params = RawPathParams::from_request_parts(parts, state)
        .await
        .map_err(|e| {
            ValidationError::new(
                vec!["path".to_owned(), name.to_owned()],
                e.body_text(),
                ValidationKind::Missing,
            )
        })?;

    let raw = params
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .ok_or_else(|| {
            ValidationError::new(
                vec!["path".to_owned(), name.to_owned()],
                "Field required",
                ValidationKind::Missing,
            )
        })?;

    raw.parse::<i64>()
        .map_err(|_| ValidationError::path_param(name, raw).into())
}

/// `{student_id}` path segment
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_param(parts, state, "student_id").await.map(Self)
    }
}

/// `{class_id}` path segment
pub struct ClassId(pub i64);

impl<S> FromRequestParts<S> for ClassId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_param(parts, state, "class_id").await.map(Self)
    }
}

//! Request extractors shared by the handlers
//!
//! - [`ValidJson`] - JSON body that passed `validator` checks
//! - [`ObjectId`] - `{id}` path segment that is a well-formed identifier

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use shared::util::is_object_id;
use validator::Validate;

use crate::AppError;
use crate::utils::validation::validation_error;

/// JSON body, deserialized then validated
///
/// Malformed JSON and wrong field types map to 400 ValidationFailed with the
/// decoder message.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    AppError::invalid_request("Expected a JSON body")
                }
                other => AppError::validation(other.body_text()),
            })?;
        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// Path identifier checked against the 24-hex format before any lookup
///
/// Carries the lowercase form, which is how ids are stored.
#[derive(Debug, Clone)]
pub struct ObjectId(pub String);

impl<S> FromRequestParts<S> for ObjectId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        if !is_object_id(&id) {
            return Err(AppError::invalid_id(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }
}

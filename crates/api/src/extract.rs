//! Request body and path extraction.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use pagewatch_core::error::CoreError;
use pagewatch_core::validation::{self, FieldErrors, NON_FIELD_ERRORS};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections are validation errors.
///
/// Malformed JSON, a missing `Content-Type: application/json` header, or a
/// value of the wrong type become a 400 `VALIDATION_ERROR` with the message
/// under `non_field_errors`, matching how field-level failures are shaped.
/// Field rules themselves are applied by the payload's `into_*` method.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => {
                let mut errors = FieldErrors::new();
                validation::push(&mut errors, NON_FIELD_ERRORS, rejection.body_text());
                Err(AppError::Core(CoreError::InvalidFields(errors)))
            }
        }
    }
}

/// Path extractor that reports unparseable segments as `BAD_REQUEST`.
///
/// Axum's own [`Path`] rejection is plain text; this keeps the JSON error shape.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ValidPath(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }
}

//! Validated JSON body extractor.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use quill_core::{FieldErrors, Validate};

use crate::error::ApiError;

/// JSON body that has passed its own validation rules.
///
/// Rejections come in two shapes, both answered as 422 envelopes: a
/// body that is not valid JSON for `T`, and a well-formed body whose
/// field values fail [`Validate`].
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(%rejection, "Request body rejected");

                let mut errors = FieldErrors::new();
                errors
                    .entry("body".to_string())
                    .or_default()
                    .push("The request body must be valid JSON.".to_string());
                ApiError::validation(errors)
            })?;

        value.validate().map_err(ApiError::validation)?;

        Ok(ValidJson(value))
    }
}

//! Authenticated principal extractor.

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};

use quill_core::UserId;

use crate::auth::token::TokenError;
use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated principal of a request.
///
/// Extracting this type resolves the `Authorization: Bearer` header to
/// a verified [`UserId`] before the handler body runs; any failure
/// short-circuits into a 401 envelope. Write handlers take an
/// `AuthUser` argument, read handlers do not - that is the entire
/// authorization surface at the routing level.
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Authorization token not provided"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Token is invalid"))?;

        let user = state.auth().verify(token).map_err(|error| match error {
            TokenError::Expired => ApiError::unauthorized("Token has expired"),
            _ => ApiError::unauthorized("Token is invalid"),
        })?;

        Ok(AuthUser(user))
    }
}

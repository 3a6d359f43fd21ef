//! Bearer token issuance and verification.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use quill_core::UserId;

/// Token TTL usado cuando no se configura otro: 1 hora.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Error de tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry is in the past.
    #[error("token expired")]
    Expired,

    /// Anything else: bad signature, malformed payload, wrong shape.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// Signing failed while issuing.
    #[error("token issuance failed: {0}")]
    Issuance(String),
}

/// Claims carried by every issued token.
///
/// `sub` is the user id - the only fact the services trust a token for.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 token service.
///
/// The explicit principal resolver: handlers never parse headers or
/// tokens themselves, they receive a verified [`UserId`] or a 401.
///
/// # Examples
///
/// ```
/// use quill_api::auth::TokenService;
/// use quill_core::UserId;
///
/// let service = TokenService::new("secret", 3600);
/// let token = service.issue(UserId::new(1)).unwrap();
///
/// assert_eq!(service.verify(&token).unwrap(), UserId::new(1));
/// ```
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    /// Creates a service signing and verifying with the given secret.
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issues a token whose subject is the given user.
    pub fn issue(&self, user: UserId) -> Result<String, TokenError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: user.as_i64(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|error| TokenError::Issuance(error.to_string()))
    }

    /// Recovers the subject from a bearer token, or fails.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |error| match error.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(error.to_string()),
            },
        )?;

        Ok(UserId::new(data.claims.sub))
    }
}

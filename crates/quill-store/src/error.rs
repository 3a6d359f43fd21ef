//! Error types for store backends.

use quill_core::{PostId, UserId};

/// Errors that can occur when working with a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested post does not exist.
    #[error("post not found: {0}")]
    PostNotFound(PostId),

    /// The requested user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The email address is already registered.
    #[error("email already taken: {0}")]
    EmailTaken(String),

    /// The store is not reachable or failed mid-operation.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if this error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::UserNotFound(_))
    }

    /// Returns true if this error is a uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailTaken(_))
    }
}

//! Public user representation.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The owner fields denormalized into post payloads and returned by the
/// auth endpoints.
///
/// This is the only user shape that crosses the HTTP boundary. The
/// password hash lives in the store and never leaves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    /// User identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address (also the login identifier)
    pub email: String,
}

impl UserPublic {
    /// Creates a new public user view.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

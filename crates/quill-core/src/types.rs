//! Common identifier newtypes for Quill.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Post identifier.
///
/// Assigned sequentially by the store on create, starting at 1.
/// Also the value interpolated into the `posts:{id}` cache key.
///
/// # Example
///
/// ```
/// use quill_core::PostId;
///
/// let id = PostId::new(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Creates a new PostId.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// User identifier.
///
/// Doubles as the authenticated principal: the bearer token's subject
/// claim is a `UserId`.
///
/// # Example
///
/// ```
/// use quill_core::UserId;
///
/// let id = UserId::new(1);
/// assert_eq!(id.as_i64(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a new UserId.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

//! The post model.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{PostId, UserId};
use crate::user::UserPublic;

/// Maximum accepted title length, in characters.
pub const TITLE_MAX_LEN: usize = 255;

/// A blog post as served by both services.
///
/// The store owns the canonical copy and assigns `id`, `created_at` and
/// `updated_at`; the cache only ever holds serialized snapshots of this
/// struct. The owner's public fields are denormalized into `user` so a
/// single cache entry is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier, assigned by the store
    pub id: PostId,

    /// Title, non-empty
    pub title: String,

    /// Body content
    pub content: String,

    /// Owning user identifier
    pub user_id: UserId,

    /// Set by the store on create
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// Refreshed by the store on every update
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,

    /// Denormalized owner fields
    pub user: UserPublic,
}

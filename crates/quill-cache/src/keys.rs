//! Cache key naming policy.

use std::fmt;

use quill_core::PostId;

/// Key de cache para el dominio de posts.
///
/// Both services and both directions (read-populate and
/// invalidate-on-write) build keys through this type, so the naming
/// scheme cannot drift between call sites.
///
/// # Examples
///
/// ```
/// use quill_cache::CacheKey;
/// use quill_core::PostId;
///
/// assert_eq!(CacheKey::AllPosts.to_string(), "posts:all");
/// assert_eq!(CacheKey::post(7).to_string(), "posts:7");
/// assert_eq!(CacheKey::Post(PostId::new(7)), CacheKey::post(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The entire unfiltered listing. Any post write drops this key.
    AllPosts,
    /// A single post, invalidated only when that post changes.
    Post(PostId),
}

impl CacheKey {
    /// Entity key for one post.
    pub fn post(id: impl Into<PostId>) -> Self {
        Self::Post(id.into())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllPosts => write!(f, "posts:all"),
            Self::Post(id) => write!(f, "posts:{id}"),
        }
    }
}

/// Keys a successful write must drop before the response goes out.
///
/// Create passes `None` (there is no entity entry yet); update and
/// delete pass the touched id. Every write invalidates the collection
/// key - the listing is cached as one coarse entry.
pub fn write_invalidation(id: Option<PostId>) -> Vec<CacheKey> {
    match id {
        Some(id) => vec![CacheKey::Post(id), CacheKey::AllPosts],
        None => vec![CacheKey::AllPosts],
    }
}

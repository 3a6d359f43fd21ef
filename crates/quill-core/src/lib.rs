//! Quill Core - Domain types and validation
//!
//! This crate provides the foundational types shared by the Quill API
//! and the cache mirror service: identifiers, the post and user models,
//! the uniform response envelope, and field-level validation.

pub mod envelope;
pub mod post;
pub mod types;
pub mod user;
pub mod validation;

pub use envelope::ApiResponse;
pub use post::Post;
pub use types::{PostId, UserId};
pub use user::UserPublic;
pub use validation::{FieldErrors, Validate};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! # Quill Store
//!
//! Source-of-truth storage for the Quill services.
//!
//! This crate defines the `PostStore` and `UserStore` trait seams the
//! HTTP services program against, plus the in-memory backend both
//! binaries construct at startup. The cache layer never talks to this
//! crate directly; it only sees values the services load through these
//! traits.
//!
//! ## Example
//!
//! ```
//! use quill_store::{MemoryBackend, NewPost, NewUser, PostStore, UserStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), quill_store::StoreError> {
//! let backend = MemoryBackend::new();
//!
//! let author = backend
//!     .create_user(NewUser::new("Test User", "test@example.com", "<bcrypt hash>"))
//!     .await?;
//!
//! let post = backend
//!     .create(NewPost::new("T", "C", author.id))
//!     .await?;
//!
//! assert_eq!(backend.get(post.id).await?.title, "T");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod traits;

// Re-exports
pub use error::StoreError;
pub use memory::MemoryBackend;
pub use traits::{NewPost, NewUser, PostStore, PostUpdate, UserAuth, UserStore};

// Re-export quill_core for consumers
pub use quill_core;

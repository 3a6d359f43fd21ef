//! # Quill Cache
//!
//! Cache-aside read layer shared by the API service and the mirror
//! service.
//!
//! The acceleration pattern is the same in both processes: check the
//! cache first, fall back to the store on a miss, populate the cache
//! with the loaded value under a fixed TTL, and drop keys explicitly
//! when a write lands. The cache is never authoritative and never a
//! single point of failure - a broken cache degrades every read into a
//! store read.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use quill_cache::{CacheAsideReader, CacheConfig, CacheKey, MemoryCache};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), std::convert::Infallible> {
//! let config = CacheConfig::default();
//! let reader = CacheAsideReader::new(Arc::new(MemoryCache::new(&config)), &config);
//!
//! let listing = reader
//!     .get_with(&CacheKey::AllPosts, || async { Ok::<_, std::convert::Infallible>(vec!["hello".to_string()]) })
//!     .await?;
//! assert!(!listing.hit);
//!
//! // Populated now: the loader is not consulted again
//! let listing = reader
//!     .get_with::<Vec<String>, std::convert::Infallible, _, _>(
//!         &CacheKey::AllPosts,
//!         || async { unreachable!() },
//!     )
//!     .await?;
//! assert!(listing.hit);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod keys;
pub mod memory;
pub mod metrics;
pub mod reader;

// Re-exports
pub use backend::{CacheBackend, CacheConfig, CacheError};
pub use keys::{CacheKey, write_invalidation};
pub use memory::MemoryCache;
pub use metrics::{CacheMetrics, register_cache_metrics};
pub use reader::{CacheAsideReader, Cached};

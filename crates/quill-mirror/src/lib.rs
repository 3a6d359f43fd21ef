//! Quill Mirror - read-only cached view over the post store
//!
//! A second, independent service exposing the posts read path behind
//! `/cache/...` routes. It shares the store and the cache-aside logic
//! with the API service but owns a separate cache instance; the key
//! policy is identical, so both caches hold the same snapshots for the
//! same data.

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::MirrorError;
pub use server::{create_router, create_router_with_state, run_server};
pub use state::MirrorState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Quill API - authentication and posts CRUD service
//!
//! Axum-based HTTP service exposing registration/login plus the posts
//! CRUD surface. Reads go through the shared cache-aside layer; writes
//! hit the store and invalidate the affected cache keys before the
//! response goes out.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{create_router, create_router_with_state, run_server};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

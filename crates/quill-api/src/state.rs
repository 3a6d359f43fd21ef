//! Application state.

use std::sync::Arc;

use quill_cache::{CacheAsideReader, CacheBackend, CacheConfig, MemoryCache};
use quill_store::{MemoryBackend, PostStore, UserStore};

use crate::auth::TokenService;

/// Application state shared across all handlers.
///
/// Constructed once in `main` and cloned into the router; every
/// dependency is an injected handle, nothing is reached through a
/// global.
#[derive(Clone)]
pub struct AppState {
    /// Source of truth for posts.
    posts: Arc<dyn PostStore>,

    /// User persistence for the auth endpoints.
    users: Arc<dyn UserStore>,

    /// Cache-aside read layer over this service's cache instance.
    reader: CacheAsideReader,

    /// Principal resolver.
    auth: TokenService,
}

impl AppState {
    /// Creates a new AppState from explicit handles.
    pub fn new(
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserStore>,
        reader: CacheAsideReader,
        auth: TokenService,
    ) -> Self {
        Self {
            posts,
            users,
            reader,
            auth,
        }
    }

    /// Wires an in-memory backend behind both store handles and a fresh
    /// cache instance behind the reader.
    pub fn from_memory_backend(
        backend: MemoryBackend,
        cache_config: &CacheConfig,
        auth: TokenService,
    ) -> Self {
        let backend = Arc::new(backend);
        let cache: Arc<dyn CacheBackend> = Arc::new(MemoryCache::new(cache_config));

        Self {
            posts: Arc::clone(&backend) as Arc<dyn PostStore>,
            users: backend,
            reader: CacheAsideReader::new(cache, cache_config),
            auth,
        }
    }

    /// Returns a handle to the post store.
    pub fn posts(&self) -> Arc<dyn PostStore> {
        Arc::clone(&self.posts)
    }

    /// Returns a handle to the user store.
    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    /// Returns the cache-aside reader.
    pub fn reader(&self) -> &CacheAsideReader {
        &self.reader
    }

    /// Returns the token service.
    pub fn auth(&self) -> &TokenService {
        &self.auth
    }
}

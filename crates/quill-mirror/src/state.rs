//! Mirror service state.

use std::sync::Arc;

use quill_cache::{CacheAsideReader, CacheBackend, CacheConfig, MemoryCache};
use quill_store::{MemoryBackend, PostStore};

/// State shared across all mirror handlers.
///
/// Read-only: a store handle and a cache-aside reader over this
/// service's own cache instance. There is no user store and no token
/// service here on purpose.
#[derive(Clone)]
pub struct MirrorState {
    posts: Arc<dyn PostStore>,
    reader: CacheAsideReader,
}

impl MirrorState {
    /// Creates a new MirrorState from explicit handles.
    pub fn new(posts: Arc<dyn PostStore>, reader: CacheAsideReader) -> Self {
        Self { posts, reader }
    }

    /// Wires an in-memory backend and a fresh cache instance.
    pub fn from_memory_backend(backend: MemoryBackend, cache_config: &CacheConfig) -> Self {
        let cache: Arc<dyn CacheBackend> = Arc::new(MemoryCache::new(cache_config));

        Self {
            posts: Arc::new(backend),
            reader: CacheAsideReader::new(cache, cache_config),
        }
    }

    /// Returns a handle to the post store.
    pub fn posts(&self) -> Arc<dyn PostStore> {
        Arc::clone(&self.posts)
    }

    /// Returns the cache-aside reader.
    pub fn reader(&self) -> &CacheAsideReader {
        &self.reader
    }
}

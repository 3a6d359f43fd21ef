//! Cache-aside reader: get-or-populate plus invalidate-on-write.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::{CacheBackend, CacheConfig};
use crate::keys::CacheKey;
use crate::metrics::CacheMetrics;

/// A value read through the cache, tagged with whether it was served
/// from the cache or loaded from the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    pub value: T,
    pub hit: bool,
}

/// Lector cache-aside.
///
/// Wraps a [`CacheBackend`] with the read pattern both services share:
/// check the cache, fall back to a loader bound to the store, populate
/// on miss with a fixed TTL, and expose explicit invalidation for the
/// write path. Cache failures of any kind degrade into a miss; only the
/// loader can fail a read.
///
/// Concurrent misses for the same key may each run the loader and each
/// populate the cache. The last writer wins and the duplicated load is
/// only redundant backend work, so no single-flight coordination is
/// attempted.
#[derive(Clone)]
pub struct CacheAsideReader {
    backend: Arc<dyn CacheBackend>,
    ttl: Duration,
    metrics: CacheMetrics,
}

impl CacheAsideReader {
    /// Creates a reader over the given backend with the configured TTL.
    pub fn new(backend: Arc<dyn CacheBackend>, config: &CacheConfig) -> Self {
        Self {
            backend,
            ttl: config.ttl(),
            metrics: CacheMetrics::new(),
        }
    }

    /// Returns the cached value for `key`, or loads, populates and
    /// returns it.
    ///
    /// The loader runs only on a miss. On loader failure the error is
    /// propagated untouched and the cache is left unwritten - a failed
    /// or partial load never becomes an entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use quill_cache::{CacheAsideReader, CacheConfig, CacheKey, MemoryCache};
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), std::convert::Infallible> {
    /// # let config = CacheConfig::default();
    /// # let reader = CacheAsideReader::new(Arc::new(MemoryCache::new(&config)), &config);
    /// let posts = reader
    ///     .get_with(&CacheKey::AllPosts, || async { Ok::<_, std::convert::Infallible>(vec![1, 2, 3]) })
    ///     .await?;
    ///
    /// assert_eq!(posts.value, vec![1, 2, 3]);
    /// assert!(!posts.hit);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_with<T, E, F, Fut>(&self, key: &CacheKey, loader: F) -> Result<Cached<T>, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let start = Instant::now();
        let key_str = key.to_string();

        match self.backend.get(&key_str).await {
            Ok(Some(payload)) => match serde_json::from_str::<T>(&payload) {
                Ok(value) => {
                    self.metrics.record_hit();
                    self.metrics
                        .record_operation_duration("get_hit", start.elapsed());
                    debug!(key = %key_str, "Cache hit");

                    return Ok(Cached { value, hit: true });
                }
                Err(error) => {
                    // Un snapshot que no decodifica se trata como miss
                    warn!(key = %key_str, %error, "Undecodable cache entry, reloading");
                }
            },
            Ok(None) => {}
            Err(error) => {
                warn!(
                    key = %key_str,
                    backend = self.backend.name(),
                    %error,
                    "Cache read failed, falling back to store"
                );
            }
        }

        self.metrics.record_miss();
        debug!(key = %key_str, "Cache miss");

        let value = loader().await?;

        match serde_json::to_string(&value) {
            Ok(payload) => match self.backend.set(&key_str, payload, self.ttl).await {
                Ok(()) => self.metrics.record_population(),
                Err(error) => {
                    warn!(key = %key_str, %error, "Cache population failed");
                }
            },
            Err(error) => {
                warn!(key = %key_str, %error, "Value not serializable, cache not populated");
            }
        }

        self.metrics
            .record_operation_duration("get_miss", start.elapsed());

        Ok(Cached { value, hit: false })
    }

    /// Removes a key unconditionally. A missing key is not an error and
    /// a backend failure is logged, not surfaced: the write that
    /// triggered the invalidation has already committed, and the TTL
    /// still bounds how long the stale entry can survive.
    pub async fn invalidate(&self, key: &CacheKey) {
        let key_str = key.to_string();

        match self.backend.delete(&key_str).await {
            Ok(()) => {
                self.metrics.record_invalidation();
                debug!(key = %key_str, "Cache entry invalidated");
            }
            Err(error) => {
                warn!(key = %key_str, %error, "Cache invalidation failed");
            }
        }
    }

    /// Invalida varias keys en orden.
    pub async fn invalidate_many(&self, keys: &[CacheKey]) {
        for key in keys {
            self.invalidate(key).await;
        }
    }

    /// Retorna las metricas para acceso externo.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}

//! Cache backend abstraction.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Error del backend de cache.
///
/// Backend failures are deliberately coarse: the reader treats every
/// one of them as a miss, so precise classification buys nothing.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache service is not reachable.
    #[error("cache unavailable: {reason}")]
    Unavailable { reason: String },

    /// A single operation failed.
    #[error("cache operation failed: {0}")]
    Operation(String),
}

impl CacheError {
    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a new operation error.
    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation(message.into())
    }
}

/// Configuracion del cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL en segundos (default: 3600 = 1 hora)
    pub ttl_seconds: u64,
    /// Maximo numero de entries (default: 10000)
    pub max_capacity: u64,
}

impl CacheConfig {
    /// The fixed TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 3600,
            max_capacity: 10_000,
        }
    }
}

/// A key/value store with expiry, used purely as an acceleration layer.
///
/// This trait abstracts over cache stores (in-process, Redis, etc.) so
/// the reader can run in front of whichever instance a service owns.
/// Implementations guarantee atomic per-key operations; nothing more.
///
/// # Implementors
///
/// - `MemoryCache` - Moka-backed in-process store
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the serialized value for a key, if present and not
    /// expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a serialized value. The entry expires `ttl` after this
    /// write; overwriting restarts the clock (last writer wins).
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Removes a key. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Returns the name of this backend, for logging.
    fn name(&self) -> &str;
}

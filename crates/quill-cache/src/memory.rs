//! In-process cache store using Moka.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use crate::backend::{CacheBackend, CacheConfig, CacheError};

/// Entry almacenada: payload serializado mas el TTL con el que se
/// escribio, para que cada entrada expire de forma independiente.
#[derive(Debug, Clone)]
struct Entry {
    payload: String,
    ttl: Duration,
}

/// Expiry policy: each entry lives for the TTL recorded at write time.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        // Overwrites restart the clock
        Some(value.ttl)
    }
}

/// Cache en memoria respaldado por Moka.
/// Thread-safe y async-friendly.
///
/// Each service owns its own instance; there is no cross-process
/// coherency, matching a per-service Redis database.
///
/// # Examples
///
/// ```
/// use quill_cache::{CacheBackend, CacheConfig, MemoryCache};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), quill_cache::CacheError> {
/// let cache = MemoryCache::new(&CacheConfig::default());
///
/// cache.set("posts:all", "[]".to_string(), Duration::from_secs(3600)).await?;
/// assert_eq!(cache.get("posts:all").await?.as_deref(), Some("[]"));
/// # Ok(())
/// # }
/// ```
pub struct MemoryCache {
    inner: Cache<String, Entry>,
}

impl MemoryCache {
    /// Crea un nuevo cache con la configuracion dada.
    pub fn new(config: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { inner }
    }

    /// Retorna el numero aproximado de entries en cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Invalida todas las entradas.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.get(key).await.map(|entry| entry.payload))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.inner
            .insert(
                key.to_string(),
                Entry {
                    payload: value,
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.inner.invalidate(key).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn set_then_get_returns_the_payload() {
        let cache = MemoryCache::new(&CacheConfig::default());

        cache
            .set("posts:1", r#"{"id":1}"#.to_string(), TTL)
            .await
            .unwrap();

        assert_eq!(
            cache.get("posts:1").await.unwrap().as_deref(),
            Some(r#"{"id":1}"#)
        );
    }

    #[tokio::test]
    async fn unwritten_keys_are_absent() {
        let cache = MemoryCache::new(&CacheConfig::default());

        assert!(cache.get("posts:all").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn entries_expire_after_their_own_ttl() {
        let cache = MemoryCache::new(&CacheConfig::default());

        cache
            .set("posts:1", "short".to_string(), Duration::from_millis(40))
            .await
            .unwrap();
        cache
            .set("posts:2", "long".to_string(), TTL)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(cache.get("posts:1").await.unwrap().is_none());
        assert!(cache.get("posts:2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn overwrite_restarts_the_clock() {
        let cache = MemoryCache::new(&CacheConfig::default());

        cache
            .set("posts:1", "old".to_string(), Duration::from_millis(40))
            .await
            .unwrap();
        cache
            .set("posts:1", "new".to_string(), TTL)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(cache.get("posts:1").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let cache = MemoryCache::new(&CacheConfig::default());

        cache.set("posts:1", "x".to_string(), TTL).await.unwrap();

        cache.delete("posts:1").await.unwrap();
        cache.delete("posts:1").await.unwrap();
        cache.delete("posts:never-written").await.unwrap();

        assert!(cache.get("posts:1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalidate_all_empties_the_store() {
        let cache = MemoryCache::new(&CacheConfig::default());

        for i in 0..5 {
            cache
                .set(&format!("posts:{i}"), "x".to_string(), TTL)
                .await
                .unwrap();
        }

        cache.invalidate_all();

        for i in 0..5 {
            assert!(cache.get(&format!("posts:{i}")).await.unwrap().is_none());
        }
    }
}

//! Cache manager.

use super::backend::CacheBackend;
use super::key::CacheKey;
use crate::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Standard ttl tiers.
pub struct CacheTtl;

impl CacheTtl {
    /// Volatile results (search).
    pub const SHORT: Duration = Duration::from_secs(5 * 60);
    pub const MEDIUM: Duration = Duration::from_secs(30 * 60);
    /// Stable results (profile summaries, single-tool analyses).
    pub const LONG: Duration = Duration::from_secs(60 * 60);
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub default_ttl: Duration,
    pub enabled: bool,
    pub max_entry_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: CacheTtl::MEDIUM,
            enabled: true,
            max_entry_size: 1024 * 1024,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
    pub fn with_max_entry_size(mut self, bytes: usize) -> Self {
        self.max_entry_size = bytes;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub errors: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    errors: AtomicU64,
}

impl AtomicStats {
    fn to_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Typed facade over a [`CacheBackend`]. Values are stored as JSON.
pub struct CacheManager {
    config: CacheConfig,
    backend: Box<dyn CacheBackend>,
    stats: AtomicStats,
}

impl CacheManager {
    pub fn new(config: CacheConfig, backend: Box<dyn CacheBackend>) -> Self {
        Self {
            config,
            backend,
            stats: AtomicStats::default(),
        }
    }

    /// A stored value that no longer decodes as `T` is reported as a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>> {
        if !self.config.enabled {
            return Ok(None);
        }
        match self.backend.get(key).await {
            Ok(Some(data)) => match serde_json::from_slice(&data) {
                Ok(val) => {
                    self.stats.hits.fetch_add(1, Ordering::Relaxed);
                    Ok(Some(val))
                }
                Err(_) => {
                    self.stats.misses.fetch_add(1, Ordering::Relaxed);
                    self.stats.errors.fetch_add(1, Ordering::Relaxed);
                    Ok(None)
                }
            },
            Ok(None) => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    pub async fn set<T: Serialize>(&self, key: &CacheKey, value: &T) -> Result<()> {
        self.set_with_ttl(key, value, self.config.default_ttl).await
    }

    pub async fn set_with_ttl<T: Serialize>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> Result<()> {
        if !self.config.enabled {
            return Ok(());
        }
        let data = serde_json::to_vec(value)?;
        if data.len() > self.config.max_entry_size {
            return Ok(());
        }
        match self.backend.set(key, &data, ttl).await {
            Ok(()) => {
                self.stats.sets.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, key: &CacheKey) -> Result<bool> {
        self.backend.delete(key).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.backend.clear().await
    }

    pub async fn len(&self) -> Result<usize> {
        self.backend.len().await
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.to_stats()
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryCache, NullCache};

    fn manager() -> CacheManager {
        CacheManager::new(CacheConfig::default(), Box::new(MemoryCache::new()))
    }

    #[tokio::test]
    async fn test_typed_round_trip_counts_hit() {
        let cache = manager();
        let key = CacheKey::new("search_cQ==");
        cache
            .set_with_ttl(&key, &vec![3u64, 1, 2], CacheTtl::SHORT)
            .await
            .unwrap();
        let ids: Option<Vec<u64>> = cache.get(&key).await.unwrap();
        assert_eq!(ids, Some(vec![3, 1, 2]));
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.sets), (1, 0, 1));
    }

    #[tokio::test]
    async fn test_expired_value_is_a_miss() {
        let cache = manager();
        let key = CacheKey::new("summary_x");
        cache
            .set_with_ttl(&key, &"text", Duration::from_millis(20))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        let v: Option<String> = cache.get(&key).await.unwrap();
        assert!(v.is_none());
        assert_eq!(cache.stats().misses, 1);
        assert!(cache.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_type_mismatch_is_a_miss_not_an_error() {
        let cache = manager();
        let key = CacheKey::new("k");
        cache.set(&key, &"not a list").await.unwrap();
        let v: Option<Vec<u64>> = cache.get(&key).await.unwrap();
        assert!(v.is_none());
        assert_eq!(cache.stats().errors, 1);
    }

    #[tokio::test]
    async fn test_disabled_cache_skips_backend() {
        let cache = CacheManager::new(
            CacheConfig::default().with_enabled(false),
            Box::new(MemoryCache::new()),
        );
        let key = CacheKey::new("k");
        cache.set(&key, &"v").await.unwrap();
        assert_eq!(cache.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_oversized_entry_not_stored() {
        let cache = CacheManager::new(
            CacheConfig::default().with_max_entry_size(8),
            Box::new(MemoryCache::new()),
        );
        let key = CacheKey::new("k");
        cache.set(&key, &"a string longer than eight bytes").await.unwrap();
        assert_eq!(cache.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clear_and_backend_name() {
        let cache = manager();
        cache.set(&CacheKey::new("a"), &1u8).await.unwrap();
        cache.clear().await.unwrap();
        assert!(cache.is_empty().await.unwrap());
        assert_eq!(cache.backend_name(), "memory");

        let null = CacheManager::new(CacheConfig::default(), Box::new(NullCache::new()));
        assert_eq!(null.backend_name(), "null");
    }

    #[test]
    fn test_hit_ratio() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        assert!((stats.hit_ratio() - 0.75).abs() < f64::EPSILON);
        assert_eq!(CacheStats::default().hit_ratio(), 0.0);
    }
}

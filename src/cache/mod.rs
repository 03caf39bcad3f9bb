//! 响应缓存模块：按操作与输入生成键，带 TTL 的内存缓存，读时惰性淘汰。
//!
//! # Response Caching Module
//!
//! Completion results are cached per logical operation so that repeating the
//! same question within the ttl window costs no network round-trip and no
//! throttle wait.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CacheManager`] | Typed get/set facade with statistics |
//! | [`CacheConfig`] | Enable switch, default ttl, entry size cap |
//! | [`CacheBackend`] | Trait for storage backends |
//! | [`MemoryCache`] | In-memory map, expiry checked on read |
//! | [`NullCache`] | No-op backend for disabling caching |
//! | [`CacheKeyGenerator`] | Operation + payload → [`CacheKey`] |
//!
//! ## Example
//!
//! ```rust
//! use aitools_client::cache::{CacheConfig, CacheKeyGenerator, CacheManager, MemoryCache};
//! use std::time::Duration;
//!
//! # tokio_test_block(async {
//! let cache = CacheManager::new(CacheConfig::default(), Box::new(MemoryCache::new()));
//! let key = CacheKeyGenerator::new().generate("summary", &["Rust engineer"]);
//! cache.set_with_ttl(&key, &"cached".to_string(), Duration::from_secs(60)).await.unwrap();
//! let hit: Option<String> = cache.get(&key).await.unwrap();
//! assert_eq!(hit.as_deref(), Some("cached"));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! ## Eviction
//!
//! There is no background sweep and no capacity bound: an entry is removed
//! only when it is read after its ttl, overwritten, or the cache is cleared.

mod backend;
mod key;
mod manager;

pub use backend::{CacheBackend, CacheEntry, MemoryCache, NullCache};
pub use key::{CacheKey, CacheKeyGenerator, KeyStrategy, DEFAULT_KEY_LENGTH};
pub use manager::{CacheConfig, CacheManager, CacheStats, CacheTtl};

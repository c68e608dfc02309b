//! Caching infrastructure for the service layer.
//!
//! A cache abstraction with in-memory, Redis and disabled backends. The
//! category menu is the main tenant; entries are stored as JSON and read back
//! through the typed [`CacheExt`] methods.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::InMemoryCacheService;
pub use redis_cache::RedisCacheService;

use std::sync::Arc;
use sunrise_config::{CacheBackend, CacheConfig};
use sunrise_core::{SunriseError, SunriseResult};
use tracing::info;

/// Creates the cache backend selected in configuration.
pub fn create_cache(config: &CacheConfig) -> SunriseResult<Arc<dyn CacheInterface>> {
    let cache: Arc<dyn CacheInterface> = match config.backend {
        CacheBackend::Memory => Arc::new(InMemoryCacheService::new()),
        CacheBackend::Disabled => Arc::new(RedisCacheService::disabled()),
        CacheBackend::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| {
                SunriseError::configuration("Redis URL required when the cache backend is redis")
            })?;
            Arc::new(RedisCacheService::connect(url, config.redis_pool_size)?)
        }
    };

    info!(backend = ?config.backend, "Cache backend created");
    Ok(cache)
}

//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use std::sync::Arc;
use std::time::Duration;
use sunrise_core::{SunriseError, SunriseResult};
use tracing::{debug, info};

/// Redis-based cache service, shared by every storefront process.
///
/// A disabled instance (no pool) misses on every read and drops every write.
#[derive(Clone)]
pub struct RedisCacheService {
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a cache service over an existing pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Build a connection pool for `url`.
    ///
    /// Connections are opened lazily, so an unreachable server surfaces as
    /// [`SunriseError::Cache`] on first use.
    pub fn connect(url: &str, pool_size: usize) -> SunriseResult<Self> {
        let pool = Config::from_url(url)
            .builder()
            .map_err(|e| SunriseError::configuration(format!("Invalid Redis config: {}", e)))?
            .max_size(pool_size)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| SunriseError::configuration(format!("Failed to create Redis pool: {}", e)))?;

        info!("Redis cache pool created (max size {})", pool_size);
        Ok(Self::new(Arc::new(pool)))
    }

    /// Create a no-op cache service.
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    async fn get_conn(&self) -> SunriseResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                SunriseError::cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(SunriseError::cache("Cache is disabled")),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> SunriseResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| SunriseError::cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SunriseResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| SunriseError::cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> SunriseResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| SunriseError::cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> SunriseResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| SunriseError::cache(format!("Failed to check key '{}': {}", key, e)))?;

        Ok(exists)
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

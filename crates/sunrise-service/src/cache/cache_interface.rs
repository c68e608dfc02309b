//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use std::time::Duration;
use sunrise_core::{Interface, SunriseResult};
use tracing::warn;

/// Cache interface for storing and retrieving cached data.
///
/// Values are JSON strings so the trait stays dyn-compatible; the typed
/// accessors live in [`CacheExt`].
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> SunriseResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SunriseResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> SunriseResult<bool>;

    /// Check if an unexpired key exists in the cache.
    async fn exists(&self, key: &str) -> SunriseResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> SunriseResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> SunriseResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Get a value or compute and cache it if not present.
    ///
    /// Degradable cache failures (see [`sunrise_core::SunriseError::is_degradable`]) never
    /// fail the call: a failed read or an undecodable entry counts as a miss
    /// and a failed write is only logged. Any other error, including those
    /// from `factory`, is returned as-is.
    async fn get_or_set<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        factory: F,
    ) -> SunriseResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = SunriseResult<T>> + Send,
    {
        let cached = match self.get_raw(key).await {
            Ok(cached) => cached,
            Err(e) if e.is_degradable() => {
                warn!("Cache read for '{}' failed, rebuilding: {}", key, e);
                None
            }
            Err(e) => return Err(e),
        };

        if let Some(json) = cached {
            match serde_json::from_str(&json) {
                Ok(value) => return Ok(value),
                Err(e) => warn!("Cached value for '{}' is unreadable, rebuilding: {}", key, e),
            }
        }

        let value = factory().await?;

        match self.set(key, &value, ttl).await {
            Ok(()) => {}
            Err(e) if e.is_degradable() => warn!("Cache write for '{}' failed: {}", key, e),
            Err(e) => return Err(e),
        }

        Ok(value)
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}

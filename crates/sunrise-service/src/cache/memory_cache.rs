//! Process-local cache with TTL expiry.

use super::CacheInterface;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use sunrise_core::SunriseResult;
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory cache service.
///
/// Expired entries are dropped lazily when they are next looked up.
#[derive(Debug, Default)]
pub struct InMemoryCacheService {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl InMemoryCacheService {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock();
        let now = Instant::now();
        let expired = entries.get(key)?.is_expired(now);
        if expired {
            entries.remove(key);
            debug!("Cache entry '{}' expired", key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> SunriseResult<Option<String>> {
        let value = self.live_value(key);

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SunriseResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete(&self, key: &str) -> SunriseResult<bool> {
        let deleted = self.entries.lock().remove(key).is_some();
        debug!("Deleted key '{}': {}", key, deleted);
        Ok(deleted)
    }

    async fn exists(&self, key: &str) -> SunriseResult<bool> {
        Ok(self.live_value(key).is_some())
    }
}

use crate::config::{CacheConfig, DEFAULT_MAX_CAPACITY, DEFAULT_TTL};
use moka::sync::Cache;
use relink_core::LinkCache;
use std::time::Duration;
use tracing::trace;

/// A size-bounded TTL cache backed by Moka.
///
/// Unlike [`SweepingCache`](crate::SweepingCache), Moka checks expiry on
/// every read and evicts by size as well as by age, so an expired entry is
/// never served.
#[derive(Debug, Clone)]
pub struct MokaLinkCache {
    cache: Cache<String, String>,
}

impl MokaLinkCache {
    /// Creates a cache with the default capacity and TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_MAX_CAPACITY, DEFAULT_TTL)
    }

    /// Creates a cache with a custom capacity and time-to-live.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries the cache can hold
    /// * `ttl` - Time-to-live for cache entries
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }
}

impl Default for MokaLinkCache {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CacheConfig> for MokaLinkCache {
    fn from(config: CacheConfig) -> Self {
        Self::with_ttl(config.max_capacity, config.ttl)
    }
}

impl LinkCache for MokaLinkCache {
    fn add(&self, key: &str, value: &str) {
        self.cache.insert(key.to_string(), value.to_string());
        trace!(key = %key, "Cached link in Moka");
    }

    fn get(&self, key: &str) -> Option<String> {
        let value = self.cache.get(key);
        trace!(key = %key, hit = value.is_some(), "Moka cache lookup");
        value
    }

    fn len(&self) -> usize {
        // Moka applies pending evictions lazily; flush them so the count is exact.
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get() {
        let cache = MokaLinkCache::new();

        assert_eq!(cache.get("a.com"), None);
        cache.add("a.com", "a.com");

        assert_eq!(cache.get("a.com"), Some("a.com".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn add_replaces_existing_value() {
        let cache = MokaLinkCache::new();

        cache.add("a.com", "old");
        cache.add("a.com", "new");

        assert_eq!(cache.get("a.com"), Some("new".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn expired_entries_are_not_served() {
        let cache = MokaLinkCache::with_ttl(100, Duration::from_millis(50));

        cache.add("a.com", "a.com");
        assert!(cache.get("a.com").is_some());

        std::thread::sleep(Duration::from_millis(100));

        assert_eq!(cache.get("a.com"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn from_config() {
        let config = CacheConfig::builder()
            .max_capacity(10)
            .ttl(Duration::from_secs(60))
            .build();
        let cache = MokaLinkCache::from(config);

        cache.add("a.com", "a.com");
        assert_eq!(cache.get("a.com"), Some("a.com".to_string()));
    }
}

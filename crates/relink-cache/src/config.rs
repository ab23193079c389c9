use std::time::Duration;
use typed_builder::TypedBuilder;

/// Lifetime of a cache entry when none is configured.
pub const DEFAULT_TTL: Duration = Duration::from_secs(360 * 60);
/// Period of the background sweep when none is configured.
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);
/// Capacity bound used by caches that enforce one.
pub const DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// Configuration shared by the cache implementations.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CacheConfig {
    /// Time-to-live applied to every entry on insertion.
    #[builder(default = DEFAULT_TTL)]
    pub ttl: Duration,
    /// How often expired entries are swept.
    #[builder(default = DEFAULT_CLEANUP_INTERVAL)]
    pub cleanup_interval: Duration,
    /// Upper bound on entries, for caches that evict by size.
    #[builder(default = DEFAULT_MAX_CAPACITY)]
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CacheConfig::default();

        assert_eq!(config.ttl, Duration::from_secs(21_600));
        assert_eq!(config.cleanup_interval, Duration::from_secs(60));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[test]
    fn builder_overrides() {
        let config = CacheConfig::builder()
            .ttl(Duration::from_secs(5))
            .cleanup_interval(Duration::from_millis(100))
            .build();

        assert_eq!(config.ttl, Duration::from_secs(5));
        assert_eq!(config.cleanup_interval, Duration::from_millis(100));
    }
}

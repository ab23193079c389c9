//! Cache implementations for link lookups.
//!
//! [`SweepingCache`] is the default: a TTL cache whose expired entries are
//! removed by a background sweep owned by the cache instance. [`MokaLinkCache`]
//! and [`NullCache`] implement the same [`LinkCache`] capability and can be
//! swapped in without touching the resolver.

pub mod config;
pub mod moka;
pub mod null;
pub mod sweeping;

pub use self::moka::MokaLinkCache;
pub use config::CacheConfig;
pub use null::NullCache;
pub use relink_core::{CacheError, LinkCache};
pub use sweeping::SweepingCache;

/// Type alias for cache construction results.
pub type Result<T> = std::result::Result<T, CacheError>;

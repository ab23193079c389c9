use relink_core::LinkCache;
use tracing::debug;

/// A cache that stores nothing.
///
/// Used when caching is disabled: every lookup misses and the resolver
/// always consults the store.
#[derive(Debug, Clone, Copy)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkCache for NullCache {
    fn add(&self, _key: &str, _value: &str) {}

    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn len(&self) -> usize {
        0
    }
}

use std::sync::Arc;

/// A key to link cache.
///
/// Implementations decide their own eviction policy. Reads and writes are
/// total and never block on I/O, so the trait is synchronous.
pub trait LinkCache: Send + Sync + 'static {
    /// Inserts or replaces the entry for `key`.
    fn add(&self, key: &str, value: &str);

    /// Returns the cached value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: LinkCache + ?Sized> LinkCache for Arc<C> {
    fn add(&self, key: &str, value: &str) {
        (**self).add(key, value)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

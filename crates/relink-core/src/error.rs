use thiserror::Error;

/// Errors raised while building a cache.
///
/// Cache reads and writes are total; only construction can fail.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("cache initialization failed: {0}")]
    Initialization(String),
}

/// Errors returned by link store implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

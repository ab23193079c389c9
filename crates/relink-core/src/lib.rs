//! Core types and traits for the relink redirect service.
//!
//! This crate provides the link record model, the cache capability trait
//! and the store traits shared by the resolver, the admin service and the
//! gateway.

pub mod cache;
pub mod clock;
pub mod error;
pub mod record;
pub mod repository;

pub use cache::LinkCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CacheError, StorageError};
pub use record::{LinkId, LinkRecord, NewLink};
pub use repository::{ReadRepository, Repository};

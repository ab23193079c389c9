//! Link store implementations and the startup bulk loader.

pub mod loader;
pub mod memory;

pub use loader::{load_links, load_links_from_file, LoadError, LoadReport};
pub use memory::InMemoryRepository;
pub use relink_core::repository::{ReadRepository, Repository, Result};
pub use relink_core::StorageError;

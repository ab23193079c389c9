//! Administrative operations on stored links.
//!
//! Creating a link warms the shared cache with its active link. Updates and
//! deletes leave the cache alone, so a cached link keeps resolving as fresh
//! until its entry expires and is swept.

pub mod admin;
pub mod error;
pub mod service;

pub use admin::LinkAdmin;
pub use error::{AdminError, Result};
pub use service::LinkAdminService;

//! Redirect resolution with a read-through cache.
//!
//! [`RedirectResolver`] decides whether a query is a current link
//! ([`Outcome::FreshMatch`]), a superseded one ([`Outcome::StaleMatch`]) or
//! unknown ([`Outcome::NoMatch`]). It consults a [`LinkCache`] first and
//! falls back to the link store.
//!
//! # Example
//!
//! ```rust,no_run
//! use relink_cache::{CacheConfig, SweepingCache};
//! use relink_resolver::{Outcome, RedirectResolver, ResolverConfig};
//! use relink_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = SweepingCache::new(CacheConfig::default())?;
//! let resolver = RedirectResolver::new(InMemoryRepository::new(), cache, ResolverConfig::default());
//!
//! let resolution = resolver.resolve("a.com").await?;
//! assert_eq!(resolution.outcome, Outcome::NoMatch);
//! assert_eq!(resolution.outcome.status_code(), 404);
//! # Ok(())
//! # }
//! ```
//!
//! [`LinkCache`]: relink_core::LinkCache

pub mod error;
pub mod outcome;
pub mod resolver;
pub mod service;

pub use error::{ResolveError, Result};
pub use outcome::{Outcome, Resolution, ResolutionSource};
pub use resolver::Resolver;
pub use service::{RedirectResolver, ResolverConfig, StoreFailurePolicy};

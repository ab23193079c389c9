use crate::outcome::{Resolution, ResolutionSource};
use crate::resolver::Resolver;
use crate::Result;
use async_trait::async_trait;
use relink_core::{LinkCache, LinkRecord, ReadRepository, StorageError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// What the resolver does when a store lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFailurePolicy {
    /// Log the failure and treat the lookup as finding nothing.
    #[default]
    FailOpen,
    /// Return the failure to the caller.
    FailClosed,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct ResolverConfig {
    #[builder(default)]
    pub failure_policy: StoreFailurePolicy,
    /// Cache active links found in the store on a cache miss.
    #[builder(default)]
    pub populate_on_read: bool,
    /// Deadline for each store lookup. A lookup that exceeds it fails with
    /// [`StorageError::Timeout`] and is handled by the failure policy.
    #[builder(default, setter(strip_option))]
    pub store_timeout: Option<Duration>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Resolves queries against a cache, then the link store.
///
/// Lookup order:
///
/// 1. cache hit → fresh match (the cache only ever holds active links);
/// 2. a record whose active link equals the query → fresh match;
/// 3. a record whose history link equals the query → stale match;
/// 4. otherwise no match.
///
/// Every store call is attempted once. An empty query is never looked up.
#[derive(Debug, Clone)]
pub struct RedirectResolver<R, C> {
    repository: Arc<R>,
    cache: C,
    config: ResolverConfig,
}

impl<R: ReadRepository, C: LinkCache> RedirectResolver<R, C> {
    /// Creates a resolver over `repository`, fronted by `cache`.
    ///
    /// Pass a `NullCache` to disable caching, or an `Arc` of a cache shared
    /// with the admin service.
    pub fn new(repository: R, cache: C, config: ResolverConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            cache,
            config,
        }
    }

    /// Returns a reference to the store.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns a reference to the cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Resolves `query` to a fresh, stale or no match.
    ///
    /// # Returns
    ///
    /// * `Ok(resolution)` - The outcome, where it came from and its target
    /// * `Err(e)` - Only under [`StoreFailurePolicy::FailClosed`], when a store
    ///   lookup failed
    pub async fn resolve(&self, query: &str) -> Result<Resolution> {
        Resolver::resolve(self, query).await
    }

    async fn lookup<F>(&self, step: &'static str, query: &str, call: F) -> Result<Option<LinkRecord>>
    where
        F: Future<Output = relink_core::repository::Result<Option<LinkRecord>>>,
    {
        let result = match self.config.store_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => Err(StorageError::Timeout(format!(
                    "{step} link lookup exceeded {limit:?}"
                ))),
            },
            None => call.await,
        };

        match result {
            Ok(found) => Ok(found),
            Err(e) => match self.config.failure_policy {
                StoreFailurePolicy::FailOpen => {
                    warn!(query = %query, step, error = %e, "Store lookup failed, treating as not found");
                    Ok(None)
                }
                StoreFailurePolicy::FailClosed => Err(e.into()),
            },
        }
    }
}

#[async_trait]
impl<R: ReadRepository, C: LinkCache> Resolver for RedirectResolver<R, C> {
    async fn resolve(&self, query: &str) -> Result<Resolution> {
        trace!(query = %query, "Resolving link");

        if query.is_empty() {
            trace!("Empty query, nothing to resolve");
            return Ok(Resolution::no_match());
        }

        if let Some(target) = self.cache.get(query) {
            debug!(query = %query, "Resolved fresh link from cache");
            return Ok(Resolution::fresh(ResolutionSource::Cache, target));
        }

        trace!(query = %query, "Cache miss, checking active links");
        let active = self
            .lookup("active", query, self.repository.find_by_active_link(query))
            .await?;
        if let Some(record) = active {
            if self.config.populate_on_read {
                self.cache.add(query, &record.active_link);
            }
            debug!(query = %query, id = %record.id, "Resolved fresh link from store");
            return Ok(Resolution::fresh(ResolutionSource::Store, record.active_link));
        }

        trace!(query = %query, "No active link, checking history");
        let historical = self
            .lookup("history", query, self.repository.find_by_history_link(query))
            .await?;
        if let Some(record) = historical {
            debug!(query = %query, id = %record.id, superseded_by = %record.active_link, "Resolved stale link");
            return Ok(Resolution::stale(record.active_link));
        }

        trace!(query = %query, "Link not found");
        Ok(Resolution::no_match())
    }
}

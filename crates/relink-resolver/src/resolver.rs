use crate::outcome::Resolution;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Classifies `query` as a fresh, stale or unknown link.
    async fn resolve(&self, query: &str) -> Result<Resolution>;
}

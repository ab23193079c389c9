use crate::Result;
use async_trait::async_trait;
use relink_core::{LinkId, LinkRecord, NewLink};

#[async_trait]
pub trait LinkAdmin: Send + Sync + 'static {
    /// Stores a new link.
    /// Returns `Err(Duplicate)` if the same active/history pair is stored.
    async fn create(&self, link: NewLink) -> Result<LinkRecord>;

    /// Replaces the active link, keeping the old one as history.
    async fn update(&self, id: &LinkId, active_link: String) -> Result<LinkRecord>;

    /// Deletes a link. Returns `true` if it existed.
    async fn delete(&self, id: &LinkId) -> Result<bool>;

    async fn get(&self, id: &LinkId) -> Result<Option<LinkRecord>>;

    async fn list(&self) -> Result<Vec<LinkRecord>>;
}

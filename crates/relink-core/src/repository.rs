use crate::error::StorageError;
use crate::record::{LinkId, LinkRecord, NewLink};
use async_trait::async_trait;
use std::sync::Arc;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the link store.
///
/// The resolver only needs these lookups; admin tooling uses the full
/// [`Repository`].
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves a record by its identifier.
    async fn find_by_id(&self, id: &LinkId) -> Result<Option<LinkRecord>>;

    /// Retrieves the record whose active link equals `link`.
    async fn find_by_active_link(&self, link: &str) -> Result<Option<LinkRecord>>;

    /// Retrieves a record whose history link equals `link`.
    ///
    /// An empty `link` never matches, since an empty history means the
    /// record has none.
    async fn find_by_history_link(&self, link: &str) -> Result<Option<LinkRecord>>;

    /// Checks whether a record with exactly this active/history pair exists.
    async fn exists_pair(&self, active_link: &str, history_link: &str) -> Result<bool>;

    /// Returns every stored record.
    async fn find_all(&self) -> Result<Vec<LinkRecord>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a new record and returns it with its assigned identifier.
    async fn insert(&self, link: NewLink) -> Result<LinkRecord>;

    /// Overwrites the link fields of the record with the given id.
    /// Returns `false` if no such record exists.
    async fn update_fields(&self, id: &LinkId, record: LinkRecord) -> Result<bool>;

    /// Moves the current active link of the record into its history and
    /// installs `active_link`, as one atomic step.
    /// Returns the updated record, or `None` if no such record exists.
    async fn supersede(&self, id: &LinkId, active_link: String) -> Result<Option<LinkRecord>>;

    /// Deletes the record with the given id.
    /// Returns `true` if the record existed and was removed.
    async fn delete_by_id(&self, id: &LinkId) -> Result<bool>;
}

#[async_trait]
impl<R: ReadRepository + ?Sized> ReadRepository for Arc<R> {
    async fn find_by_id(&self, id: &LinkId) -> Result<Option<LinkRecord>> {
        (**self).find_by_id(id).await
    }

    async fn find_by_active_link(&self, link: &str) -> Result<Option<LinkRecord>> {
        (**self).find_by_active_link(link).await
    }

    async fn find_by_history_link(&self, link: &str) -> Result<Option<LinkRecord>> {
        (**self).find_by_history_link(link).await
    }

    async fn exists_pair(&self, active_link: &str, history_link: &str) -> Result<bool> {
        (**self).exists_pair(active_link, history_link).await
    }

    async fn find_all(&self) -> Result<Vec<LinkRecord>> {
        (**self).find_all().await
    }
}

#[async_trait]
impl<R: Repository + ?Sized> Repository for Arc<R> {
    async fn insert(&self, link: NewLink) -> Result<LinkRecord> {
        (**self).insert(link).await
    }

    async fn update_fields(&self, id: &LinkId, record: LinkRecord) -> Result<bool> {
        (**self).update_fields(id, record).await
    }

    async fn supersede(&self, id: &LinkId, active_link: String) -> Result<Option<LinkRecord>> {
        (**self).supersede(id, active_link).await
    }

    async fn delete_by_id(&self, id: &LinkId) -> Result<bool> {
        (**self).delete_by_id(id).await
    }
}

use crate::admin::LinkAdmin;
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use relink_core::{LinkCache, LinkId, LinkRecord, NewLink, Repository};
use std::sync::Arc;
use tracing::{debug, info};

/// Link administration over a store and the resolver's cache.
///
/// Duplicate detection on create matches the active and history links
/// together: a link whose active link is already stored with a different
/// history is accepted.
#[derive(Debug, Clone)]
pub struct LinkAdminService<R, C> {
    repository: Arc<R>,
    cache: C,
}

impl<R: Repository, C: LinkCache> LinkAdminService<R, C> {
    pub fn new(repository: R, cache: C) -> Self {
        Self {
            repository: Arc::new(repository),
            cache,
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
}

#[async_trait]
impl<R: Repository, C: LinkCache> LinkAdmin for LinkAdminService<R, C> {
    async fn create(&self, link: NewLink) -> Result<LinkRecord> {
        if self
            .repository
            .exists_pair(&link.active_link, &link.history_link)
            .await?
        {
            return Err(AdminError::Duplicate {
                active_link: link.active_link,
                history_link: link.history_link,
            });
        }

        let record = self.repository.insert(link).await?;
        if !record.active_link.is_empty() {
            self.cache.add(&record.active_link, &record.active_link);
        }

        info!(id = %record.id, active_link = %record.active_link, "Created link");
        Ok(record)
    }

    async fn update(&self, id: &LinkId, active_link: String) -> Result<LinkRecord> {
        let updated = self
            .repository
            .supersede(id, active_link)
            .await?
            .ok_or_else(|| AdminError::NotFound(id.clone()))?;

        info!(
            id = %id,
            active_link = %updated.active_link,
            history_link = %updated.history_link,
            "Updated link"
        );
        Ok(updated)
    }

    async fn delete(&self, id: &LinkId) -> Result<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        if deleted {
            info!(id = %id, "Deleted link");
        } else {
            debug!(id = %id, "Delete of unknown link");
        }
        Ok(deleted)
    }

    async fn get(&self, id: &LinkId) -> Result<Option<LinkRecord>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn list(&self) -> Result<Vec<LinkRecord>> {
        Ok(self.repository.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relink_cache::{CacheConfig, NullCache, SweepingCache};
    use relink_storage::InMemoryRepository;
    use std::time::Duration;

    fn cache() -> SweepingCache {
        let config = CacheConfig::builder()
            .cleanup_interval(Duration::from_secs(3600))
            .build();
        SweepingCache::new(config).unwrap()
    }

    #[tokio::test]
    async fn create_stores_and_caches_the_active_link() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), cache());

        let record = admin.create(NewLink::new("a.com")).await.unwrap();

        assert_eq!(record.active_link, "a.com");
        assert_eq!(record.history_link, "");
        assert_eq!(admin.get(&record.id).await.unwrap(), Some(record));
        assert_eq!(admin.cache().get("a.com"), Some("a.com".to_string()));
    }

    #[tokio::test]
    async fn create_rejects_identical_pair() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), NullCache::new());
        admin
            .create(NewLink::new("b.com").with_history("a.com"))
            .await
            .unwrap();

        let err = admin
            .create(NewLink::new("b.com").with_history("a.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AdminError::Duplicate { ref active_link, ref history_link }
                if active_link == "b.com" && history_link == "a.com"
        ));
        assert_eq!(admin.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_accepts_pair_differing_in_one_field() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), NullCache::new());
        admin
            .create(NewLink::new("b.com").with_history("a.com"))
            .await
            .unwrap();

        admin
            .create(NewLink::new("b.com").with_history("x.com"))
            .await
            .unwrap();
        admin
            .create(NewLink::new("c.com").with_history("a.com"))
            .await
            .unwrap();

        assert_eq!(admin.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_shifts_active_into_history() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), NullCache::new());
        let record = admin.create(NewLink::new("a.com")).await.unwrap();

        let updated = admin.update(&record.id, "b.com".to_string()).await.unwrap();

        assert_eq!(updated.id, record.id);
        assert_eq!(updated.active_link, "b.com");
        assert_eq!(updated.history_link, "a.com");
        assert_eq!(admin.get(&record.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_unknown_link() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), NullCache::new());

        let err = admin
            .update(&LinkId::new("missing"), "b.com".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AdminError::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_keep_the_displaced_link() {
        let admin = Arc::new(LinkAdminService::new(
            InMemoryRepository::new(),
            NullCache::new(),
        ));
        let record = admin.create(NewLink::new("a.com")).await.unwrap();

        let first = {
            let admin = Arc::clone(&admin);
            let id = record.id.clone();
            tokio::spawn(async move { admin.update(&id, "b.com".to_string()).await })
        };
        let second = {
            let admin = Arc::clone(&admin);
            let id = record.id.clone();
            tokio::spawn(async move { admin.update(&id, "c.com".to_string()).await })
        };
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        let stored = admin.get(&record.id).await.unwrap().unwrap();
        let expected = match stored.active_link.as_str() {
            "b.com" => "c.com",
            "c.com" => "b.com",
            other => panic!("unexpected active link {other}"),
        };
        assert_eq!(stored.history_link, expected);
    }

    #[tokio::test]
    async fn update_leaves_the_cache_alone() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), cache());
        let record = admin.create(NewLink::new("a.com")).await.unwrap();

        admin.update(&record.id, "b.com".to_string()).await.unwrap();

        assert_eq!(admin.cache().get("a.com"), Some("a.com".to_string()));
        assert_eq!(admin.cache().get("b.com"), None);
    }

    #[tokio::test]
    async fn delete_removes_record_but_not_cache_entry() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), cache());
        let record = admin.create(NewLink::new("a.com")).await.unwrap();

        assert!(admin.delete(&record.id).await.unwrap());
        assert!(!admin.delete(&record.id).await.unwrap());

        assert_eq!(admin.get(&record.id).await.unwrap(), None);
        assert_eq!(admin.cache().len(), 1);
    }

    #[tokio::test]
    async fn list_returns_all_links() {
        let admin = LinkAdminService::new(InMemoryRepository::new(), NullCache::new());
        admin.create(NewLink::new("a.com")).await.unwrap();
        admin.create(NewLink::new("b.com")).await.unwrap();

        let links: Vec<String> = admin
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.active_link)
            .collect();

        assert_eq!(links, ["a.com", "b.com"]);
    }
}

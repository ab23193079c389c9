use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use relink_core::repository::{ReadRepository, Repository, Result};
use relink_core::{LinkId, LinkRecord, NewLink};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory implementation of the link store using DashMap.
///
/// Records are keyed by id. Lookups by active or history link scan the
/// map, which is fine for the volumes this store is meant for (tests,
/// local runs, seeding from a file).
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<LinkId, LinkRecord>,
    sequence: AtomicU64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Allocates a 24 hex digit id: creation second, then a per-store sequence.
    fn next_id(&self) -> LinkId {
        let seconds = Timestamp::now().as_second() as u32;
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        LinkId::new(format!("{seconds:08x}{sequence:016x}"))
    }

    fn find_first(&self, matches: impl Fn(&LinkRecord) -> bool) -> Option<LinkRecord> {
        self.storage
            .iter()
            .find(|entry| matches(entry.value()))
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_by_id(&self, id: &LinkId) -> Result<Option<LinkRecord>> {
        Ok(self.storage.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_active_link(&self, link: &str) -> Result<Option<LinkRecord>> {
        Ok(self.find_first(|record| record.active_link == link))
    }

    async fn find_by_history_link(&self, link: &str) -> Result<Option<LinkRecord>> {
        if link.is_empty() {
            return Ok(None);
        }
        Ok(self.find_first(|record| record.history_link == link))
    }

    async fn exists_pair(&self, active_link: &str, history_link: &str) -> Result<bool> {
        Ok(self
            .find_first(|record| {
                record.active_link == active_link && record.history_link == history_link
            })
            .is_some())
    }

    async fn find_all(&self) -> Result<Vec<LinkRecord>> {
        let mut records: Vec<LinkRecord> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(records)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, link: NewLink) -> Result<LinkRecord> {
        let record = link.into_record(self.next_id());
        self.storage.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update_fields(&self, id: &LinkId, record: LinkRecord) -> Result<bool> {
        let Some(mut stored) = self.storage.get_mut(id) else {
            return Ok(false);
        };

        stored.active_link = record.active_link;
        stored.history_link = record.history_link;
        Ok(true)
    }

    async fn supersede(&self, id: &LinkId, active_link: String) -> Result<Option<LinkRecord>> {
        // The entry guard holds the shard lock across the read and the write.
        let Some(mut stored) = self.storage.get_mut(id) else {
            return Ok(None);
        };

        let updated = stored.clone().superseded_by(active_link);
        *stored = updated.clone();
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: &LinkId) -> Result<bool> {
        Ok(self.storage.remove(id).is_some())
    }
}

use crate::models::Mapping;
use crate::storage::{MappingStore, StorageResult};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory store backed by a sharded concurrent map.
///
/// Used for tests and local development; contents do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn init(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn put(&self, short_id: &str, long_url: &str) -> StorageResult<()> {
        self.entries
            .insert(short_id.to_string(), long_url.to_string());
        Ok(())
    }

    async fn get(&self, short_id: &str) -> StorageResult<Option<Mapping>> {
        Ok(self.entries.get(short_id).map(|entry| Mapping {
            short_id: entry.key().clone(),
            long_url: entry.value().clone(),
        }))
    }
}

use crate::models::Mapping;
use crate::storage::{MappingStore, MemoryStore, StorageError, StorageResult};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Memory store that counts calls and can be switched into a failing state.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    puts: AtomicUsize,
    gets: AtomicUsize,
    failing: AtomicBool,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    fn check(&self) -> StorageResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StorageError::Other(anyhow!("store unreachable")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MappingStore for CountingStore {
    async fn init(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn put(&self, short_id: &str, long_url: &str) -> StorageResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.put(short_id, long_url).await
    }

    async fn get(&self, short_id: &str) -> StorageResult<Option<Mapping>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.get(short_id).await
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::ServiceError;
use crate::records::Record;
use crate::storage::entity_store::EntityStore;

/// Map plus id counter; only ever touched through the store's lock.
struct Entries<R> {
    map: HashMap<String, R>,
    next_id: u64,
}

impl<R: Record> Entries<R> {
    fn new() -> Self {
        Self { map: HashMap::new(), next_id: 1 }
    }

    /// Assign the next id to `record`, store it under that key and bump the counter.
    fn push(&mut self, mut record: R) -> R {
        let id = self.next_id.to_string();
        record.set_id(id.clone());
        self.map.insert(id, record.clone());
        self.next_id += 1;
        record
    }
}

/// Generic in-memory keyed store with auto-incrementing string ids.
///
/// Keeps a `HashMap<String, R>` and the next id behind one exclusive lock.
/// Reads take the same lock as writes, so every operation is serialized and
/// `list` always observes a point-in-time snapshot. Records are never updated
/// or removed once stored.
pub struct MemoryStore<R> {
    inner: Mutex<Entries<R>>,
}

impl<R: Record> MemoryStore<R> {
    /// Empty store; the first insert receives id `"1"`.
    pub fn new() -> Self {
        Self { inner: Mutex::new(Entries::new()) }
    }

    /// Store pre-populated with `R::seed()`, ids `"1"` onwards in seed order.
    pub fn seeded() -> Self {
        let mut entries = Entries::new();
        for record in R::seed() {
            entries.push(record);
        }
        debug!(resource = R::RESOURCE, count = entries.map.len(), "store seeded");
        Self { inner: Mutex::new(entries) }
    }

    /// Snapshot copy of every record, in no particular order.
    pub async fn list(&self) -> Vec<R> {
        let entries = self.inner.lock().await;
        entries.map.values().cloned().collect()
    }

    /// Exact-match lookup by id.
    pub async fn get(&self, id: &str) -> Result<R, ServiceError> {
        let entries = self.inner.lock().await;
        entries
            .map
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(R::ENTITY))
    }

    /// Store `candidate` under a freshly assigned id, discarding any id it carried.
    pub async fn insert(&self, candidate: R) -> R {
        let mut entries = self.inner.lock().await;
        let stored = entries.push(candidate);
        debug!(resource = R::RESOURCE, id = stored.id(), "record inserted");
        stored
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> EntityStore<R> for MemoryStore<R> {
    async fn list(&self) -> Vec<R> { self.list().await }
    async fn get(&self, id: &str) -> Result<R, ServiceError> { self.get(id).await }
    async fn insert(&self, candidate: R) -> R { self.insert(candidate).await }
}

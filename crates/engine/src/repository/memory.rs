//! In-memory DocumentStore implementation for tests and local runs.

use async_trait::async_trait;
use stats_core::CounterSlot;
use tokio::sync::RwLock;

use super::arena::Arena;
use super::{Document, DocumentStore, FieldUpdate, Predicate, StoreResult};

/// In-memory implementation of DocumentStore.
///
/// Every call holds the arena lock for its whole duration, which makes each
/// call atomic with respect to the others.
pub struct InMemoryDocumentStore {
    arena: RwLock<Arena>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            arena: RwLock::new(Arena::default()),
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn count_matching(&self, predicate: &Predicate) -> StoreResult<u64> {
        Ok(self.arena.read().await.count(predicate))
    }

    async fn find_one(&self, predicate: &Predicate) -> StoreResult<Option<Document>> {
        Ok(self.arena.read().await.find_first(predicate))
    }

    async fn find_many(&self, predicate: &Predicate) -> StoreResult<Vec<Document>> {
        Ok(self.arena.read().await.find(predicate))
    }

    async fn insert(&self, document: Document) -> StoreResult<bool> {
        Ok(self.arena.write().await.insert(document))
    }

    async fn atomic_increment(
        &self,
        predicate: &Predicate,
        slot: CounterSlot,
        delta: u64,
    ) -> StoreResult<Option<Document>> {
        Ok(self.arena.write().await.increment(predicate, slot, delta))
    }

    async fn atomic_replace(
        &self,
        predicate: &Predicate,
        update: FieldUpdate,
    ) -> StoreResult<Option<Document>> {
        self.arena.write().await.replace(predicate, update)
    }

    async fn delete_matching(&self, predicate: &Predicate) -> StoreResult<u64> {
        Ok(self.arena.write().await.delete(predicate))
    }
}

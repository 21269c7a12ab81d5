//! Document store contract used by the engine.

use async_trait::async_trait;
use stats_core::CounterSlot;

use super::{Document, FieldUpdate, Predicate, StoreResult};

/// Document store holding players, teams and games.
///
/// Every method is a single atomic step on the store: concurrent callers
/// observe either the state before or after it, never a partial write.
/// Nothing here spans more than one call, so multi-step protocols built on
/// top of the store are not transactional.
///
/// A request that matches nothing is not an error: counts are `0`, reads are
/// `None`/empty and updates return `Ok(None)`. Errors mean the store itself
/// could not be reached or could not serve the request.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Number of records matching `predicate`.
    async fn count_matching(&self, predicate: &Predicate) -> StoreResult<u64>;

    /// First matching record in insertion order.
    async fn find_one(&self, predicate: &Predicate) -> StoreResult<Option<Document>>;

    /// Every matching record in insertion order.
    async fn find_many(&self, predicate: &Predicate) -> StoreResult<Vec<Document>>;

    /// Inserts a new record.
    ///
    /// Returns `false` when the record's owner (the player of a team, the
    /// team of a game) does not exist or the id is already taken.
    async fn insert(&self, document: Document) -> StoreResult<bool>;

    /// Adds `delta` to one raw counter of the first matching record and
    /// returns the record as it is after the increment.
    async fn atomic_increment(
        &self,
        predicate: &Predicate,
        slot: CounterSlot,
        delta: u64,
    ) -> StoreResult<Option<Document>>;

    /// Overwrites one field of the first matching record and returns the
    /// record as it is after the write.
    async fn atomic_replace(
        &self,
        predicate: &Predicate,
        update: FieldUpdate,
    ) -> StoreResult<Option<Document>>;

    /// Removes every matching record together with everything it owns
    /// (a player's teams, a team's games). Returns the number of records
    /// matched by `predicate`.
    async fn delete_matching(&self, predicate: &Predicate) -> StoreResult<u64>;
}

//! Identifier allocation across the team and game namespaces.

use stats_core::RecordId;

use crate::api::errors::{Result, StoreResultExt};
use crate::repository::{DocumentStore, Predicate};

/// Draws identifiers until one is unused as both a team id and a game id.
pub async fn allocate_id(store: &dyn DocumentStore) -> Result<RecordId> {
    allocate_id_with(store, RecordId::generate).await
}

/// [`allocate_id`] with a caller-supplied candidate source.
///
/// Store failures abort the allocation; a candidate is never accepted
/// without both checks having run.
pub async fn allocate_id_with(
    store: &dyn DocumentStore,
    mut candidate: impl FnMut() -> RecordId + Send,
) -> Result<RecordId> {
    loop {
        let id = candidate();

        let teams = store
            .count_matching(&Predicate::Team(id))
            .await
            .during("allocate id: count teams")?;
        if teams > 0 {
            tracing::debug!(%id, "identifier already used by a team, drawing again");
            continue;
        }

        let games = store
            .count_matching(&Predicate::Game(id))
            .await
            .during("allocate id: count games")?;
        if games > 0 {
            tracing::debug!(%id, "identifier already used by a game, drawing again");
            continue;
        }

        return Ok(id);
    }
}

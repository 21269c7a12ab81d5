//! Register-then-recompute, the write pattern shared by every level.
//!
//! Phase one increments a single raw counter; phase two re-derives every
//! derived field from the counters phase one returned and overwrites them.
//! The phases are separate store calls. A failure between them leaves the raw
//! counters correct and the derived fields stale until the next action on the
//! same record recomputes them.

use stats_core::{CounterSlot, Statistics};

use crate::api::errors::{EngineError, Result, StoreResultExt, UpdateStage};
use crate::repository::{Document, DocumentStore, FieldUpdate, Predicate};

/// Ownership level a statistics write targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Game,
    Team,
    Player,
}

impl Level {
    fn increment_stage(self) -> UpdateStage {
        match self {
            Self::Game => UpdateStage::GameIncrement,
            Self::Team => UpdateStage::TeamIncrement,
            Self::Player => UpdateStage::PlayerIncrement,
        }
    }

    fn recompute_stage(self) -> UpdateStage {
        match self {
            Self::Game => UpdateStage::GameRecompute,
            Self::Team => UpdateStage::TeamRecompute,
            Self::Player => UpdateStage::PlayerRecompute,
        }
    }

    fn increment_operation(self) -> &'static str {
        match self {
            Self::Game => "register game action",
            Self::Team => "register team action",
            Self::Player => "register player action",
        }
    }

    fn recompute_operation(self) -> &'static str {
        match self {
            Self::Game => "recompute game statistics",
            Self::Team => "recompute team statistics",
            Self::Player => "recompute player statistics",
        }
    }
}

/// Applies one scored action to the record matched by `target`.
///
/// Returns the record as stored after the recompute.
pub(crate) async fn register_and_recompute(
    store: &dyn DocumentStore,
    level: Level,
    target: &Predicate,
    slot: CounterSlot,
) -> Result<Document> {
    let incremented = store
        .atomic_increment(target, slot, 1)
        .await
        .during(level.increment_operation())?
        .ok_or_else(|| {
            tracing::warn!(%level, ?target, %slot, "raw increment matched nothing");
            EngineError::UpdateFailed(level.increment_stage())
        })?;
    tracing::debug!(%level, %slot, value = incremented.stats().counter(slot), "raw counter incremented");

    let derived: Statistics = incremented.stats().recomputed();
    let updated = store
        .atomic_replace(target, FieldUpdate::DerivedStatistics(derived))
        .await
        .during(level.recompute_operation())?
        .ok_or_else(|| {
            tracing::warn!(%level, ?target, "statistics overwrite matched nothing");
            EngineError::UpdateFailed(level.recompute_stage())
        })?;
    tracing::debug!(%level, "derived statistics recomputed");

    Ok(updated)
}

//! Propagation of a registered action to the owning team and player.
//!
//! Team and player counters are independent of their children: each level
//! increments its own raw counter and recomputes from it, nothing is summed
//! from games. Levels run strictly in order and a failure at one level leaves
//! the levels below it committed.

use stats_core::{Player, RecordId, Team};

use super::guards;
use super::registration::GameAction;
use super::two_phase::{Level, register_and_recompute};
use crate::api::errors::{EngineError, Result, UpdateStage};
use crate::repository::{DocumentStore, Predicate};

/// Repeats the action on the team, then on the player.
pub async fn cascade_action(
    store: &dyn DocumentStore,
    action: &GameAction,
    player_id: RecordId,
) -> Result<(Team, Player)> {
    let slot = guards::check_pair(action.category, action.result)?;

    let team = register_and_recompute(store, Level::Team, &Predicate::Team(action.team_id), slot)
        .await?
        .into_team()
        .ok_or(EngineError::UpdateFailed(UpdateStage::TeamRecompute))?;
    tracing::debug!(team_id = %team.id, "team statistics updated");

    let player = register_and_recompute(store, Level::Player, &Predicate::Player(player_id), slot)
        .await?
        .into_player()
        .ok_or(EngineError::UpdateFailed(UpdateStage::PlayerRecompute))?;
    tracing::debug!(player_id = %player.id, "player statistics updated");

    Ok((team, player))
}

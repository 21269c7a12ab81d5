//! Game-level action registration.

use stats_core::{ActionCategory, ActionResult, Game, RecordId};

use super::guards;
use super::two_phase::{Level, register_and_recompute};
use crate::api::errors::{EngineError, Result, UpdateStage};
use crate::repository::{DocumentStore, Predicate};

/// One scored action reported against a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameAction {
    pub team_id: RecordId,
    pub game_id: RecordId,
    pub category: ActionCategory,
    pub result: ActionResult,
}

/// Records `action` on its game and returns the recomputed game.
///
/// Preconditions are checked in order and the first failure wins: team
/// exists, game exists, game is active, pair is valid.
pub async fn register_action(store: &dyn DocumentStore, action: &GameAction) -> Result<Game> {
    guards::assert_team_exists(store, action.team_id).await?;
    guards::assert_game_exists(store, action.team_id, action.game_id).await?;
    guards::assert_game_active(store, action.team_id, action.game_id).await?;
    let slot = guards::check_pair(action.category, action.result)?;

    let target = Predicate::TeamGame {
        team_id: action.team_id,
        game_id: action.game_id,
    };
    register_and_recompute(store, Level::Game, &target, slot)
        .await?
        .into_game()
        .ok_or(EngineError::UpdateFailed(UpdateStage::GameRecompute))
}

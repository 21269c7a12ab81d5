//! Cached child counts on teams and players.

use stats_core::RecordId;

use crate::api::errors::{EngineError, Result, StoreResultExt, UpdateStage};
use crate::repository::{DocumentStore, FieldUpdate, Predicate};

/// Writes the number of games owned by `team_id` into the team.
pub async fn recount_team_games(store: &dyn DocumentStore, team_id: RecordId) -> Result<u64> {
    let games = store
        .count_matching(&Predicate::GamesOf(team_id))
        .await
        .during("count team games")?;
    store
        .atomic_replace(&Predicate::Team(team_id), FieldUpdate::TeamGameCount(games))
        .await
        .during("write team game count")?
        .ok_or(EngineError::UpdateFailed(UpdateStage::RecountTeamGames))?;
    tracing::debug!(%team_id, games, "team games recounted");
    Ok(games)
}

/// Writes the number of teams owned by `player_id` into the player.
pub async fn recount_player_teams(store: &dyn DocumentStore, player_id: RecordId) -> Result<u64> {
    let teams = store
        .count_matching(&Predicate::TeamsOf(player_id))
        .await
        .during("count player teams")?;
    store
        .atomic_replace(
            &Predicate::Player(player_id),
            FieldUpdate::PlayerTeamCount(teams),
        )
        .await
        .during("write player team count")?
        .ok_or(EngineError::UpdateFailed(UpdateStage::RecountPlayerTeams))?;
    tracing::debug!(%player_id, teams, "player teams recounted");
    Ok(teams)
}

/// Writes the sum of the owned teams' cached game counts into the player.
pub async fn recount_player_games(store: &dyn DocumentStore, player_id: RecordId) -> Result<u64> {
    let games: u64 = store
        .find_many(&Predicate::TeamsOf(player_id))
        .await
        .during("load player teams")?
        .into_iter()
        .filter_map(|doc| doc.into_team())
        .map(|team| team.total_games)
        .sum();
    store
        .atomic_replace(
            &Predicate::Player(player_id),
            FieldUpdate::PlayerGameCount(games),
        )
        .await
        .during("write player game count")?
        .ok_or(EngineError::UpdateFailed(UpdateStage::RecountPlayerGames))?;
    tracing::debug!(%player_id, games, "player games recounted");
    Ok(games)
}

use chrono::Utc;
use stats_core::{Game, GameStatus, NewGame, RecordId};

use super::{counts, guards, ids};
use crate::api::errors::{ConflictReason, EngineError, Result, StoreResultExt, UpdateStage};
use crate::repository::{Document, DocumentKind, DocumentStore, FieldUpdate, Predicate};

/// Every game of every team owned by `player_id`.
async fn games_of_player(store: &dyn DocumentStore, player_id: RecordId) -> Result<Vec<Game>> {
    let teams = store
        .find_many(&Predicate::TeamsOf(player_id))
        .await
        .during("load player teams")?;

    let mut games = Vec::new();
    for team in teams.into_iter().filter_map(|doc| doc.into_team()) {
        let owned = store
            .find_many(&Predicate::GamesOf(team.id))
            .await
            .during("load team games")?;
        games.extend(owned.into_iter().filter_map(|doc| doc.into_game()));
    }
    Ok(games)
}

/// Starts a new active game for `team_id`.
///
/// Rejected while any team of the player still has an active game.
pub async fn create_game(
    store: &dyn DocumentStore,
    player_id: RecordId,
    team_id: RecordId,
    request: NewGame,
) -> Result<Game> {
    guards::assert_team_exists(store, team_id).await?;
    if guards::team_owner(store, team_id).await? != player_id {
        tracing::warn!(%team_id, %player_id, "team belongs to another player");
        return Err(EngineError::NotFound(DocumentKind::Team));
    }
    guards::assert_no_active_game(&games_of_player(store, player_id).await?)?;

    let id = ids::allocate_id(store).await?;
    let game = Game::start(id, team_id, request, Utc::now());
    let inserted = store
        .insert(Document::Game(game.clone()))
        .await
        .during("insert game")?;
    if !inserted {
        return Err(EngineError::UpdateFailed(UpdateStage::CreateGame));
    }
    tracing::info!(game_id = %game.id, %team_id, opponent = %game.opponent, "game started");

    counts::recount_team_games(store, team_id).await?;
    counts::recount_player_games(store, player_id).await?;
    Ok(game)
}

/// Moves an active game to `finished`. Finishing twice is a conflict.
pub async fn finish_game(
    store: &dyn DocumentStore,
    team_id: RecordId,
    game_id: RecordId,
) -> Result<Game> {
    guards::assert_team_exists(store, team_id).await?;
    guards::assert_game_exists(store, team_id, game_id).await?;

    let finished = store
        .atomic_replace(
            &Predicate::ActiveTeamGame { team_id, game_id },
            FieldUpdate::Status(GameStatus::Finished),
        )
        .await
        .during("finish game")?;
    let Some(doc) = finished else {
        tracing::warn!(%game_id, "game is already finished");
        return Err(EngineError::Conflict(ConflictReason::GameAlreadyFinished));
    };

    tracing::info!(%game_id, %team_id, "game finished");
    doc.into_game()
        .ok_or(EngineError::UpdateFailed(UpdateStage::FinishGame))
}

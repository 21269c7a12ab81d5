use stats_core::{Game, Player, RecordId, Team};

use super::guards;
use crate::api::errors::{EngineError, Result, StoreResultExt};
use crate::repository::{Document, DocumentKind, DocumentStore, Predicate};

async fn fetch(
    store: &dyn DocumentStore,
    predicate: Predicate,
    operation: &'static str,
) -> Result<Document> {
    store
        .find_one(&predicate)
        .await
        .during(operation)?
        .ok_or(EngineError::NotFound(predicate.kind()))
}

pub async fn player(store: &dyn DocumentStore, player_id: RecordId) -> Result<Player> {
    fetch(store, Predicate::Player(player_id), "load player")
        .await?
        .into_player()
        .ok_or(EngineError::NotFound(DocumentKind::Player))
}

pub async fn team(store: &dyn DocumentStore, team_id: RecordId) -> Result<Team> {
    fetch(store, Predicate::Team(team_id), "load team")
        .await?
        .into_team()
        .ok_or(EngineError::NotFound(DocumentKind::Team))
}

pub async fn game(store: &dyn DocumentStore, game_id: RecordId) -> Result<Game> {
    fetch(store, Predicate::Game(game_id), "load game")
        .await?
        .into_game()
        .ok_or(EngineError::NotFound(DocumentKind::Game))
}

/// Every player in registration order.
pub async fn all_players(store: &dyn DocumentStore) -> Result<Vec<Player>> {
    let players = store
        .find_many(&Predicate::AllPlayers)
        .await
        .during("list players")?;
    Ok(players.into_iter().filter_map(|doc| doc.into_player()).collect())
}

/// Every team of every player in creation order.
pub async fn all_teams(store: &dyn DocumentStore) -> Result<Vec<Team>> {
    let teams = store
        .find_many(&Predicate::AllTeams)
        .await
        .during("list all teams")?;
    Ok(teams.into_iter().filter_map(|doc| doc.into_team()).collect())
}

/// Teams of a player in creation order.
pub async fn teams_of_player(store: &dyn DocumentStore, player_id: RecordId) -> Result<Vec<Team>> {
    guards::assert_player_exists(store, player_id).await?;
    let teams = store
        .find_many(&Predicate::TeamsOf(player_id))
        .await
        .during("list teams")?;
    Ok(teams.into_iter().filter_map(|doc| doc.into_team()).collect())
}

/// Games of a team in creation order.
pub async fn games_of_team(store: &dyn DocumentStore, team_id: RecordId) -> Result<Vec<Game>> {
    guards::assert_team_exists(store, team_id).await?;
    let games = store
        .find_many(&Predicate::GamesOf(team_id))
        .await
        .during("list games")?;
    Ok(games.into_iter().filter_map(|doc| doc.into_game()).collect())
}

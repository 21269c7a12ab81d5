//! The engine facade handed to front ends.

use std::sync::Arc;

use stats_core::{Game, NewGame, NewPlayer, NewTeam, Player, RecordId, Team};

use crate::api::errors::{EngineError, Result, StoreResultExt};
use crate::config::{EngineConfig, StoreBackend};
use crate::repository::{DocumentKind, DocumentStore, FileDocumentStore, InMemoryDocumentStore};
use crate::services::{self, GameAction, guards, queries};

/// Statistics engine over a shared document store.
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct StatsEngine {
    store: Arc<dyn DocumentStore>,
}

impl StatsEngine {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Engine over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryDocumentStore::new()))
    }

    /// Builds the store selected by `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let store: Arc<dyn DocumentStore> = match config.store {
            StoreBackend::Memory => Arc::new(InMemoryDocumentStore::new()),
            StoreBackend::File => {
                let store = FileDocumentStore::open(&config.data_dir).during("open file store")?;
                tracing::info!(path = %store.path().display(), "using file document store");
                Arc::new(store)
            }
        };
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    // Players

    pub async fn create_player(&self, request: NewPlayer) -> Result<Player> {
        services::create_player(self.store(), request).await
    }

    pub async fn update_player(&self, player_id: RecordId, request: NewPlayer) -> Result<Player> {
        services::update_player(self.store(), player_id, request).await
    }

    pub async fn delete_player(&self, player_id: RecordId) -> Result<()> {
        services::delete_player(self.store(), player_id).await
    }

    pub async fn player(&self, player_id: RecordId) -> Result<Player> {
        queries::player(self.store(), player_id).await
    }

    pub async fn all_players(&self) -> Result<Vec<Player>> {
        queries::all_players(self.store()).await
    }

    // Teams

    pub async fn create_team(&self, player_id: RecordId, request: NewTeam) -> Result<Team> {
        services::create_team(self.store(), player_id, request).await
    }

    pub async fn rename_team(&self, team_id: RecordId, new_name: &str) -> Result<Team> {
        services::rename_team(self.store(), team_id, new_name).await
    }

    pub async fn delete_team(&self, player_id: RecordId, team_id: RecordId) -> Result<()> {
        services::delete_team(self.store(), player_id, team_id).await
    }

    pub async fn team(&self, team_id: RecordId) -> Result<Team> {
        queries::team(self.store(), team_id).await
    }

    pub async fn all_teams(&self) -> Result<Vec<Team>> {
        queries::all_teams(self.store()).await
    }

    pub async fn teams_of_player(&self, player_id: RecordId) -> Result<Vec<Team>> {
        queries::teams_of_player(self.store(), player_id).await
    }

    // Games

    pub async fn create_game(
        &self,
        player_id: RecordId,
        team_id: RecordId,
        request: NewGame,
    ) -> Result<Game> {
        services::create_game(self.store(), player_id, team_id, request).await
    }

    pub async fn finish_game(&self, team_id: RecordId, game_id: RecordId) -> Result<Game> {
        services::finish_game(self.store(), team_id, game_id).await
    }

    pub async fn game(&self, game_id: RecordId) -> Result<Game> {
        queries::game(self.store(), game_id).await
    }

    pub async fn games_of_team(&self, team_id: RecordId) -> Result<Vec<Game>> {
        queries::games_of_team(self.store(), team_id).await
    }

    /// Records one scored action on a game, then on its team, then on
    /// `player_id`, and returns the recomputed game.
    ///
    /// A failure in the team or player step is returned as is; the levels
    /// already written stay written.
    pub async fn register_action(&self, player_id: RecordId, action: &GameAction) -> Result<Game> {
        let owner = guards::team_owner(self.store(), action.team_id).await?;
        if owner != player_id {
            tracing::warn!(team_id = %action.team_id, %player_id, "team belongs to another player");
            return Err(EngineError::NotFound(DocumentKind::Team));
        }

        let game = services::register_action(self.store(), action).await?;
        tracing::info!(
            game_id = %game.id,
            category = %action.category,
            result = %action.result,
            "action registered"
        );

        services::cascade_action(self.store(), action, player_id).await?;
        Ok(game)
    }
}

use anyhow::Result;
use clap::{Args, Subcommand};
use stats_core::NewPlayer;
use stats_engine::{DocumentKind, EngineError, StatsEngine, parse_id};

use super::print_json;

/// Player commands
#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    /// Register a new player
    Create(CreatePlayer),

    /// Replace a player's name, category, position and email
    Update {
        /// Player identifier (24 hex characters)
        player: String,

        #[command(flatten)]
        profile: CreatePlayer,
    },

    /// List every registered player
    List,

    /// Print a player with its career statistics
    Show {
        /// Player identifier (24 hex characters)
        player: String,
    },

    /// Remove a player with all of its teams and games
    Delete {
        /// Player identifier (24 hex characters)
        player: String,
    },
}

#[derive(Args, Debug)]
pub struct CreatePlayer {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Men or Women
    #[arg(long)]
    pub category: String,

    /// OH, S, MB, L or O
    #[arg(long)]
    pub position: String,

    #[arg(long)]
    pub email: String,
}

impl CreatePlayer {
    fn validate(&self) -> Result<NewPlayer, EngineError> {
        NewPlayer::new(
            &self.first_name,
            &self.last_name,
            &self.category,
            &self.position,
            &self.email,
        )
        .map_err(EngineError::from)
    }
}

impl PlayerCommand {
    pub async fn execute(self, engine: &StatsEngine) -> Result<()> {
        match self {
            Self::Create(args) => print_json(&engine.create_player(args.validate()?).await?),
            Self::Update { player, profile } => {
                let player_id = parse_id(DocumentKind::Player, &player)?;
                print_json(&engine.update_player(player_id, profile.validate()?).await?)
            }
            Self::List => print_json(&engine.all_players().await?),
            Self::Show { player } => {
                let player_id = parse_id(DocumentKind::Player, &player)?;
                print_json(&engine.player(player_id).await?)
            }
            Self::Delete { player } => {
                let player_id = parse_id(DocumentKind::Player, &player)?;
                engine.delete_player(player_id).await?;
                print_json(&serde_json::json!({ "deleted": player_id }))
            }
        }
    }
}

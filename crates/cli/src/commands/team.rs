use anyhow::Result;
use clap::Subcommand;
use stats_core::NewTeam;
use stats_engine::{DocumentKind, EngineError, StatsEngine, parse_id};

use super::print_json;

/// Team commands
#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// Register a team for a player
    Create {
        #[arg(long)]
        player: String,

        #[arg(long)]
        name: String,

        /// Men, Women or Mixed
        #[arg(long)]
        category: String,
    },

    /// Rename a team
    Rename {
        team: String,

        new_name: String,
    },

    /// Remove a team with all of its games
    Delete {
        #[arg(long)]
        player: String,

        #[arg(long)]
        team: String,
    },

    /// List a player's teams, or every team with --all
    List {
        #[arg(long, required_unless_present = "all")]
        player: Option<String>,

        #[arg(long, conflicts_with = "player")]
        all: bool,
    },
}

impl TeamCommand {
    pub async fn execute(self, engine: &StatsEngine) -> Result<()> {
        match self {
            Self::Create {
                player,
                name,
                category,
            } => {
                let player_id = parse_id(DocumentKind::Player, &player)?;
                let request = NewTeam::new(&name, &category).map_err(EngineError::from)?;
                print_json(&engine.create_team(player_id, request).await?)
            }
            Self::Rename { team, new_name } => {
                let team_id = parse_id(DocumentKind::Team, &team)?;
                print_json(&engine.rename_team(team_id, &new_name).await?)
            }
            Self::Delete { player, team } => {
                let player_id = parse_id(DocumentKind::Player, &player)?;
                let team_id = parse_id(DocumentKind::Team, &team)?;
                engine.delete_team(player_id, team_id).await?;
                print_json(&serde_json::json!({ "deleted": team_id }))
            }
            Self::List { player: Some(player), .. } => {
                let player_id = parse_id(DocumentKind::Player, &player)?;
                print_json(&engine.teams_of_player(player_id).await?)
            }
            Self::List { player: None, .. } => print_json(&engine.all_teams().await?),
        }
    }
}

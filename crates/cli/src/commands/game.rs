use anyhow::Result;
use clap::{Args, Subcommand};
use stats_core::{ActionCategory, ActionResult, NewGame};
use stats_engine::{DocumentKind, EngineError, GameAction, StatsEngine, parse_id};

use super::print_json;

/// Game commands
#[derive(Subcommand, Debug)]
pub enum GameCommand {
    /// Start a new game; fails while any team of the player has an active game
    Start(StartGame),

    /// Record one scored action on an active game
    Action(RecordAction),

    /// Finish an active game
    Finish {
        #[arg(long)]
        team: String,

        #[arg(long)]
        game: String,
    },

    /// Print a game with its statistics
    Show {
        game: String,
    },

    /// List a team's games
    List {
        #[arg(long)]
        team: String,
    },
}

#[derive(Args, Debug)]
pub struct StartGame {
    #[arg(long)]
    pub player: String,

    #[arg(long)]
    pub team: String,

    #[arg(long)]
    pub country: String,

    #[arg(long)]
    pub city: String,

    /// Opposing team, "Random" for casual games
    #[arg(long, default_value = "Random")]
    pub opponent: String,

    /// OH, S, MB, L, O or ANY
    #[arg(long, default_value = "ANY")]
    pub position: String,

    /// Shirt number or ANY
    #[arg(long, default_value = "ANY")]
    pub jersey: String,
}

#[derive(Args, Debug)]
pub struct RecordAction {
    #[arg(long)]
    pub player: String,

    #[arg(long)]
    pub team: String,

    #[arg(long)]
    pub game: String,

    /// attack, block, service, defense, reception or set
    #[arg(long)]
    pub category: ActionCategory,

    /// point, perfect, neutral or error
    #[arg(long)]
    pub result: ActionResult,
}

impl GameCommand {
    pub async fn execute(self, engine: &StatsEngine) -> Result<()> {
        match self {
            Self::Start(args) => {
                let player_id = parse_id(DocumentKind::Player, &args.player)?;
                let team_id = parse_id(DocumentKind::Team, &args.team)?;
                let request = NewGame::new(
                    &args.country,
                    &args.city,
                    &args.opponent,
                    &args.position,
                    &args.jersey,
                )
                .map_err(EngineError::from)?;
                print_json(&engine.create_game(player_id, team_id, request).await?)
            }
            Self::Action(args) => {
                let player_id = parse_id(DocumentKind::Player, &args.player)?;
                let action = GameAction {
                    team_id: parse_id(DocumentKind::Team, &args.team)?,
                    game_id: parse_id(DocumentKind::Game, &args.game)?,
                    category: args.category,
                    result: args.result,
                };
                print_json(&engine.register_action(player_id, &action).await?)
            }
            Self::Finish { team, game } => {
                let team_id = parse_id(DocumentKind::Team, &team)?;
                let game_id = parse_id(DocumentKind::Game, &game)?;
                print_json(&engine.finish_game(team_id, game_id).await?)
            }
            Self::Show { game } => {
                let game_id = parse_id(DocumentKind::Game, &game)?;
                print_json(&engine.game(game_id).await?)
            }
            Self::List { team } => {
                let team_id = parse_id(DocumentKind::Team, &team)?;
                print_json(&engine.games_of_team(team_id).await?)
            }
        }
    }
}

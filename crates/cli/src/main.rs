//! Command-line front end for the volleyball statistics engine.
//!
//! Every command prints the affected record as pretty JSON on stdout. Engine
//! failures are printed on stderr as `{"error": <code>, "message": ...}` and
//! exit with status 1.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use stats_engine::{EngineConfig, EngineError, StatsEngine, StoreBackend};

use commands::{GameCommand, PlayerCommand, TeamCommand};

/// Record volleyball statistics for players, teams and games
#[derive(Parser)]
#[command(name = "volley")]
#[command(about = "Volleyball statistics engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the document store
    #[arg(long, global = true, env = "VOLLEY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this invocation
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Register, inspect and remove players
    #[command(subcommand)]
    Player(PlayerCommand),

    /// Manage a player's teams
    #[command(subcommand)]
    Team(TeamCommand),

    /// Start games, record actions and finish games
    #[command(subcommand)]
    Game(GameCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = EngineConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        if std::env::var_os("VOLLEY_LOG_DIR").is_none() {
            config.log_dir = data_dir.join("logs");
        }
        config.data_dir = data_dir;
    }
    if cli.memory {
        config.store = StoreBackend::Memory;
    }

    let _guard = logging::setup_logging(&config.log_dir)?;
    tracing::debug!(store = %config.store, data_dir = %config.data_dir.display(), "configuration loaded");

    let engine = StatsEngine::from_config(&config)?;
    match cli.command {
        Command::Player(cmd) => cmd.execute(&engine).await,
        Command::Team(cmd) => cmd.execute(&engine).await,
        Command::Game(cmd) => cmd.execute(&engine).await,
    }
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<EngineError>() {
        Some(engine_err) => {
            tracing::warn!(
                code = engine_err.error_code(),
                severity = engine_err.severity().as_str(),
                "request rejected: {engine_err}"
            );
            let body = serde_json::json!({
                "error": engine_err.error_code(),
                "severity": engine_err.severity().as_str(),
                "message": format!("{err:#}"),
            });
            eprintln!("{body:#}");
        }
        None => eprintln!("error: {err:#}"),
    }
}

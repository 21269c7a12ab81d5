//! Command implementations for `volley`
//!
//! Each record kind has its own module with a subcommand enum and its
//! execution logic.

mod game;
mod player;
mod team;

pub use game::GameCommand;
pub use player::PlayerCommand;
pub use team::TeamCommand;

use anyhow::Result;
use serde::Serialize;

/// Prints `value` as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

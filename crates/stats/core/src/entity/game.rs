use chrono::{DateTime, Utc};

use super::{Jersey, Position, Tracked};
use crate::id::RecordId;
use crate::stats::Statistics;
use crate::validation::NewGame;

/// Lifecycle of a game.
///
/// `Active` loops on every registered action; `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Active,
    Finished,
}

/// One match played by a team, as reported by its player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub id: RecordId,
    pub team_id: RecordId,
    pub started_at: DateTime<Utc>,
    pub status: GameStatus,
    pub country: String,
    pub city: String,
    pub opponent: String,
    pub position: Position,
    pub jersey: Jersey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Statistics,
}

impl Game {
    /// A fresh active game with zeroed statistics.
    pub fn start(id: RecordId, team_id: RecordId, request: NewGame, at: DateTime<Utc>) -> Self {
        Self {
            id,
            team_id,
            started_at: at,
            status: GameStatus::Active,
            country: request.country,
            city: request.city,
            opponent: request.opponent,
            position: request.position,
            jersey: request.jersey,
            stats: Statistics::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }
}

impl Tracked for Game {
    fn stats(&self) -> &Statistics {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }
}

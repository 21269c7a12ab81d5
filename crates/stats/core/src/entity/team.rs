use chrono::{DateTime, Utc};

use super::{TeamCategory, Tracked};
use crate::id::RecordId;
use crate::stats::Statistics;
use crate::validation::NewTeam;

/// A team a player plays for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub id: RecordId,
    pub player_id: RecordId,
    pub name: String,
    pub category: TeamCategory,
    /// Cached number of games owned by this team.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_games: u64,
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Statistics,
}

impl Team {
    pub fn new(id: RecordId, player_id: RecordId, request: NewTeam, at: DateTime<Utc>) -> Self {
        Self {
            id,
            player_id,
            name: request.name,
            category: request.category,
            total_games: 0,
            created_at: at,
            stats: Statistics::new(),
        }
    }
}

impl Tracked for Team {
    fn stats(&self) -> &Statistics {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }
}

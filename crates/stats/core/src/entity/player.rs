use chrono::{DateTime, Utc};

use super::{PlayerCategory, Position, Tracked};
use crate::id::RecordId;
use crate::stats::Statistics;
use crate::validation::NewPlayer;

/// A registered player and their career statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub category: PlayerCategory,
    pub position: Position,
    pub email: String,
    /// Cached number of teams owned by this player.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_teams: u64,
    /// Cached sum of the owned teams' game counts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_games: u64,
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Statistics,
}

impl Player {
    pub fn new(id: RecordId, request: NewPlayer, at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: request.first_name,
            last_name: request.last_name,
            category: request.category,
            position: request.position,
            email: request.email,
            total_teams: 0,
            total_games: 0,
            created_at: at,
            stats: Statistics::new(),
        }
    }

    /// Overwrites the profile fields; statistics and counts are kept.
    pub fn update_profile(&mut self, request: NewPlayer) {
        self.first_name = request.first_name;
        self.last_name = request.last_name;
        self.category = request.category;
        self.position = request.position;
        self.email = request.email;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Tracked for Player {
    fn stats(&self) -> &Statistics {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionCategory, ActionResult, CounterSlot};

    #[test]
    fn profile_update_keeps_statistics_and_counts() {
        let request = NewPlayer::new("ana", "ruiz", "Women", "S", "ana@club.es").unwrap();
        let mut player = Player::new(RecordId::from_bytes([1; 12]), request, Utc::now());
        let slot = CounterSlot::for_action(ActionCategory::Set, ActionResult::Perfect).unwrap();
        player.stats.increment(slot, 2);
        player.total_teams = 1;

        let edit = NewPlayer::new("ana maria", "ruiz", "Women", "L", "amr@club.es").unwrap();
        player.update_profile(edit);

        assert_eq!(player.full_name(), "Ana Maria Ruiz");
        assert_eq!(player.position, Position::Libero);
        assert_eq!(player.email, "amr@club.es");
        assert_eq!(player.stats.set.best, 2);
        assert_eq!(player.total_teams, 1);
    }
}

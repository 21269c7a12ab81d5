//! Player, team and game records.
//!
//! Records live side by side in the store and point at their owner through a
//! back-reference (`Team::player_id`, `Game::team_id`) instead of being nested
//! inside it. A team's games and a player's teams are whatever records carry
//! the matching back-reference, in insertion order.

mod game;
mod player;
mod profile;
mod team;

pub use game::{Game, GameStatus};
pub use player::Player;
pub use profile::{Jersey, PlayerCategory, Position, TeamCategory};
pub use team::Team;

use crate::stats::Statistics;

/// Records that carry a statistics shape.
pub trait Tracked {
    fn stats(&self) -> &Statistics;

    fn stats_mut(&mut self) -> &mut Statistics;
}

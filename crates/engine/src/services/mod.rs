//! Engine operations, written as free functions over a [`DocumentStore`].
//!
//! [`DocumentStore`]: crate::repository::DocumentStore

pub mod cascade;
pub mod counts;
pub mod games;
pub mod guards;
pub mod ids;
pub mod players;
pub mod queries;
pub mod registration;
pub mod teams;
mod two_phase;

pub use cascade::cascade_action;
pub use counts::{recount_player_games, recount_player_teams, recount_team_games};
pub use games::{create_game, finish_game};
pub use ids::{allocate_id, allocate_id_with};
pub use players::{create_player, delete_player, update_player};
pub use registration::{GameAction, register_action};
pub use teams::{create_team, delete_team, rename_team};

//! Volleyball statistics model shared by the engine and its front ends.
//!
//! `stats-core` defines the canonical statistics shape and the pure
//! [`recompute`] function that derives totals and efficiency ratios from raw
//! counters, together with the records that carry that shape (players, teams,
//! games), their identifiers, and validation of creation requests. Nothing in
//! this crate performs I/O.
pub mod action;
pub mod entity;
pub mod id;
pub mod stats;
pub mod validation;

pub use action::{ActionCategory, ActionResult, CounterSlot, Outcome, valid_pair};
pub use entity::{
    Game, GameStatus, Jersey, Player, PlayerCategory, Position, Team, TeamCategory, Tracked,
};
pub use id::{IdError, RecordId};
pub use stats::{
    CategoryLine, Effectiveness, RawCounters, RawCounts, Statistics, Totals, recompute,
};
pub use validation::{NewGame, NewPlayer, NewTeam, ValidationError};

//! Statistics aggregation and consistency engine.
//!
//! Records scored volleyball actions against games and keeps the derived
//! statistics of the game, its team and the team's player consistent with
//! their raw counters.
//!
//! Modules are organized by responsibility:
//! - [`repository`] defines the document store contract and its in-memory and
//!   file-backed implementations
//! - [`services`] holds the store protocols: id allocation, guards, two-phase
//!   registration, the game → team → player cascade and cached counts
//! - [`api`] exposes the error taxonomy
//! - [`StatsEngine`] wires a store to the services for front ends
pub mod api;
pub mod config;
pub mod repository;
pub mod services;

mod engine;

pub use api::{ConflictReason, EngineError, ErrorSeverity, Result, UpdateStage, parse_id};
pub use config::{EngineConfig, StoreBackend};
pub use engine::StatsEngine;
pub use repository::{
    Document, DocumentKind, DocumentStore, FieldUpdate, FileDocumentStore, InMemoryDocumentStore,
    Predicate, StoreError, StoreResult,
};
pub use services::GameAction;

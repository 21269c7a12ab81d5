//! Public engine API surface.
//!
//! Gathers the failure types exposed to consumers so the service layer can
//! stay focused on store protocols.

pub mod errors;

pub use errors::{ConflictReason, EngineError, ErrorSeverity, Result, UpdateStage, parse_id};

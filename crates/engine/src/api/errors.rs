//! Typed failures surfaced by the engine API.
//!
//! Every operation raises one of these at the point of detection; nothing is
//! retried internally. Store failures are never folded into "not found": a
//! count that could not be performed is [`EngineError::StoreUnavailable`].

use chrono::{DateTime, Utc};
use thiserror::Error;

use stats_core::{ActionCategory, ActionResult, IdError, RecordId, ValidationError};

use crate::repository::{DocumentKind, StoreError, StoreResult};

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0} not found")]
    NotFound(DocumentKind),

    #[error("malformed {kind} identifier")]
    InvalidIdentifier {
        kind: DocumentKind,
        #[source]
        source: IdError,
    },

    #[error("result {result} is not valid for {category} actions")]
    InvalidActionPair {
        category: ActionCategory,
        result: ActionResult,
    },

    #[error("conflict: {0}")]
    Conflict(ConflictReason),

    #[error("{0} matched no document")]
    UpdateFailed(UpdateStage),

    #[error("document store unavailable during {operation}")]
    StoreUnavailable {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
}

/// Why a request collided with existing state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConflictReason {
    #[error(
        "game {id} against {opponent} in {city}, {country} started at {started_at} is still active"
    )]
    ActiveGame {
        id: RecordId,
        started_at: DateTime<Utc>,
        city: String,
        country: String,
        opponent: String,
    },

    #[error("game is already finished")]
    GameAlreadyFinished,

    #[error("team name {0:?} is already taken")]
    TeamNameTaken(String),

    #[error("email {0:?} is already registered")]
    EmailTaken(String),
}

/// The store write that matched zero documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum UpdateStage {
    GameIncrement,
    GameRecompute,
    TeamIncrement,
    TeamRecompute,
    PlayerIncrement,
    PlayerRecompute,
    CreatePlayer,
    CreateTeam,
    CreateGame,
    FinishGame,
    RecountTeamGames,
    RecountPlayerTeams,
    RecountPlayerGames,
    RenameTeam,
    UpdatePlayer,
    DeletePlayer,
    DeleteTeam,
}

/// How a caller should treat a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Bad input; do not retry without changes.
    Validation,

    /// The request collides with current state.
    Conflict,

    /// A write lost a race or state diverged; derived fields may be stale
    /// until the next successful action on the same path.
    Internal,

    /// The store could not be reached.
    Unavailable,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
            Self::Unavailable => "unavailable",
        }
    }

    /// True when an entity may have been left with stale derived fields.
    pub const fn may_leave_stale_state(&self) -> bool {
        matches!(self, Self::Internal | Self::Unavailable)
    }
}

impl EngineError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_)
            | Self::InvalidIdentifier { .. }
            | Self::InvalidActionPair { .. }
            | Self::InvalidInput(_) => ErrorSeverity::Validation,
            Self::Conflict(_) => ErrorSeverity::Conflict,
            Self::UpdateFailed(_) => ErrorSeverity::Internal,
            Self::StoreUnavailable { .. } => ErrorSeverity::Unavailable,
        }
    }

    /// Stable identifier of the failure kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(DocumentKind::Player) => "PLAYER_NOT_FOUND",
            Self::NotFound(DocumentKind::Team) => "TEAM_NOT_FOUND",
            Self::NotFound(DocumentKind::Game) => "GAME_NOT_FOUND",
            Self::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            Self::InvalidActionPair { .. } => "INVALID_ACTION_PAIR",
            Self::Conflict(ConflictReason::ActiveGame { .. }) => "ACTIVE_GAME_EXISTS",
            Self::Conflict(ConflictReason::GameAlreadyFinished) => "GAME_ALREADY_FINISHED",
            Self::Conflict(ConflictReason::TeamNameTaken(_)) => "TEAM_NAME_TAKEN",
            Self::Conflict(ConflictReason::EmailTaken(_)) => "EMAIL_TAKEN",
            Self::UpdateFailed(_) => "UPDATE_FAILED",
            Self::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            Self::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}

/// Attaches the operation label to store failures.
pub(crate) trait StoreResultExt<T> {
    fn during(self, operation: &'static str) -> Result<T>;
}

impl<T> StoreResultExt<T> for StoreResult<T> {
    fn during(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| {
            tracing::warn!(operation, error = %source, "document store call failed");
            EngineError::StoreUnavailable { operation, source }
        })
    }
}

/// Parses a textual identifier for a record of `kind`.
pub fn parse_id(kind: DocumentKind, raw: &str) -> Result<RecordId> {
    raw.parse()
        .map_err(|source| EngineError::InvalidIdentifier { kind, source })
}

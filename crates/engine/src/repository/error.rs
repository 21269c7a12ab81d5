//! Error types raised by document store implementations.

use thiserror::Error;

use super::DocumentKind;

/// Errors surfaced by document store implementations.
///
/// Any of these means the store could not perform the request at all; a
/// request that simply matched nothing is reported through `Ok(None)` or a
/// zero count instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("field {field} does not exist on {kind} documents")]
    FieldMismatch {
        kind: DocumentKind,
        field: &'static str,
    },

    #[error("store unreachable: {0}")]
    Unreachable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

//! Document store layer.
//!
//! Stores hold players, teams and games and expose single-call atomic
//! primitives (count, find, insert, increment, replace, delete). Anything the
//! engine does across several calls is built on top of these and carries no
//! cross-call atomicity.

mod arena;
mod error;
mod file;
mod memory;
mod query;
mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileDocumentStore;
pub use memory::InMemoryDocumentStore;
pub use query::{Document, DocumentKind, FieldUpdate, Predicate};
pub use traits::DocumentStore;

//! File-based DocumentStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stats_core::CounterSlot;
use tokio::sync::RwLock;

use super::arena::Arena;
use super::{Document, DocumentStore, FieldUpdate, Predicate, StoreError, StoreResult};

const FORMAT_VERSION: u32 = 1;
const STORE_FILE: &str = "volley-store.json";

#[derive(Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(flatten)]
    arena: Arena,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    version: u32,
    #[serde(flatten)]
    arena: &'a Arena,
}

/// File-based implementation of DocumentStore.
///
/// The whole store lives in one JSON document under `base_dir`. Mutations are
/// applied to a copy of the in-memory arena, written to a temp file and
/// renamed over the store file; the copy only replaces the live arena once
/// the rename succeeded, so a failed write leaves both untouched.
///
/// Every successful write re-serializes the whole store and rewrites the
/// file while holding the write lock; one registered action costs six
/// rewrites (raw and derived writes at game, team and player level). Fine
/// for a personal statistics log, not for large shared stores.
pub struct FileDocumentStore {
    path: PathBuf,
    arena: RwLock<Arena>,
}

impl FileDocumentStore {
    /// Open the store under `base_dir`, creating the directory if needed.
    pub fn open(base_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        let path = base_dir.join(STORE_FILE);
        let arena = Self::load(&path)?;
        Ok(Self {
            path,
            arena: RwLock::new(arena),
        })
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> StoreResult<Arena> {
        if !path.exists() {
            return Ok(Arena::default());
        }

        let json = fs::read_to_string(path)?;
        let file: StoreFile =
            serde_json::from_str(&json).map_err(|e| StoreError::Json(e.to_string()))?;
        if file.version != FORMAT_VERSION {
            return Err(StoreError::CorruptedData(format!(
                "unsupported store version {} in {}",
                file.version,
                path.display()
            )));
        }

        tracing::info!("Loaded document store: {}", path.display());
        Ok(file.arena)
    }

    async fn persist(&self, arena: &Arena) -> StoreResult<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let file = StoreFileRef {
            version: FORMAT_VERSION,
            arena,
        };
        let json =
            serde_json::to_vec_pretty(&file).map_err(|e| StoreError::Json(e.to_string()))?;
        tokio::fs::write(&temp_path, json).await?;

        tokio::fs::rename(&temp_path, &self.path).await?;

        tracing::debug!("Saved document store: {}", self.path.display());
        Ok(())
    }

    /// Runs `mutate` against a copy of the arena and commits the copy when
    /// `changed` reports a modification.
    async fn mutate<T>(
        &self,
        mutate: impl FnOnce(&mut Arena) -> StoreResult<T>,
        changed: impl FnOnce(&T) -> bool,
    ) -> StoreResult<T> {
        let mut live = self.arena.write().await;
        let mut draft = live.clone();
        let outcome = mutate(&mut draft)?;
        if changed(&outcome) {
            self.persist(&draft).await?;
            *live = draft;
        }
        Ok(outcome)
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn count_matching(&self, predicate: &Predicate) -> StoreResult<u64> {
        Ok(self.arena.read().await.count(predicate))
    }

    async fn find_one(&self, predicate: &Predicate) -> StoreResult<Option<Document>> {
        Ok(self.arena.read().await.find_first(predicate))
    }

    async fn find_many(&self, predicate: &Predicate) -> StoreResult<Vec<Document>> {
        Ok(self.arena.read().await.find(predicate))
    }

    async fn insert(&self, document: Document) -> StoreResult<bool> {
        self.mutate(|arena| Ok(arena.insert(document)), |inserted| *inserted)
            .await
    }

    async fn atomic_increment(
        &self,
        predicate: &Predicate,
        slot: CounterSlot,
        delta: u64,
    ) -> StoreResult<Option<Document>> {
        self.mutate(
            |arena| Ok(arena.increment(predicate, slot, delta)),
            Option::is_some,
        )
        .await
    }

    async fn atomic_replace(
        &self,
        predicate: &Predicate,
        update: FieldUpdate,
    ) -> StoreResult<Option<Document>> {
        self.mutate(|arena| arena.replace(predicate, update), Option::is_some)
            .await
    }

    async fn delete_matching(&self, predicate: &Predicate) -> StoreResult<u64> {
        self.mutate(|arena| Ok(arena.delete(predicate)), |deleted| *deleted > 0)
            .await
    }
}

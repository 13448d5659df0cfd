//! Last-Read-Position Store.
//!
//! A single persisted record of where the user stopped reading. Read on
//! every view-focus event, overwritten wholesale on explicit bookmark.
//! Failures never interrupt the user flow; they are logged at the
//! observability boundary and the read falls back to the default.

use crate::error::HudaError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the position record is persisted.
pub const STORE_KEY: &str = "savedVerses";

/// The last-read position. `surah` and `verse` are 0-based indices
/// into the corpus and the chapter's verse sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReadingPosition {
    pub surah: usize,
    pub verse: usize,
}

impl ReadingPosition {
    pub fn new(surah: usize, verse: usize) -> Self {
        Self { surah, verse }
    }
}

/// Key-value persistence of the reading position.
///
/// The platform's local asynchronous store is modeled by this trait;
/// the library ships a plain JSON file implementation.
pub trait PositionStore {
    /// Persists `position`, replacing any previous record.
    fn save(&self, position: &ReadingPosition) -> Result<(), HudaError>;

    /// Loads the stored record. `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<ReadingPosition>, HudaError>;
}

/// File-backed store: one JSON document `savedVerses.json` in a
/// caller-chosen directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PositionStore for JsonFileStore {
    fn save(&self, position: &ReadingPosition) -> Result<(), HudaError> {
        let json = serde_json::to_string(position).map_err(HudaError::storage)?;
        fs::write(&self.path, json).map_err(HudaError::storage)
    }

    fn load(&self) -> Result<Option<ReadingPosition>, HudaError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(HudaError::storage(e)),
        };
        let position = serde_json::from_str(&json).map_err(HudaError::storage)?;
        Ok(Some(position))
    }
}

/// Silent-fail read boundary: a missing or unreadable record falls
/// back to `{0, 0}`. The failure is logged, never surfaced to the user.
pub fn load_or_default(store: &dyn PositionStore) -> ReadingPosition {
    match store.load() {
        Ok(Some(position)) => position,
        Ok(None) => ReadingPosition::default(),
        Err(e) => {
            warn!("failed to load reading position, falling back to start: {e}");
            ReadingPosition::default()
        }
    }
}

/// Silent-fail write boundary: a failed save is dropped after logging.
pub fn save_logged(store: &dyn PositionStore, position: ReadingPosition) {
    if let Err(e) = store.save(&position) {
        warn!("failed to save reading position {position:?}: {e}");
    }
}

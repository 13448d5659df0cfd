use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from huda operations.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum HudaError {
    /// Latitude or longitude outside valid bounds.
    #[error("Invalid coordinate ({lat}, {lng}): latitude must be in [-90, 90], longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Chapter id or index beyond the corpus.
    #[error("Chapter {requested} is out of range (corpus has {count} chapters)")]
    ChapterOutOfRange { requested: usize, count: usize },

    /// Verse index beyond the chapter.
    #[error("Verse {verse} is out of range (chapter {chapter} has {count} verses)")]
    VerseOutOfRange {
        chapter: usize,
        verse: usize,
        count: usize,
    },

    /// Access to a device capability (location, compass) was refused.
    #[error("Permission denied for {capability}")]
    PermissionDenied { capability: String },

    /// Corpus document could not be parsed.
    #[error("Malformed corpus document: {0}")]
    CorpusFormat(String),

    /// Reading-position store read/write failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl HudaError {
    /// Creates a `ChapterOutOfRange` error.
    pub fn chapter_out_of_range(requested: usize, count: usize) -> Self {
        Self::ChapterOutOfRange { requested, count }
    }

    /// Creates a `PermissionDenied` error.
    pub fn permission_denied(capability: impl Into<String>) -> Self {
        Self::PermissionDenied {
            capability: capability.into(),
        }
    }

    /// Creates a `Storage` error from any display-able cause.
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        Self::Storage(cause.to_string())
    }
}

//! Quran Corpus Module.
//!
//! The bundled chapter/verse reference data and the read-only
//! repository interface views depend on.

use crate::error::HudaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// Revelation place of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChapterKind {
    /// Revealed in Mecca ("مكية").
    #[serde(rename = "مكية")]
    Meccan,
    /// Revealed in Medina ("مدنية").
    #[serde(rename = "مدنية")]
    Medinan,
}

impl fmt::Display for ChapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChapterKind::Meccan => "مكية",
            ChapterKind::Medinan => "مدنية",
        };
        write!(f, "{}", s)
    }
}

/// A single verse. Identified by its 0-based position within the
/// chapter's verse sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Arabic text of the verse.
    #[serde(rename = "ar")]
    pub text: String,
}

/// One chapter of the corpus. Immutable static reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based chapter number.
    pub id: u32,
    /// Arabic chapter name.
    pub name: String,
    /// Revelation place.
    #[serde(rename = "type")]
    pub kind: ChapterKind,
    /// Ordered verse sequence. Serialized as `array` in the bundled
    /// document.
    #[serde(rename = "array")]
    pub verses: Vec<Verse>,
}

impl Chapter {
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    /// Bounds-checked verse lookup by 0-based index.
    pub fn verse(&self, index: usize) -> Result<&Verse, HudaError> {
        self.verses.get(index).ok_or(HudaError::VerseOutOfRange {
            chapter: self.id as usize,
            verse: index,
            count: self.verses.len(),
        })
    }
}

/// Read-only repository over the chapter corpus.
///
/// Views depend on this abstraction instead of a global static import,
/// so tests can substitute small fixture corpora.
pub trait ChapterRepository {
    /// All chapters, id ascending.
    fn chapters(&self) -> &[Chapter];

    /// Chapter by 1-based id.
    fn chapter(&self, id: u32) -> Result<&Chapter, HudaError> {
        let chapters = self.chapters();
        chapters
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| HudaError::chapter_out_of_range(id as usize, chapters.len()))
    }

    /// Chapter by 0-based index (route parameters address chapters
    /// this way).
    fn chapter_at(&self, index: usize) -> Result<&Chapter, HudaError> {
        let chapters = self.chapters();
        chapters
            .get(index)
            .ok_or_else(|| HudaError::chapter_out_of_range(index, chapters.len()))
    }

    /// Chapters whose name contains `query` as a substring, source
    /// order preserved. The empty query returns the full list. Arabic
    /// has no case folding, so matching is a direct byte-substring
    /// test; diacritics are significant.
    fn search(&self, query: &str) -> Vec<&Chapter> {
        if query.is_empty() {
            return self.chapters().iter().collect();
        }
        self.chapters()
            .iter()
            .filter(|c| c.name.contains(query))
            .collect()
    }
}

/// Owned, immutable corpus loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuranCorpus {
    chapters: Vec<Chapter>,
}

impl QuranCorpus {
    /// Wraps an already-built chapter list (fixtures, embedded data).
    pub fn from_chapters(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// Parses the bundled JSON document: an ordered sequence of
    /// `{ id, name, type, array: [{ ar }, ...] }`.
    ///
    /// # Errors
    /// Returns `HudaError::CorpusFormat` on malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, HudaError> {
        let chapters: Vec<Chapter> =
            serde_json::from_str(json).map_err(|e| HudaError::CorpusFormat(e.to_string()))?;
        Ok(Self { chapters })
    }

    /// Parses the corpus document from a reader.
    ///
    /// # Errors
    /// Returns `HudaError::CorpusFormat` on malformed input or read
    /// failure.
    pub fn from_reader(reader: impl Read) -> Result<Self, HudaError> {
        let chapters: Vec<Chapter> =
            serde_json::from_reader(reader).map_err(|e| HudaError::CorpusFormat(e.to_string()))?;
        Ok(Self { chapters })
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

impl ChapterRepository for QuranCorpus {
    fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }
}

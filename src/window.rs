//! Verse List Windowing.
//!
//! A lazily-growing visible window over a chapter's verse sequence so
//! the reader never renders thousands of text nodes at once. The window
//! operates over the full prefix of the chapter; display trims the head
//! before the requested starting verse.

use crate::corpus::Verse;

/// Initial window size when entering a chapter at verse 0.
pub const DEFAULT_WINDOW: usize = 50;
/// The window grows by this many verses per triggering scroll event.
pub const GROWTH_STEP: usize = 20;
/// Distance (px) from the content end within which a scroll event
/// triggers growth.
pub const GROWTH_THRESHOLD: f64 = 100.0;

/// Per-chapter visible window. Never shrinks; changing the chapter
/// constructs a fresh window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseWindow {
    start_index: usize,
    size: usize,
}

impl VerseWindow {
    /// Opens a window for a chapter entered at `start_index`.
    ///
    /// The initial size is `DEFAULT_WINDOW + start_index` so the
    /// requested starting verse is already visible without an extra
    /// scroll.
    pub fn new(start_index: usize) -> Self {
        Self {
            start_index,
            size: DEFAULT_WINDOW + start_index,
        }
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Current window size, before clamping to any particular chapter.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Feeds a scroll-position event; grows the window by
    /// `GROWTH_STEP` when the viewport is within `GROWTH_THRESHOLD`
    /// of the content end. Returns true if the window grew.
    pub fn on_scroll(&mut self, scroll_offset: f64, viewport_height: f64, content_height: f64) -> bool {
        if scroll_offset + viewport_height > content_height - GROWTH_THRESHOLD {
            self.size += GROWTH_STEP;
            true
        } else {
            false
        }
    }

    /// The visible prefix `verses[0 .. size]`, clamped so it never
    /// reads past the end of the chapter.
    pub fn visible<'a>(&self, verses: &'a [Verse]) -> &'a [Verse] {
        &verses[..self.size.min(verses.len())]
    }

    /// The slice actually rendered: the visible prefix with the head
    /// before `start_index` trimmed. Verses before the start still
    /// count toward the growth threshold, they are just not displayed.
    pub fn rendered<'a>(&self, verses: &'a [Verse]) -> &'a [Verse] {
        let visible = self.visible(verses);
        &visible[self.start_index.min(visible.len())..]
    }
}

//! # Huda
//!
//! Domain engine for a Quran reading application: Qibla direction,
//! compass-heading reconciliation, the chapter/verse corpus with
//! substring search, verse-list windowing for incremental rendering,
//! the persisted last-read position, and the daily prayer schedule.
//!
//! The crate is UI-agnostic. Screens, navigation, rendering, and the
//! actual device sensors live in the host application; sensors and
//! storage enter through the [`qibla::HeadingProvider`],
//! [`qibla::LocationProvider`], and [`store::PositionStore`] traits.
//!
//! ## Usage
//!
//! ```rust
//! use huda::prelude::*;
//!
//! let riyadh = GeoCoordinate::new(24.7136, 46.6753)?;
//! let bearing = qibla_bearing(riyadh);
//! let state = HeadingState::for_observer(riyadh);
//! assert_eq!(state.direction(), CompassPoint::SouthWest);
//! # Ok::<(), huda::HudaError>(())
//! ```

pub mod corpus;
pub mod error;
pub mod prayer;
pub mod qibla;
pub mod store;
pub mod types;
pub mod window;

pub use corpus::{Chapter, ChapterKind, ChapterRepository, QuranCorpus, Verse};
pub use error::HudaError;
pub use qibla::{HeadingState, QiblaExt, initial_bearing, qibla_bearing};
pub use store::{ReadingPosition, load_or_default, save_logged};
pub use types::{CompassPoint, GeoCoordinate};
pub use window::VerseWindow;

pub mod prelude {
    pub use crate::corpus::{Chapter, ChapterKind, ChapterRepository, QuranCorpus, Verse};
    pub use crate::error::HudaError;
    pub use crate::prayer::{Prayer, PrayerKind, daily_schedule, format_12h, next_prayer};
    pub use crate::qibla::{
        HeadingProvider, HeadingState, KAABA, LocationProvider, QiblaExt, initial_bearing,
        qibla_bearing,
    };
    pub use crate::store::{PositionStore, ReadingPosition, load_or_default, save_logged};
    pub use crate::types::{CompassPoint, GeoCoordinate};
    pub use crate::window::VerseWindow;
}

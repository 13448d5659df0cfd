//! Prayer Schedule Module.
//!
//! The simplified daily schedule shown on the prayer-times view: six
//! fixed entries, next-prayer determination against a supplied clock
//! value, and Arabic 12-hour formatting. The one-per-minute clock
//! refresh stays a host concern; everything here computes from a
//! `NaiveTime` passed in.

use chrono::{NaiveTime, Timelike};
use smallvec::SmallVec;
use std::fmt;

/// The five daily prayers plus sunrise, in day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerKind {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKind {
    /// Arabic name as displayed to the user.
    pub fn name_ar(&self) -> &'static str {
        match self {
            PrayerKind::Fajr => "الفجر",
            PrayerKind::Sunrise => "الشروق",
            PrayerKind::Dhuhr => "الظهر",
            PrayerKind::Asr => "العصر",
            PrayerKind::Maghrib => "المغرب",
            PrayerKind::Isha => "العشاء",
        }
    }
}

impl fmt::Display for PrayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_ar())
    }
}

/// One schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prayer {
    pub kind: PrayerKind,
    pub time: NaiveTime,
}

impl Prayer {
    fn at(kind: PrayerKind, hour: u32, minute: u32) -> Self {
        Self {
            kind,
            // Static schedule constants, always in range.
            time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// The fixed daily schedule, in day order.
pub fn daily_schedule() -> SmallVec<[Prayer; 6]> {
    SmallVec::from_buf([
        Prayer::at(PrayerKind::Fajr, 5, 30),
        Prayer::at(PrayerKind::Sunrise, 6, 45),
        Prayer::at(PrayerKind::Dhuhr, 12, 0),
        Prayer::at(PrayerKind::Asr, 15, 30),
        Prayer::at(PrayerKind::Maghrib, 18, 15),
        Prayer::at(PrayerKind::Isha, 19, 45),
    ])
}

/// The first prayer strictly after `now`, or `None` once Isha has
/// passed for the day.
pub fn next_prayer(now: NaiveTime) -> Option<Prayer> {
    daily_schedule().into_iter().find(|p| p.time > now)
}

/// Formats a time the way the prayer-times view shows it: 12-hour
/// clock with the Arabic meridiem suffix (ص morning, م afternoon),
/// minutes zero-padded, hour 0 shown as 12.
pub fn format_12h(time: NaiveTime) -> String {
    let hour = time.hour();
    let suffix = if hour >= 12 { "م" } else { "ص" };
    let display_hour = match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    };
    format!("{}:{:02} {}", display_hour, time.minute(), suffix)
}

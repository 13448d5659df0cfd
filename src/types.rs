use crate::error::HudaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point in decimal degrees.
///
/// Passed by value into the bearing calculator; not owned by any
/// long-lived entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in [-90, 90].
    pub lat: f64,
    /// Longitude in [-180, 180].
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, validating bounds.
    ///
    /// # Errors
    /// Returns `HudaError::InvalidCoordinate` if latitude is outside
    /// [-90, 90] or longitude is outside [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, HudaError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(HudaError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Creates a coordinate without bounds validation.
    ///
    /// For constants and trusted sources (e.g. a platform location
    /// service that already guarantees valid ranges).
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}

/// One of the eight compass winds, North first, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    const SECTOR_DEG: f64 = 45.0;

    /// Maps an angle in degrees to its compass wind.
    ///
    /// The circle is divided into eight 45° sectors centered on the
    /// winds, so e.g. [-22.5, 22.5) maps to North. Accepts any finite
    /// angle, including negative and >= 360 values.
    pub fn from_angle(degrees: f64) -> Self {
        let index = (degrees / Self::SECTOR_DEG).round() as i64;
        match index.rem_euclid(8) {
            0 => Self::North,
            1 => Self::NorthEast,
            2 => Self::East,
            3 => Self::SouthEast,
            4 => Self::South,
            5 => Self::SouthWest,
            6 => Self::West,
            _ => Self::NorthWest,
        }
    }

    /// Arabic label as displayed to the user.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::North => "شمال",
            Self::NorthEast => "شمال شرق",
            Self::East => "شرق",
            Self::SouthEast => "جنوب شرق",
            Self::South => "جنوب",
            Self::SouthWest => "جنوب غرب",
            Self::West => "غرب",
            Self::NorthWest => "شمال غرب",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label_ar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(GeoCoordinate::new(21.4225, 39.8262).is_ok());
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, -180.1).is_err());
    }

    #[test]
    fn test_cardinal_sector_centers() {
        assert_eq!(CompassPoint::from_angle(0.0), CompassPoint::North);
        assert_eq!(CompassPoint::from_angle(90.0), CompassPoint::East);
        assert_eq!(CompassPoint::from_angle(180.0), CompassPoint::South);
        assert_eq!(CompassPoint::from_angle(270.0), CompassPoint::West);
    }

    #[test]
    fn test_sector_edges() {
        // Sectors are centered on the winds: [-22.5, 22.5) is North.
        assert_eq!(CompassPoint::from_angle(22.4), CompassPoint::North);
        assert_eq!(CompassPoint::from_angle(23.0), CompassPoint::NorthEast);
        assert_eq!(CompassPoint::from_angle(359.0), CompassPoint::North);
    }

    #[test]
    fn test_negative_and_wrapped_angles() {
        assert_eq!(CompassPoint::from_angle(-90.0), CompassPoint::West);
        assert_eq!(CompassPoint::from_angle(450.0), CompassPoint::East);
    }

    #[test]
    fn test_arabic_labels() {
        assert_eq!(CompassPoint::North.label_ar(), "شمال");
        assert_eq!(CompassPoint::SouthWest.to_string(), "جنوب غرب");
    }
}

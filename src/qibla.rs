//! Qibla Direction Module.
//!
//! Great-circle initial bearing toward the Kaaba and reconciliation of
//! that bearing against the device compass heading.

use crate::error::HudaError;
use crate::types::{CompassPoint, GeoCoordinate};

/// The Kaaba in Mecca. Target of every Qibla computation.
pub const KAABA: GeoCoordinate = GeoCoordinate::new_unchecked(21.4225, 39.8262);

/// Fallback observer location (Riyadh) used when no location provider
/// is available.
pub const RIYADH_FALLBACK: GeoCoordinate = GeoCoordinate::new_unchecked(24.7136, 46.6753);

/// Manual simulation advances the heading by this step per user action.
pub const MANUAL_STEP_DEG: f64 = 45.0;

/// Computes the initial great-circle bearing from `from` to `to`.
///
/// Spherical-earth formula; result is in degrees clockwise from true
/// north, normalized to [0, 360). The degenerate case `from == to`
/// yields 0 by the atan2(0, 0) convention.
pub fn initial_bearing(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let y = delta_lng.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lng.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Bearing from the observer to the Kaaba.
pub fn qibla_bearing(observer: GeoCoordinate) -> f64 {
    initial_bearing(observer, KAABA)
}

/// Bearing helpers on `GeoCoordinate`.
pub trait QiblaExt {
    /// Initial bearing from `self` to `other`, degrees in [0, 360).
    fn bearing_to(&self, other: GeoCoordinate) -> f64;

    /// Initial bearing from `self` to the Kaaba.
    fn qibla_bearing(&self) -> f64;
}

impl QiblaExt for GeoCoordinate {
    fn bearing_to(&self, other: GeoCoordinate) -> f64 {
        initial_bearing(*self, other)
    }

    fn qibla_bearing(&self) -> f64 {
        qibla_bearing(*self)
    }
}

/// Last-known device heading reconciled against the target bearing.
///
/// Held per compass view; reset on view unmount, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingState {
    device_heading: f64,
    target_bearing: f64,
    calibrated: bool,
}

impl HeadingState {
    /// Starts at heading 0 with the given target bearing wrapped into
    /// [0, 360), uncalibrated.
    pub fn new(target_bearing: f64) -> Self {
        Self {
            device_heading: 0.0,
            target_bearing: target_bearing.rem_euclid(360.0),
            calibrated: false,
        }
    }

    /// Convenience: target set to the Qibla bearing for `observer`.
    pub fn for_observer(observer: GeoCoordinate) -> Self {
        Self::new(qibla_bearing(observer))
    }

    pub fn device_heading(&self) -> f64 {
        self.device_heading
    }

    pub fn target_bearing(&self) -> f64 {
        self.target_bearing
    }

    /// True only after explicit user confirmation; sensors never set it.
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Records a new compass sample, wrapped into [0, 360).
    pub fn update_heading(&mut self, degrees: f64) {
        self.device_heading = degrees.rem_euclid(360.0);
    }

    /// Replaces the target bearing (e.g. after a location update).
    pub fn update_target(&mut self, degrees: f64) {
        self.target_bearing = degrees.rem_euclid(360.0);
    }

    /// Marks the compass calibrated after the user confirms the
    /// figure-eight calibration gesture.
    pub fn confirm_calibration(&mut self) {
        self.calibrated = true;
    }

    /// Raw signed angle the user must turn through: `round(target - device)`.
    ///
    /// Deliberately not normalized; consumers that want a canonical
    /// range use [`relative_angle_normalized`](Self::relative_angle_normalized).
    pub fn relative_angle(&self) -> i32 {
        (self.target_bearing - self.device_heading).round() as i32
    }

    /// Relative angle wrapped into [0, 360).
    pub fn relative_angle_normalized(&self) -> f64 {
        (self.target_bearing - self.device_heading).rem_euclid(360.0)
    }

    /// Compass wind for the raw relative angle.
    pub fn direction(&self) -> CompassPoint {
        CompassPoint::from_angle(self.target_bearing - self.device_heading)
    }
}

/// Source of compass-heading samples.
///
/// Selected at configuration time so the real sensor and the manual
/// simulation are explicit variants rather than two code paths writing
/// the same field.
pub trait HeadingProvider: std::fmt::Debug + Send + Sync {
    /// Current heading in degrees, [0, 360).
    fn heading(&self) -> f64;
}

/// Heading fed by an external sensor; the host pushes samples in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorHeading {
    last_sample: f64,
}

impl SensorHeading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest sensor sample.
    pub fn push(&mut self, degrees: f64) {
        self.last_sample = degrees.rem_euclid(360.0);
    }
}

impl HeadingProvider for SensorHeading {
    fn heading(&self) -> f64 {
        self.last_sample
    }
}

/// Simulated heading advancing 45° per user action.
///
/// Fallback for environments without a real compass sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualStepHeading {
    current: f64,
}

impl ManualStepHeading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the simulated heading by one step.
    pub fn step(&mut self) {
        self.current = (self.current + MANUAL_STEP_DEG) % 360.0;
    }
}

impl HeadingProvider for ManualStepHeading {
    fn heading(&self) -> f64 {
        self.current
    }
}

/// Source of the observer's location.
pub trait LocationProvider: std::fmt::Debug + Send + Sync {
    /// Current coordinates, or `HudaError::PermissionDenied` when the
    /// user refused location access. Denial is surfaced for a manual
    /// retry; there is no automatic retry or backoff.
    fn locate(&self) -> Result<GeoCoordinate, HudaError>;
}

/// Fixed location, e.g. the Riyadh fallback or a user-chosen city.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoCoordinate);

impl Default for FixedLocation {
    fn default() -> Self {
        Self(RIYADH_FALLBACK)
    }
}

impl LocationProvider for FixedLocation {
    fn locate(&self) -> Result<GeoCoordinate, HudaError> {
        Ok(self.0)
    }
}

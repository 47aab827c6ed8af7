//! Sensor readings consumed by the estimator
//!
//! These are plain values handed over by the device drivers; the estimator
//! never talks to hardware itself.

use rover_core::params::DEFAULT_GPS_UNITS_PER_DEG;
use rover_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Integer GPS units per degree of latitude/longitude
pub const GPS_UNITS_PER_DEG: f64 = DEFAULT_GPS_UNITS_PER_DEG;

/// Compass heading from the inertial sensor
///
/// Degrees, 0 = north, clockwise positive. Values outside [0, 360) are
/// accepted and wrap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct HeadingSample {
    pub heading_deg: f64,
}

impl HeadingSample {
    pub fn new(heading_deg: f64) -> Self {
        Self { heading_deg }
    }
}

impl LogSummary for HeadingSample {
    fn log_summary(&self) -> String {
        format!("heading={:.1}deg", self.heading_deg)
    }
}

/// GPS position fix in the receiver's fixed-point encoding
///
/// Latitude and longitude are integers scaled by [`GPS_UNITS_PER_DEG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GpsFix {
    pub lat: i32,
    pub lon: i32,
}

impl GpsFix {
    pub fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// Encode decimal degrees, rounding to the nearest unit
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self::from_degrees_scaled(lat_deg, lon_deg, GPS_UNITS_PER_DEG)
    }

    /// Encode decimal degrees for a receiver with a different scale
    pub fn from_degrees_scaled(lat_deg: f64, lon_deg: f64, units_per_deg: f64) -> Self {
        Self {
            lat: (lat_deg * units_per_deg).round() as i32,
            lon: (lon_deg * units_per_deg).round() as i32,
        }
    }

    /// Latitude in decimal degrees
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg_scaled(GPS_UNITS_PER_DEG)
    }

    /// Longitude in decimal degrees
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg_scaled(GPS_UNITS_PER_DEG)
    }

    /// Latitude in decimal degrees for a receiver with a different scale
    pub fn latitude_deg_scaled(&self, units_per_deg: f64) -> f64 {
        self.lat as f64 / units_per_deg
    }

    /// Longitude in decimal degrees for a receiver with a different scale
    pub fn longitude_deg_scaled(&self, units_per_deg: f64) -> f64 {
        self.lon as f64 / units_per_deg
    }
}

impl LogSummary for GpsFix {
    fn log_summary(&self) -> String {
        format!(
            "lat={:.6} lon={:.6}",
            self.latitude_deg(),
            self.longitude_deg()
        )
    }
}

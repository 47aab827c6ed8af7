//! Geodetic Projection
//!
//! Converts latitude/longitude to meters in a local tangent plane centered on
//! a fixed origin.
//!
//! # Accuracy
//!
//! This is a flat-earth approximation: longitude is scaled by the cosine of
//! the origin's latitude only. Error grows with distance from the origin and
//! the projection is unsuitable beyond a few tens of kilometers. Origins near
//! the poles make `cos(origin_lat)` degenerate; no clamping is applied.
//!
//! # Example
//!
//! ```rust
//! use rover_library::algorithms::geodetic::GeodeticProjector;
//!
//! let projector = GeodeticProjector::new(34.0, -117.0);
//!
//! // The origin itself projects to (0, 0)
//! assert_eq!(projector.project(34.0, -117.0), (0.0, 0.0));
//!
//! // One millidegree north is about 111 m
//! let (_, y) = projector.project(34.001, -117.0);
//! assert!((y - 111.19).abs() < 0.01);
//! ```

use rover_core::params::DEFAULT_EARTH_RADIUS_M;
use std::f64::consts::PI;

/// Mean Earth radius (m)
pub const EARTH_RADIUS_M: f64 = DEFAULT_EARTH_RADIUS_M;

/// Local tangent-plane projector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticProjector {
    origin_lat: f64,     // Origin latitude (deg)
    origin_lon: f64,     // Origin longitude (deg)
    cos_origin_lat: f64, // Longitude compression at the origin
    earth_radius: f64,   // Sphere radius (m)
}

impl GeodeticProjector {
    /// Create a projector centered on `(origin_lat, origin_lon)` in degrees
    pub fn new(origin_lat: f64, origin_lon: f64) -> Self {
        Self::with_radius(origin_lat, origin_lon, EARTH_RADIUS_M)
    }

    /// Create a projector with a custom sphere radius (meters)
    pub fn with_radius(origin_lat: f64, origin_lon: f64, earth_radius: f64) -> Self {
        Self {
            origin_lat,
            origin_lon,
            cos_origin_lat: (origin_lat * PI / 180.0).cos(),
            earth_radius,
        }
    }

    /// Project a position in degrees to `(x, y)` meters east/north of the origin
    pub fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let x = (lon - self.origin_lon) * PI / 180.0 * self.earth_radius * self.cos_origin_lat;
        let y = (lat - self.origin_lat) * PI / 180.0 * self.earth_radius;
        (x, y)
    }

    /// Origin as `(lat, lon)` in degrees
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_lat, self.origin_lon)
    }

    /// Cosine of the origin latitude
    pub fn cos_origin_lat(&self) -> f64 {
        self.cos_origin_lat
    }

    /// Sphere radius (meters)
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }
}

//! Angle Wrapping
//!
//! Heading arithmetic shared by the estimator.
//!
//! # Conventions
//!
//! - Compass: degrees, 0 = north, clockwise positive (what the IMU reports)
//! - Local frame: radians, 0 = east, counter-clockwise positive, in (-π, π]
//!
//! # Example
//!
//! ```rust
//! use rover_library::algorithms::angles::{compass_to_enu, normalize_angle};
//! use std::f64::consts::PI;
//!
//! // compass east is local 0
//! assert!(compass_to_enu(90.0).abs() < 1e-12);
//! assert_eq!(normalize_angle(-PI), PI);
//! ```

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Floating-point modulo with a non-negative result
///
/// Returns `x mod m` shifted into `[0, m)`. A tiny negative remainder may
/// round up to exactly `m`.
#[inline]
pub fn wrap_positive(x: f64, m: f64) -> f64 {
    let r = x % m;
    if r < 0.0 {
        r + m
    } else {
        r
    }
}

/// Wrap an angle in radians into (-π, π]
///
/// Angles already in range are returned unchanged.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    if is_normalized(angle) {
        return angle;
    }
    let wrapped = wrap_positive(angle + PI, TAU) - PI;
    // -π and π are the same direction; keep the closed end of the interval
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Convert a compass heading in degrees to a local-frame heading in radians
pub fn compass_to_enu(compass_deg: f64) -> f64 {
    normalize_angle(-(PI * compass_deg / 180.0) + FRAC_PI_2)
}

/// Check that an angle lies in (-π, π]
#[inline]
pub fn is_normalized(angle: f64) -> bool {
    angle > -PI && angle <= PI
}

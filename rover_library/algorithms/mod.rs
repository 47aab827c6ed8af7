//! Pure computational algorithms for the rover
//!
//! No I/O and no allocation on the per-tick path; every algorithm can be
//! exercised without hardware.
//!
//! # Available Algorithms
//!
//! ## Geometry
//! - **angles**: heading wrapping and compass-to-local conversion
//! - **geodetic**: latitude/longitude to local tangent-plane meters
//!
//! ## Motion
//! - **kinematic_model**: calibrated drive levels ↔ body velocity map
//!
//! ## State Estimation
//! - **state_estimator**: heading/GPS/command fusion with forward-Euler integration

pub mod angles;
pub mod geodetic;
pub mod kinematic_model;
pub mod state_estimator;

//! # Rover Library
//!
//! Pose estimation for a small ground robot: an IMU heading, GPS fixes and
//! the commanded motor levels are combined into one planar
//! pose-and-velocity estimate, advanced once per control tick.
//!
//! ## Structure
//!
//! ```text
//! rover_library/
//! ── messages/       # Sensor inputs, motor command, pose state
//! ── algorithms/     # Angles, geodetic projection, kinematic model, estimator
//! ── publisher/      # Text and binary record encodings
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rover_library::{DataSource, GpsFix, HeadingSample, MotorCommand, StateEstimator};
//!
//! let mut estimator = StateEstimator::new();
//! estimator.init(0.05, 34.106, -117.712);
//!
//! // Each control tick: ingest what arrived, then integrate once
//! estimator.ingest_heading(&HeadingSample::new(12.0))?;
//! estimator.ingest_position(&GpsFix::new(34_106_010, -117_711_990))?;
//! estimator.ingest_control_and_integrate(&MotorCommand::new(60, 60))?;
//!
//! let mut row = String::new();
//! estimator.write_csv(&mut row);
//! # Ok::<(), rover_core::RoverError>(())
//! ```

pub mod algorithms;
pub mod messages;
pub mod publisher;

// Re-export message types at the crate root for convenience
pub use messages::*;

// Re-export the estimator and its collaborators
pub use algorithms::geodetic::GeodeticProjector;
pub use algorithms::kinematic_model::KinematicModel;
pub use algorithms::state_estimator::{Calibration, StateEstimator};
pub use publisher::DataSource;

// Re-export core types callers need alongside the library
pub use rover_core::{EstimatorParams, LogSummary, RoverError, RoverResult};

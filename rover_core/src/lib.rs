//! # Rover Core
//!
//! Runtime plumbing shared by the rover navigation crates.
//!
//! - **Errors**: the `RoverError` taxonomy and the `RoverResult` alias
//! - **Params**: calibration parameters for the estimator, loadable from YAML or TOML
//! - **Core**: the `LogSummary` trait used for compact log lines
//!
//! ## Quick Start
//!
//! ```rust
//! use rover_core::EstimatorParams;
//!
//! let params = EstimatorParams::default();
//! assert!(params.validate().is_ok());
//! assert_eq!(params.gps_units_per_deg, 1_000_000.0);
//! ```

pub mod core;
pub mod error;
pub mod params;

// Re-export commonly used types for easy access
pub use crate::core::LogSummary;
pub use error::{RoverError, RoverResult};
pub use params::{EstimatorParams, ModelMatrix};

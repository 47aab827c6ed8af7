//! Message types exchanged with the state estimator
//!
//! - Sensor: already-parsed readings pushed by the IMU and GPS drivers
//! - Control: the drive levels decided by the motor controller for this tick
//! - Pose state: the estimate itself and its fixed-layout binary record
//!
//! All message types are re-exported at the crate root for convenience.

pub mod control;
pub mod pose_state;
pub mod sensor;

pub use control::MotorCommand;
pub use pose_state::{PoseState, StateRecord};
pub use sensor::{GpsFix, HeadingSample, GPS_UNITS_PER_DEG};

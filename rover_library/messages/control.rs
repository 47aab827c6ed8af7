//! Control message types

use rover_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Drive levels commanded to the two motors for this control tick
///
/// Signed PWM magnitudes; positive drives forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MotorCommand {
    /// Right motor level
    pub right: i32,
    /// Left motor level
    pub left: i32,
}

impl MotorCommand {
    pub fn new(right: i32, left: i32) -> Self {
        Self { right, left }
    }

    /// Both motors off
    pub fn stop() -> Self {
        Self::default()
    }

    pub fn is_stopped(&self) -> bool {
        self.right == 0 && self.left == 0
    }
}

impl LogSummary for MotorCommand {
    fn log_summary(&self) -> String {
        format!("right={} left={}", self.right, self.left)
    }
}

//! Pose-and-velocity estimate

use rover_core::LogSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Planar pose and velocity of the vehicle
///
/// Position is in meters in the local tangent plane centered on the origin
/// fixed at `init`. Heading is in radians within (-π, π], 0 = east,
/// counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PoseState {
    /// East offset from origin (m)
    pub x: f64,
    /// North offset from origin (m)
    pub y: f64,
    /// Heading (rad)
    pub heading: f64,
    /// Linear velocity, forward positive (m/s)
    pub v: f64,
    /// Angular velocity, counter-clockwise positive (rad/s)
    pub w: f64,
}

impl PoseState {
    /// All-zero state at the origin, facing east
    pub fn zero() -> Self {
        Self::default()
    }

    /// Fixed-layout record used by the binary encoding
    pub fn to_record(&self) -> StateRecord {
        StateRecord {
            x: self.x as f32,
            y: self.y as f32,
            heading: self.heading as f32,
            v: self.v as f32,
            w: self.w as f32,
        }
    }
}

impl fmt::Display for PoseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x:{:.2} y:{:.2} h:{:.2} v:{:.2} w:{:.2}",
            self.x, self.y, self.heading, self.v, self.w
        )
    }
}

impl LogSummary for PoseState {
    fn log_summary(&self) -> String {
        format!(
            "pose=({:.3}, {:.3}, {:.3}) vel=({:.3}, {:.3})",
            self.x, self.y, self.heading, self.v, self.w
        )
    }
}

/// Binary layout of one state record: five `f32` in field order
/// `x, y, heading, v, w`, 20 bytes, no padding
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct StateRecord {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub v: f32,
    pub w: f32,
}

impl StateRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = std::mem::size_of::<StateRecord>();
}

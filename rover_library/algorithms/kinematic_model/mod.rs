//! Calibrated Kinematic Model
//!
//! Linear map between motor drive levels and body velocity, identified
//! offline for a specific drive unit (motor deadzones, PWM-to-force response).
//!
//! # Features
//!
//! - Forward kinematics (drive levels → linear/angular velocity)
//! - Inverse kinematics (linear/angular velocity → drive levels)
//! - Velocity saturation to the unit's rated limits
//!
//! # Example
//!
//! ```rust
//! use rover_library::algorithms::kinematic_model::KinematicModel;
//!
//! let model = KinematicModel::default();
//!
//! // No command, no motion
//! assert_eq!(model.forward_kinematics(0, 0), (0.0, 0.0));
//!
//! // Drive levels needed for 0.5 m/s straight ahead
//! let (right, left) = model.inverse_kinematics(0.5, 0.0);
//! assert!(right > 0.0 && left > 0.0);
//! ```

use rover_core::params::{EstimatorParams, ModelMatrix};
use rover_core::RoverResult;

/// Calibrated drive model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicModel {
    forward: ModelMatrix,      // [v; w] = forward * [right; left]
    inverse: ModelMatrix,      // [right; left] = inverse * [v; w]
    max_linear_velocity: f64,  // m/s
    max_angular_velocity: f64, // rad/s
}

impl KinematicModel {
    /// Create a model from a forward matrix, computing its inverse
    ///
    /// Velocity limits are left unbounded.
    pub fn new(forward: ModelMatrix) -> RoverResult<Self> {
        Ok(Self {
            forward,
            inverse: forward.inverse()?,
            max_linear_velocity: f64::INFINITY,
            max_angular_velocity: f64::INFINITY,
        })
    }

    /// Build the model from calibration parameters
    pub fn from_params(params: &EstimatorParams) -> RoverResult<Self> {
        params.validate()?;
        Ok(Self {
            forward: params.forward_model,
            inverse: params.resolved_inverse_model()?,
            max_linear_velocity: params.max_linear_velocity,
            max_angular_velocity: params.max_angular_velocity,
        })
    }

    /// Forward kinematics: convert drive levels to body velocity
    ///
    /// # Arguments
    /// * `right` - Right motor level
    /// * `left` - Left motor level
    ///
    /// # Returns
    /// (linear_velocity, angular_velocity) in m/s and rad/s
    pub fn forward_kinematics(&self, right: i32, left: i32) -> (f64, f64) {
        self.forward.apply(right as f64, left as f64)
    }

    /// Inverse kinematics: convert body velocity to drive levels
    ///
    /// # Arguments
    /// * `linear` - Linear velocity (m/s)
    /// * `angular` - Angular velocity (rad/s)
    ///
    /// # Returns
    /// (right_level, left_level), unrounded
    pub fn inverse_kinematics(&self, linear: f64, angular: f64) -> (f64, f64) {
        self.inverse.apply(linear, angular)
    }

    /// Clamp a velocity request to the rated limits
    pub fn saturate(&self, linear: f64, angular: f64) -> (f64, f64) {
        (
            linear.clamp(-self.max_linear_velocity, self.max_linear_velocity),
            angular.clamp(-self.max_angular_velocity, self.max_angular_velocity),
        )
    }

    /// Saturate a velocity request, then convert it to rounded drive levels
    pub fn command_for_velocity(&self, linear: f64, angular: f64) -> (i32, i32) {
        let (linear, angular) = self.saturate(linear, angular);
        let (right, left) = self.inverse_kinematics(linear, angular);
        (right.round() as i32, left.round() as i32)
    }

    /// Get forward matrix
    pub fn forward_matrix(&self) -> &ModelMatrix {
        &self.forward
    }

    /// Get inverse matrix
    pub fn inverse_matrix(&self) -> &ModelMatrix {
        &self.inverse
    }

    /// Get velocity limits as (linear, angular)
    pub fn velocity_limits(&self) -> (f64, f64) {
        (self.max_linear_velocity, self.max_angular_velocity)
    }
}

impl Default for KinematicModel {
    fn default() -> Self {
        let params = EstimatorParams::default();
        Self {
            forward: params.forward_model,
            inverse: ModelMatrix::default_inverse(),
            max_linear_velocity: params.max_linear_velocity,
            max_angular_velocity: params.max_angular_velocity,
        }
    }
}

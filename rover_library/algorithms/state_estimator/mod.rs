//! State Estimator
//!
//! Fuses IMU heading, GPS position and commanded drive levels into a single
//! planar pose-and-velocity estimate.
//!
//! # Update model
//!
//! - Heading: overwritten by every IMU sample (no smoothing)
//! - Position: overwritten by every GPS fix, projected into the local plane
//! - Velocity: computed from the drive levels through the kinematic model
//! - Once per control tick, position is advanced by one forward-Euler step
//!   using the current heading
//!
//! Angular velocity `w` is estimated every tick but never integrated into
//! heading; the IMU is the sole heading source.
//!
//! # Call discipline
//!
//! The estimator does no locking. Callers in a preemptive environment must
//! make each ingestion call and each `state()` read atomic (for example by
//! masking interrupts around them). `ingest_control_and_integrate` must run
//! exactly once per control period, after that period's heading/position
//! ingestion.
//!
//! # Example
//!
//! ```rust
//! use rover_library::algorithms::state_estimator::StateEstimator;
//! use rover_library::{GpsFix, HeadingSample, MotorCommand};
//!
//! let mut estimator = StateEstimator::new();
//! estimator.init(0.1, 34.0, -117.0);
//!
//! estimator.ingest_heading(&HeadingSample::new(90.0))?;
//! estimator.ingest_position(&GpsFix::new(34_000_000, -117_000_000))?;
//! estimator.ingest_control_and_integrate(&MotorCommand::new(100, 100))?;
//!
//! let state = estimator.state();
//! assert!(state.x > 0.0);
//! # Ok::<(), rover_core::RoverError>(())
//! ```

use crate::algorithms::angles::{compass_to_enu, normalize_angle};
use crate::algorithms::geodetic::{GeodeticProjector, EARTH_RADIUS_M};
use crate::algorithms::kinematic_model::KinematicModel;
use crate::messages::{GpsFix, HeadingSample, MotorCommand, PoseState, GPS_UNITS_PER_DEG};
use rover_core::params::EstimatorParams;
use rover_core::{LogSummary, RoverError, RoverResult};

/// Settings fixed at `init`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Control loop period, used as the integration step (s)
    pub loop_period: f64,
    /// Tangent-plane projection around the origin
    pub projector: GeodeticProjector,
}

impl Calibration {
    /// Origin as `(lat, lon)` in degrees
    pub fn origin(&self) -> (f64, f64) {
        self.projector.origin()
    }
}

/// Deterministic complementary state estimator
#[derive(Debug, Clone)]
pub struct StateEstimator {
    model: KinematicModel,
    gps_units_per_deg: f64,
    earth_radius: f64,
    calibration: Option<Calibration>,
    state: PoseState,
}

impl StateEstimator {
    /// Create an uninitialized estimator with the default drive calibration
    pub fn new() -> Self {
        Self::with_model(KinematicModel::default())
    }

    /// Create an uninitialized estimator with a specific kinematic model
    pub fn with_model(model: KinematicModel) -> Self {
        Self {
            model,
            gps_units_per_deg: GPS_UNITS_PER_DEG,
            earth_radius: EARTH_RADIUS_M,
            calibration: None,
            state: PoseState::zero(),
        }
    }

    /// Create an uninitialized estimator from calibration parameters
    pub fn from_params(params: &EstimatorParams) -> RoverResult<Self> {
        params.validate()?;
        Ok(Self {
            model: KinematicModel::from_params(params)?,
            gps_units_per_deg: params.gps_units_per_deg,
            earth_radius: params.earth_radius_m,
            calibration: None,
            state: PoseState::zero(),
        })
    }

    /// Fix the loop period and origin, and zero the state
    ///
    /// # Arguments
    /// * `period` - Control loop period (seconds)
    /// * `origin_lat` - Origin latitude (degrees)
    /// * `origin_lon` - Origin longitude (degrees)
    ///
    /// Calling this again re-initializes the estimator with the new origin.
    pub fn init(&mut self, period: f64, origin_lat: f64, origin_lon: f64) {
        self.calibration = Some(Calibration {
            loop_period: period,
            projector: GeodeticProjector::with_radius(origin_lat, origin_lon, self.earth_radius),
        });
        self.state = PoseState::zero();

        log::info!(
            "State estimator initialized: period={}s origin=({:.6}, {:.6})",
            period,
            origin_lat,
            origin_lon
        );
    }

    /// Whether `init` has been called
    pub fn is_initialized(&self) -> bool {
        self.calibration.is_some()
    }

    /// Settings fixed at `init`, if initialized
    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    /// Kinematic model used for velocity estimation
    pub fn model(&self) -> &KinematicModel {
        &self.model
    }

    /// Replace heading with an IMU compass reading
    pub fn ingest_heading(&mut self, sample: &HeadingSample) -> RoverResult<()> {
        self.require_init("ingest_heading")?;

        self.state.heading = compass_to_enu(sample.heading_deg);

        log::debug!(
            "IMU {} -> heading {}",
            sample.log_summary(),
            self.state.heading.log_summary()
        );
        Ok(())
    }

    /// Replace position with a GPS fix projected into the local plane
    pub fn ingest_position(&mut self, fix: &GpsFix) -> RoverResult<()> {
        let calibration = self.require_init("ingest_position")?;

        let lat = fix.latitude_deg_scaled(self.gps_units_per_deg);
        let lon = fix.longitude_deg_scaled(self.gps_units_per_deg);
        let (x, y) = calibration.projector.project(lat, lon);

        self.state.x = x;
        self.state.y = y;

        log::debug!("GPS {} -> position {}", fix.log_summary(), (x, y).log_summary());
        Ok(())
    }

    /// Estimate velocity from the drive levels and advance position one tick
    pub fn ingest_control_and_integrate(&mut self, command: &MotorCommand) -> RoverResult<()> {
        let calibration = self.require_init("ingest_control_and_integrate")?;
        let dt = calibration.loop_period;

        let (v, w) = self.model.forward_kinematics(command.right, command.left);
        self.state.v = v;
        self.state.w = w;

        // Forward Euler with the heading at the start of the step; w is not integrated
        let vx = v * self.state.heading.cos();
        let vy = v * self.state.heading.sin();
        self.state.x += vx * dt;
        self.state.y += vy * dt;
        self.state.heading = normalize_angle(self.state.heading);

        log::trace!("Control {} -> {}", command.log_summary(), self.state.log_summary());
        Ok(())
    }

    /// Snapshot of the current estimate
    pub fn state(&self) -> PoseState {
        self.state
    }

    fn require_init(&self, operation: &'static str) -> RoverResult<Calibration> {
        match self.calibration {
            Some(calibration) => Ok(calibration),
            None => {
                log::error!("{} called before init", operation);
                Err(RoverError::NotInitialized { operation })
            }
        }
    }
}

impl Default for StateEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::angles::is_normalized;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rover_core::params::ModelMatrix;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn initialized() -> StateEstimator {
        let mut estimator = StateEstimator::new();
        estimator.init(0.1, 34.0, -117.0);
        estimator
    }

    /// Model where `right` alone sets v (0.01 m/s per level) and `left` alone sets w
    fn unit_model() -> KinematicModel {
        KinematicModel::new(ModelMatrix::new(0.01, 0.0, 0.0, 0.01)).unwrap()
    }

    #[test]
    fn test_init_zeroes_state() {
        let mut estimator = initialized();
        estimator.ingest_heading(&HeadingSample::new(10.0)).unwrap();
        estimator
            .ingest_control_and_integrate(&MotorCommand::new(100, 100))
            .unwrap();
        assert_ne!(estimator.state(), PoseState::zero());

        estimator.init(0.2, 35.0, -118.0);
        assert_eq!(estimator.state(), PoseState::zero());

        let calibration = estimator.calibration().unwrap();
        assert_eq!(calibration.loop_period, 0.2);
        assert_eq!(calibration.origin(), (35.0, -118.0));
    }

    #[test]
    fn test_calls_before_init_fail() {
        let mut estimator = StateEstimator::new();
        assert!(!estimator.is_initialized());

        let result = estimator.ingest_heading(&HeadingSample::new(90.0));
        assert!(matches!(
            result,
            Err(RoverError::NotInitialized {
                operation: "ingest_heading"
            })
        ));
        assert!(matches!(
            estimator.ingest_position(&GpsFix::new(1, 1)),
            Err(RoverError::NotInitialized { .. })
        ));
        assert!(matches!(
            estimator.ingest_control_and_integrate(&MotorCommand::new(100, 100)),
            Err(RoverError::NotInitialized { .. })
        ));

        // Failed calls leave the state untouched
        assert_eq!(estimator.state(), PoseState::zero());
    }

    #[test]
    fn test_heading_convention() {
        let mut estimator = initialized();

        estimator.ingest_heading(&HeadingSample::new(0.0)).unwrap();
        assert_relative_eq!(estimator.state().heading, FRAC_PI_2, epsilon = 1e-12);

        estimator.ingest_heading(&HeadingSample::new(90.0)).unwrap();
        assert_abs_diff_eq!(estimator.state().heading, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heading_always_normalized() {
        let mut estimator = initialized();
        let mut raw = -1080.0;
        while raw <= 1080.0 {
            estimator.ingest_heading(&HeadingSample::new(raw)).unwrap();
            assert!(is_normalized(estimator.state().heading), "raw {}", raw);
            raw += 7.5;
        }
    }

    #[test]
    fn test_heading_last_writer_wins() {
        let mut estimator = initialized();
        estimator.ingest_heading(&HeadingSample::new(45.0)).unwrap();
        estimator.ingest_heading(&HeadingSample::new(180.0)).unwrap();
        assert_relative_eq!(estimator.state().heading, -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_position_is_idempotent() {
        let mut estimator = initialized();
        let fix = GpsFix::new(34_000_900, -116_999_100);

        estimator.ingest_position(&fix).unwrap();
        let first = estimator.state();
        estimator.ingest_position(&fix).unwrap();
        let second = estimator.state();

        assert_eq!((first.x, first.y), (second.x, second.y));
        assert!(first.x > 0.0 && first.y > 0.0);
    }

    #[test]
    fn test_position_at_origin() {
        let mut estimator = initialized();
        estimator
            .ingest_position(&GpsFix::new(34_000_000, -117_000_000))
            .unwrap();
        assert_eq!(estimator.state().x, 0.0);
        assert_eq!(estimator.state().y, 0.0);
    }

    #[test]
    fn test_position_overrides_integration() {
        let mut estimator = initialized();
        estimator.ingest_heading(&HeadingSample::new(90.0)).unwrap();
        for _ in 0..10 {
            estimator
                .ingest_control_and_integrate(&MotorCommand::new(100, 100))
                .unwrap();
        }
        assert!(estimator.state().x > 0.0);

        estimator
            .ingest_position(&GpsFix::new(34_000_000, -117_000_000))
            .unwrap();
        assert_eq!(estimator.state().x, 0.0);
        assert_eq!(estimator.state().y, 0.0);
    }

    #[test]
    fn test_integration_step_east() {
        let mut estimator = StateEstimator::with_model(unit_model());
        estimator.init(1.0, 34.0, -117.0);

        // Fresh state faces east (heading 0); 100 levels → v = 1.0 m/s
        estimator
            .ingest_control_and_integrate(&MotorCommand::new(100, 0))
            .unwrap();

        let state = estimator.state();
        assert_relative_eq!(state.v, 1.0, epsilon = 1e-12);
        assert_relative_eq!(state.x, 1.0, epsilon = 1e-12);
        assert_eq!(state.y, 0.0);
    }

    #[test]
    fn test_integration_step_north() {
        let mut estimator = StateEstimator::with_model(unit_model());
        estimator.init(0.5, 34.0, -117.0);
        estimator.ingest_heading(&HeadingSample::new(0.0)).unwrap();

        estimator
            .ingest_control_and_integrate(&MotorCommand::new(200, 0))
            .unwrap();

        let state = estimator.state();
        assert_abs_diff_eq!(state.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(state.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angular_velocity_not_integrated() {
        let mut estimator = StateEstimator::with_model(unit_model());
        estimator.init(1.0, 34.0, -117.0);
        estimator.ingest_heading(&HeadingSample::new(45.0)).unwrap();
        let heading = estimator.state().heading;

        for _ in 0..5 {
            estimator
                .ingest_control_and_integrate(&MotorCommand::new(0, 100))
                .unwrap();
        }

        let state = estimator.state();
        assert_relative_eq!(state.w, 1.0, epsilon = 1e-12);
        assert_eq!(state.heading, heading);
        assert_eq!(state.v, 0.0);
    }

    #[test]
    fn test_reverse_drive_moves_backwards() {
        let mut estimator = StateEstimator::with_model(unit_model());
        estimator.init(1.0, 34.0, -117.0);
        estimator.ingest_heading(&HeadingSample::new(270.0)).unwrap();

        // Facing west, driving in reverse moves east
        estimator
            .ingest_control_and_integrate(&MotorCommand::new(-100, 0))
            .unwrap();

        let state = estimator.state();
        assert_relative_eq!(state.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state.heading.abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_from_params() {
        let params = EstimatorParams {
            gps_units_per_deg: 10_000_000.0,
            ..EstimatorParams::default()
        };
        let mut estimator = StateEstimator::from_params(&params).unwrap();
        estimator.init(0.1, 0.0, 0.0);

        // 10^7 units per degree: 10_000_000 units is one degree north
        estimator.ingest_position(&GpsFix::new(10_000_000, 0)).unwrap();
        assert_relative_eq!(
            estimator.state().y,
            EARTH_RADIUS_M * PI / 180.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_from_invalid_params() {
        let params = EstimatorParams {
            earth_radius_m: 0.0,
            ..EstimatorParams::default()
        };
        assert!(StateEstimator::from_params(&params).is_err());
    }
}

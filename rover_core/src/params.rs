//! Calibration parameters for the rover state estimator
//!
//! Every field defaults to the values the drive unit was calibrated with, so
//! an empty or partial parameter file is valid. Parameters are read once at
//! startup; nothing mutates them after the estimator is built.

use crate::error::{RoverError, RoverResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// GPS fixed-point encoding: integer units per degree of latitude/longitude
pub const DEFAULT_GPS_UNITS_PER_DEG: f64 = 1_000_000.0;

/// Mean Earth radius (m)
pub const DEFAULT_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Maximum linear velocity (m/s)
pub const DEFAULT_MAX_LINEAR_VELOCITY: f64 = 1.0;

/// Maximum angular velocity (rad/s)
pub const DEFAULT_MAX_ANGULAR_VELOCITY: f64 = 0.2;

/// Determinants below this are treated as singular
const SINGULAR_EPSILON: f64 = 1e-12;

/// Row-major 2x2 matrix `[[a, b], [c, d]]`
///
/// As a forward model it maps `[right; left]` commands to `[v; w]`; as an
/// inverse model it maps `[v; w]` back to `[right; left]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ModelMatrix {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Calibrated forward model of the drive unit
    pub const fn default_forward() -> Self {
        Self::new(0.0068, 0.0063, 0.0019, -0.0042)
    }

    /// Calibrated inverse of [`ModelMatrix::default_forward`]
    pub const fn default_inverse() -> Self {
        Self::new(103.5546, 156.1537, 46.8461, -167.4543)
    }

    /// Multiply the matrix with the column vector `[first; second]`
    #[inline]
    pub fn apply(&self, first: f64, second: f64) -> (f64, f64) {
        (
            self.a * first + self.b * second,
            self.c * first + self.d * second,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Analytic inverse, failing on a singular matrix
    pub fn inverse(&self) -> RoverResult<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(RoverError::SingularMatrix(det));
        }
        Ok(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
        ))
    }

    fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }
}

/// Estimator calibration parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorParams {
    /// Integer GPS units per degree
    pub gps_units_per_deg: f64,
    /// Earth radius used by the tangent-plane projection (m)
    pub earth_radius_m: f64,
    /// Maximum linear velocity (m/s)
    pub max_linear_velocity: f64,
    /// Maximum angular velocity (rad/s)
    pub max_angular_velocity: f64,
    /// Commands to velocity: `[v; w] = forward_model * [right; left]`
    pub forward_model: ModelMatrix,
    /// Velocity to commands; when absent, the calibrated inverse for the
    /// default forward model, otherwise computed from `forward_model`
    pub inverse_model: Option<ModelMatrix>,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            gps_units_per_deg: DEFAULT_GPS_UNITS_PER_DEG,
            earth_radius_m: DEFAULT_EARTH_RADIUS_M,
            max_linear_velocity: DEFAULT_MAX_LINEAR_VELOCITY,
            max_angular_velocity: DEFAULT_MAX_ANGULAR_VELOCITY,
            forward_model: ModelMatrix::default_forward(),
            inverse_model: None,
        }
    }
}

impl EstimatorParams {
    /// Parse parameters from a YAML document
    pub fn from_yaml_str(yaml: &str) -> RoverResult<Self> {
        let params: Self = serde_yaml::from_str(yaml)?;
        params.validate()?;
        Ok(params)
    }

    /// Parse parameters from a TOML document
    pub fn from_toml_str(text: &str) -> RoverResult<Self> {
        let params: Self = toml::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a `.yaml`/`.yml` or `.toml` file
    pub fn load_from_disk(path: &Path) -> RoverResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let params = match ParamFormat::from_path(path)? {
            ParamFormat::Yaml => Self::from_yaml_str(&text)?,
            ParamFormat::Toml => Self::from_toml_str(&text)?,
        };
        log::info!("Loaded estimator parameters from {}", path.display());
        Ok(params)
    }

    /// Save parameters, picking the format from the file extension
    pub fn save_to_disk(&self, path: &Path) -> RoverResult<()> {
        let text = match ParamFormat::from_path(path)? {
            ParamFormat::Yaml => serde_yaml::to_string(self)?,
            ParamFormat::Toml => toml::to_string(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Reject parameters that would make the estimator produce garbage
    pub fn validate(&self) -> RoverResult<()> {
        if !(self.gps_units_per_deg.is_finite() && self.gps_units_per_deg > 0.0) {
            return Err(RoverError::invalid_param(
                "gps_units_per_deg",
                format!("must be positive, got {}", self.gps_units_per_deg),
            ));
        }
        if !(self.earth_radius_m.is_finite() && self.earth_radius_m > 0.0) {
            return Err(RoverError::invalid_param(
                "earth_radius_m",
                format!("must be positive, got {}", self.earth_radius_m),
            ));
        }
        if !self.forward_model.is_finite() {
            return Err(RoverError::invalid_param(
                "forward_model",
                "coefficients must be finite",
            ));
        }
        self.forward_model.inverse()?;
        if let Some(inverse) = &self.inverse_model {
            if !inverse.is_finite() {
                return Err(RoverError::invalid_param(
                    "inverse_model",
                    "coefficients must be finite",
                ));
            }
        }
        if self.max_linear_velocity.is_nan() || self.max_linear_velocity < 0.0 {
            return Err(RoverError::invalid_param(
                "max_linear_velocity",
                format!("must be non-negative, got {}", self.max_linear_velocity),
            ));
        }
        if self.max_angular_velocity.is_nan() || self.max_angular_velocity < 0.0 {
            return Err(RoverError::invalid_param(
                "max_angular_velocity",
                format!("must be non-negative, got {}", self.max_angular_velocity),
            ));
        }
        Ok(())
    }

    /// Configured inverse model, or one derived from the forward model
    pub fn resolved_inverse_model(&self) -> RoverResult<ModelMatrix> {
        match self.inverse_model {
            Some(inverse) => Ok(inverse),
            None if self.forward_model == ModelMatrix::default_forward() => {
                Ok(ModelMatrix::default_inverse())
            }
            None => self.forward_model.inverse(),
        }
    }
}

enum ParamFormat {
    Yaml,
    Toml,
}

impl ParamFormat {
    fn from_path(path: &Path) -> RoverResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(ParamFormat::Yaml),
            Some("toml") => Ok(ParamFormat::Toml),
            _ => Err(RoverError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

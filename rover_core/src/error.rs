//! Error types for the rover crates

use std::path::PathBuf;
use thiserror::Error;

/// Rover errors
#[derive(Debug, Error)]
pub enum RoverError {
    #[error("'{operation}' called before the estimator was initialized")]
    NotInitialized { operation: &'static str },

    #[error("Buffer too small: record needs {needed} bytes at offset {offset}, buffer holds {available}")]
    BufferTooSmall {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Model matrix is singular (determinant {0})")]
    SingularMatrix(f64),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParam { name: &'static str, reason: String },

    #[error("Unsupported parameter file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl RoverError {
    /// Shorthand for an `InvalidParam` error
    pub fn invalid_param(name: &'static str, reason: impl Into<String>) -> Self {
        RoverError::InvalidParam {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for rover operations
pub type RoverResult<T> = Result<T, RoverError>;

//! Error types for galaxy construction.

use std::fmt;

/// A configuration the star field refuses to build from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A disk scale length was zero or negative.
    NonPositiveScale { name: &'static str, value: f64 },
    /// The stellar mass bounds do not satisfy `0 < min <= max`.
    InvalidMassRange { min: f64, max: f64 },
    /// The integration step was zero or negative.
    NonPositiveTimeStep(f64),
    /// A parameter was NaN or infinite.
    NonFinite { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveScale { name, value } => {
                write!(f, "Scale length `{}` must be positive, got {}", name, value)
            }
            ConfigError::InvalidMassRange { min, max } => write!(
                f,
                "Stellar mass range must satisfy 0 < min <= max, got [{}, {}]",
                min, max
            ),
            ConfigError::NonPositiveTimeStep(dt) => {
                write!(f, "Time step must be positive, got {}", dt)
            }
            ConfigError::NonFinite { name, value } => {
                write!(f, "Parameter `{}` must be finite, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

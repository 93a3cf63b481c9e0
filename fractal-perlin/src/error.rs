//! Errors reported by the checked noise APIs.

use std::fmt;

use thiserror::Error;

/// Coordinate axis, used to report which input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x coordinate.
    X,
    /// The y coordinate.
    Y,
    /// The z coordinate.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// An error that can occur when configuring or sampling a generator.
#[derive(Error, Debug)]
pub enum NoiseError {
    /// A coordinate was NaN or infinite.
    #[error("Non-finite {axis} coordinate: {value}")]
    NonFiniteCoordinate {
        /// Which coordinate was rejected.
        axis: Axis,
        /// The offending value.
        value: f64,
    },
    /// The octave count was zero.
    #[error("Octave count must be at least 1, got {0}")]
    InvalidOctaves(u32),
    /// The persistence was not a positive finite number.
    #[error("Persistence must be finite and greater than 0, got {0}")]
    InvalidPersistence(f64),
    /// Settings text could not be parsed.
    #[error("Failed to parse noise settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Reject non-finite coordinates.
pub(crate) fn check_finite(axis: Axis, value: f64) -> Result<f64, NoiseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NoiseError::NonFiniteCoordinate { axis, value })
    }
}

/// Reject octave and persistence values that would degrade output to NaN.
pub(crate) fn check_parameters(octaves: u32, persistence: f64) -> Result<(), NoiseError> {
    if octaves == 0 {
        return Err(NoiseError::InvalidOctaves(octaves));
    }
    if !persistence.is_finite() || persistence <= 0.0 {
        return Err(NoiseError::InvalidPersistence(persistence));
    }
    Ok(())
}

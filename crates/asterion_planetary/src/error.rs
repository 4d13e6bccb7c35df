//! # Planetary Error Types
//!
//! All errors that can occur while deriving a planetary system.

use thiserror::Error;

/// Errors from system generation and the property calculators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanetaryError {
    /// A caller passed a value outside the calculator's contract
    /// (non-positive mass, distance, density, and so on). Reported instead
    /// of silently producing NaN.
    #[error("invalid argument {name}: {value}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for planetary operations.
pub type PlanetaryResult<T> = Result<T, PlanetaryError>;

/// Rejects non-finite or non-positive values.
#[inline]
pub(crate) fn require_positive(name: &'static str, value: f64) -> PlanetaryResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PlanetaryError::InvalidArgument { name, value })
    }
}

/// Rejects non-finite or negative values.
#[inline]
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> PlanetaryResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PlanetaryError::InvalidArgument { name, value })
    }
}

//! # Orbital Position
//!
//! Where along its orbit a planet is after some elapsed time. Linear phase
//! only: the excluded rendering layer rotates planet representations by this
//! angle, so eccentricity and inclination are out of scope.

use crate::error::{require_positive, PlanetaryResult};

/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Angular position in degrees after `elapsed_days` of an orbit taking
/// `orbital_period_years`.
///
/// Linear mapping `(elapsed / period_days) × 360`, wrapped to `[0, 360)`.
/// Negative elapsed time walks the orbit backwards and still wraps into
/// range. Pure and stateless.
///
/// # Errors
///
/// `InvalidArgument` for a non-positive orbital period.
pub fn angle_at_time(orbital_period_years: f64, elapsed_days: f64) -> PlanetaryResult<f64> {
    let period_days = require_positive("orbital_period_years", orbital_period_years)? * DAYS_PER_YEAR;
    Ok(((elapsed_days / period_days) * 360.0).rem_euclid(360.0))
}

//! # System Architecture
//!
//! Derives the shape of one planetary system from a star's seed: the
//! orbit-spacing law (a geometric Blagg-style progression with Gaussian
//! jitter), the planetary-to-stellar mass ratio, the per-planet masses
//! against a depleting budget, and each orbit's distance.
//!
//! ## Channels
//!
//! Every draw family derives its own channel from the star seed so the
//! draws stay independent of each other and of the star's own properties.
//! Channel 1 off the star seed is taken by the planet-count draw upstream;
//! channels here start at 2. Planet child seeds hash in the planet index
//! from channel 100 upward.

use asterion_random::{SampleStream, Seed, MAX_REJECTIONS};
use asterion_stellar::StarRecord;

use crate::error::{require_positive, PlanetaryResult};
use crate::planet::{
    bulk_density, classify_composition, equilibrium_temperature, escape_velocity, orbital_period,
    radius_from_mass_and_density, surface_gravity, PlanetRecord, EARTH_MASS_IN_SOLAR,
};

/// Channel for the orbit-spacing draws.
const SPACING_CHANNEL: i32 = 2;
/// Channel for the first-orbit draw.
const FIRST_ORBIT_CHANNEL: i32 = 3;
/// Channel for the mass-ratio draw.
const MASS_RATIO_CHANNEL: i32 = 4;
/// Channel for the mass-sequence draws.
const MASS_LINE_CHANNEL: i32 = 5;
/// Channel for the distance-sequence draws.
const DISTANCE_CHANNEL: i32 = 6;
/// Base channel for per-planet child seeds (base + planet index).
const PLANET_SEED_CHANNEL_BASE: i32 = 100;
/// Channel (off the planet seed) for the epoch true-anomaly draw.
const ANOMALY_CHANNEL: i32 = 2;

/// Star size at which the first-orbit draw is taken at face value
/// (a G-class star in map scale units).
pub const REFERENCE_STAR_SIZE: f64 = 86.0129;

/// Floor for the budget-exhaustion fallback mass (Earth masses).
const MIN_PLANET_MASS_EARTH: f64 = 1e-6;

/// The orbit-spacing law of one system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSpacing {
    /// Geometric progression factor between consecutive orbits.
    pub ratio: f64,
    /// Standard deviation of the per-orbit jitter (AU).
    pub variance_std_dev: f64,
}

/// Derives the orbit-spacing law from the star seed.
///
/// The ratio sits near 1.83 (between the solar system's ~1.7 and Blagg's
/// 1.73 fit) with a hard floor of 1.2 so orbits always move outward in
/// expectation.
#[must_use]
pub fn derive_orbit_spacing(star_seed: Seed) -> OrbitSpacing {
    let mut stream = SampleStream::new(star_seed.derive(SPACING_CHANNEL));
    let ratio = stream.gaussian_bounded(1.8275, 0.125, 1.2, f64::INFINITY);
    let variance_std_dev =
        stream.gaussian_bounded(0.0, 10.0, -1000.0, f64::INFINITY).abs() / 100.0;
    OrbitSpacing {
        ratio,
        variance_std_dev,
    }
}

/// Derives the innermost orbit distance in AU.
///
/// The base draw (mean 45, floor 5, roughly spanning TRAPPIST-1-tight to
/// wide systems in scale units) is proportional to the star's size relative
/// to [`REFERENCE_STAR_SIZE`].
///
/// # Errors
///
/// `InvalidArgument` for a non-positive star size.
pub fn derive_first_orbit_au(star_seed: Seed, star_size: f64) -> PlanetaryResult<f64> {
    let size = require_positive("star_size", star_size)?;
    let mut stream = SampleStream::new(star_seed.derive(FIRST_ORBIT_CHANNEL));
    let base = stream.gaussian_bounded(45.0, 25.0, 5.0, f64::INFINITY);
    Ok(base * size / REFERENCE_STAR_SIZE)
}

/// Derives the planetary-to-stellar mass ratio (about 1%, floor 0.3%).
#[must_use]
pub fn derive_planetary_mass_ratio(star_seed: Seed) -> f64 {
    let mut stream = SampleStream::new(star_seed.derive(MASS_RATIO_CHANNEL));
    stream.gaussian_bounded(0.01, 0.01, 0.003, f64::INFINITY)
}

/// Draws one candidate planet mass in Earth masses.
///
/// A uniform draw picks one of four size classes, each with its own
/// Gaussian; the caller decides whether the candidate fits its budget.
fn draw_candidate_mass(stream: &mut SampleStream) -> f64 {
    let class = stream.uniform();
    if class < 0.233 {
        // Terrestrial
        stream.gaussian_bounded(0.494_434, 0.483_37, 0.000_46, f64::INFINITY)
    } else if class < 0.5 {
        // Large terrestrial
        stream.gaussian_bounded(5.0, 5.0, 1.0, f64::INFINITY)
    } else if class < 0.75 {
        // Small gas giant
        stream.gaussian_bounded(30.0, 10.0, 10.0, f64::INFINITY)
    } else {
        // Large gas giant
        stream.gaussian_bounded(206.5, 157.68, 40.0, f64::INFINITY)
    }
}

/// Generates the per-planet masses (Earth masses) against a depleting budget.
///
/// The budget starts at `mass_ratio × star_mass` converted to Earth masses.
/// Candidates exceeding the remaining budget are rejected and redrawn
/// (size class included), capped at [`MAX_REJECTIONS`] attempts; on
/// exhaustion the planet takes half the remaining budget, so the total
/// never exceeds the budget by more than the tiny fallback floor.
///
/// # Errors
///
/// `InvalidArgument` for non-positive star mass or mass ratio.
pub fn generate_mass_sequence(
    star_seed: Seed,
    star_mass: f64,
    planet_count: u32,
    mass_ratio: f64,
) -> PlanetaryResult<Vec<f64>> {
    let star_mass = require_positive("star_mass", star_mass)?;
    let mass_ratio = require_positive("mass_ratio", mass_ratio)?;

    let mut stream = SampleStream::new(star_seed.derive(MASS_LINE_CHANNEL));
    let mut budget = mass_ratio * star_mass / EARTH_MASS_IN_SOLAR;
    let mut masses = Vec::with_capacity(planet_count as usize);

    for _ in 0..planet_count {
        let mut accepted = None;
        for _ in 0..MAX_REJECTIONS {
            let candidate = draw_candidate_mass(&mut stream);
            if candidate <= budget {
                accepted = Some(candidate);
                break;
            }
        }
        let mass = accepted.unwrap_or_else(|| (budget * 0.5).max(MIN_PLANET_MASS_EARTH));
        budget -= mass;
        masses.push(mass);
    }
    Ok(masses)
}

/// Generates the orbit distances (AU) for a system.
///
/// Planet 0 sits at `first_orbit`; planet n is drawn around
/// `first_orbit × ratio^n` with the system's jitter, floored at 10% of the
/// mean. Distances increase in expectation only: the jitter may locally
/// reorder neighbors, and that is an accepted property of the distribution,
/// not enforced away.
///
/// # Errors
///
/// `InvalidArgument` for a non-positive first orbit.
pub fn generate_distance_sequence(
    star_seed: Seed,
    first_orbit: f64,
    spacing: OrbitSpacing,
    planet_count: u32,
) -> PlanetaryResult<Vec<f64>> {
    let first_orbit = require_positive("first_orbit", first_orbit)?;

    let mut stream = SampleStream::new(star_seed.derive(DISTANCE_CHANNEL));
    let mut distances = Vec::with_capacity(planet_count as usize);
    for n in 0..planet_count {
        if n == 0 {
            distances.push(first_orbit);
            continue;
        }
        #[allow(clippy::cast_possible_wrap)]
        let mean = first_orbit * spacing.ratio.powi(n as i32);
        let distance =
            stream.gaussian_bounded(mean, spacing.variance_std_dev, 0.1 * mean, f64::INFINITY);
        distances.push(distance);
    }
    Ok(distances)
}

/// Derives the full planetary system of a star.
///
/// Deterministic in the star record: the same seed, mass, size, luminosity,
/// and planet count always yield the same planets, in order.
///
/// # Errors
///
/// `InvalidArgument` when the record carries non-positive mass, size, or
/// luminosity.
pub fn generate_system(star: &StarRecord) -> PlanetaryResult<Vec<PlanetRecord>> {
    let star_mass = require_positive("star_mass", star.mass)?;
    require_positive("star_size", star.size)?;
    require_positive("star_luminosity", star.luminosity)?;

    let seed = star.system_seed;
    let spacing = derive_orbit_spacing(seed);
    let first_orbit = derive_first_orbit_au(seed, star.size)?;
    let mass_ratio = derive_planetary_mass_ratio(seed);
    let masses = generate_mass_sequence(seed, star_mass, star.planet_count, mass_ratio)?;
    let distances = generate_distance_sequence(seed, first_orbit, spacing, star.planet_count)?;

    let mut planets = Vec::with_capacity(star.planet_count as usize);
    for (index, (&mass_earth, &distance_au)) in masses.iter().zip(distances.iter()).enumerate() {
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let planet_seed = seed.derive(PLANET_SEED_CHANNEL_BASE + index as i32);

        let temperature = equilibrium_temperature(distance_au, star.luminosity)?;
        let (composition, composition_class) =
            classify_composition(planet_seed, temperature, mass_earth)?;
        let density = bulk_density(&composition)?;
        let radius_earth = radius_from_mass_and_density(mass_earth, density)?;
        let true_anomaly = SampleStream::new(planet_seed.derive(ANOMALY_CHANNEL)).uniform();

        #[allow(clippy::cast_possible_truncation)]
        let order_in_system = index as u32 + 1;

        planets.push(PlanetRecord {
            order_in_system,
            seed: planet_seed,
            mass_earth,
            orbital_distance_au: distance_au,
            composition,
            composition_class,
            density,
            radius_earth,
            surface_gravity: surface_gravity(mass_earth, radius_earth)?,
            escape_velocity: escape_velocity(mass_earth, radius_earth)?,
            equilibrium_temperature_k: temperature,
            orbital_period_years: orbital_period(distance_au, star_mass)?,
            true_anomaly,
        });
    }
    Ok(planets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterion_random::Seed;
    use asterion_stellar::{Rgb, StarRecord, Vec2};

    fn sun_like(seed: i32) -> StarRecord {
        StarRecord {
            position: Vec2::new(0.0, 0.0),
            class_name: "G".to_owned(),
            mass: 1.0,
            luminosity: 1.0,
            size: 86.0129,
            color: Rgb::new(1.0, 0.95, 0.8),
            system_seed: Seed::new(seed),
            planet_count: 8,
        }
    }

    #[test]
    fn test_orbit_spacing_bounds() {
        for raw in 0..500 {
            let spacing = derive_orbit_spacing(Seed::new(raw * 17));
            assert!(spacing.ratio >= 1.2, "ratio {} below floor", spacing.ratio);
            assert!(spacing.variance_std_dev >= 0.0);
        }
    }

    #[test]
    fn test_first_orbit_scales_with_star_size() {
        let seed = Seed::new(77);
        let small = derive_first_orbit_au(seed, 43.0).unwrap();
        let large = derive_first_orbit_au(seed, 86.0).unwrap();
        assert!((large / small - 2.0).abs() < 1e-9, "same draw, linear scaling");
        assert!(small > 0.0);
    }

    #[test]
    fn test_mass_ratio_floor() {
        for raw in 0..500 {
            let ratio = derive_planetary_mass_ratio(Seed::new(raw * 23));
            assert!(ratio >= 0.003, "ratio {ratio} below floor");
        }
    }

    #[test]
    fn test_mass_sequence_respects_budget() {
        for raw in 0..200 {
            let seed = Seed::new(raw * 101);
            let ratio = derive_planetary_mass_ratio(seed);
            let masses = generate_mass_sequence(seed, 1.0, 9, ratio).unwrap();
            assert_eq!(masses.len(), 9);
            let budget = ratio * 1.0 / EARTH_MASS_IN_SOLAR;
            let total: f64 = masses.iter().sum();
            assert!(
                total <= budget + 1e-3,
                "masses {total} exceed budget {budget}"
            );
            assert!(masses.iter().all(|&m| m > 0.0));
        }
    }

    #[test]
    fn test_mass_sequence_small_star_still_terminates() {
        // An M dwarf at the minimum ratio leaves ~80 Earth masses; ten
        // planets must still come out positive and within budget.
        let seed = Seed::new(4242);
        let masses = generate_mass_sequence(seed, 0.08, 10, 0.003).unwrap();
        let budget = 0.003 * 0.08 / EARTH_MASS_IN_SOLAR;
        assert!(masses.iter().sum::<f64>() <= budget + 1e-3);
        assert!(masses.iter().all(|&m| m > 0.0));
    }

    #[test]
    fn test_distance_sequence_starts_at_first_orbit() {
        let seed = Seed::new(9);
        let spacing = derive_orbit_spacing(seed);
        let distances = generate_distance_sequence(seed, 0.4, spacing, 6).unwrap();
        assert!((distances[0] - 0.4).abs() < f64::EPSILON);
        assert_eq!(distances.len(), 6);
        assert!(distances.iter().all(|&d| d > 0.0));
    }

    #[test]
    fn test_distances_mostly_increasing() {
        // Monotonicity is statistical: the geometric mean grows ~1.8x per
        // orbit, so inversions should be rare across many systems.
        let mut pairs = 0u32;
        let mut inversions = 0u32;
        for raw in 0..300 {
            let seed = Seed::new(raw * 53 + 11);
            let spacing = derive_orbit_spacing(seed);
            let first = derive_first_orbit_au(seed, 86.0).unwrap();
            let distances = generate_distance_sequence(seed, first, spacing, 8).unwrap();
            for window in distances.windows(2) {
                pairs += 1;
                if window[1] <= window[0] {
                    inversions += 1;
                }
            }
        }
        let rate = f64::from(inversions) / f64::from(pairs);
        assert!(rate < 0.05, "inversion rate {rate} too high");
    }

    #[test]
    fn test_generate_system_deterministic() {
        let star = sun_like(1234);
        let a = generate_system(&star).unwrap();
        let b = generate_system(&star).unwrap();
        assert_eq!(a, b, "same star record must reproduce the system");
    }

    #[test]
    fn test_generate_system_order_contiguous() {
        let star = sun_like(555);
        let planets = generate_system(&star).unwrap();
        assert_eq!(planets.len(), 8);
        for (index, planet) in planets.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let expected = index as u32 + 1;
            assert_eq!(planet.order_in_system, expected, "order must be 1..N without gaps");
        }
    }

    #[test]
    fn test_generate_system_invariants() {
        for raw in 0..100 {
            let star = sun_like(raw * 71 + 2);
            for planet in generate_system(&star).unwrap() {
                assert!(planet.composition.is_normalized());
                assert!(planet.mass_earth > 0.0);
                assert!(planet.orbital_distance_au > 0.0);
                assert!(planet.density > 0.0);
                assert!(planet.radius_earth > 0.0);
                assert!(planet.surface_gravity > 0.0);
                assert!(planet.escape_velocity > 0.0);
                assert!(planet.equilibrium_temperature_k > 0.0);
                assert!(planet.orbital_period_years > 0.0);
                assert!((0.0..1.0).contains(&planet.true_anomaly));
            }
        }
    }

    #[test]
    fn test_generate_system_rejects_bad_star() {
        let mut star = sun_like(1);
        star.mass = 0.0;
        assert!(generate_system(&star).is_err());

        let mut star = sun_like(1);
        star.luminosity = f64::NAN;
        assert!(generate_system(&star).is_err());
    }

    #[test]
    fn test_planet_seeds_distinct_within_system() {
        let star = sun_like(31_337);
        let planets = generate_system(&star).unwrap();
        let mut seeds: Vec<i32> = planets.iter().map(|p| p.seed.value()).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), planets.len());
    }
}

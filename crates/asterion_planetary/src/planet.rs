//! # Planet Property Calculators
//!
//! Pure formulas deriving a planet's physical character from its mass, its
//! orbital distance, and its host star. No hidden state: everything is
//! reproducible from (seed, mass, distance, star mass, star luminosity).
//!
//! Units follow the astronomy convention of the rest of the workspace:
//! planet masses in Earth masses, radii in Earth radii, distances in AU,
//! star masses/luminosities in solar units, SI inside the formulas.

use asterion_random::{SampleStream, Seed};

use crate::error::{require_non_negative, require_positive, PlanetaryResult};

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;
/// Solar mass (kg).
pub const SOLAR_MASS_KG: f64 = 1.989e30;
/// Solar luminosity (W).
pub const SOLAR_LUMINOSITY_W: f64 = 3.826e26;
/// Earth mass (kg).
pub const EARTH_MASS_KG: f64 = 5.972e24;
/// Earth radius (m).
pub const EARTH_RADIUS_M: f64 = 6.371e6;
/// One astronomical unit (m).
pub const AU_M: f64 = 1.495_978_707e11;
/// Stefan-Boltzmann constant (W m⁻² K⁻⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;
/// Fraction of incident flux absorbed (1 − bond albedo), fixed.
pub const ALBEDO_FACTOR: f64 = 0.67;
/// One Julian year (s).
pub const SECONDS_PER_YEAR: f64 = 3.155_76e7;
/// Earth mass expressed in solar masses.
pub const EARTH_MASS_IN_SOLAR: f64 = 3.002_73e-6;

/// Bulk density of the gas component (kg/m³).
pub const DENSITY_GAS: f64 = 1.2;
/// Bulk density of the liquid component (kg/m³).
pub const DENSITY_LIQUID: f64 = 1000.0;
/// Bulk density of the silicate component (kg/m³).
pub const DENSITY_SILICATE: f64 = 2320.0;
/// Bulk density of the metal component (kg/m³).
pub const DENSITY_METAL: f64 = 5500.0;

/// Temperature (K) around which the composition odds pivot.
const PIVOT_TEMPERATURE_K: f64 = 340.0;
/// Above this temperature a gas-branch planet is pure gas.
const GAS_ONLY_TEMPERATURE_K: f64 = 303.0;
/// Floor applied to each odds term before normalization, so a degenerate
/// total can never divide the draw by ~zero.
const MIN_ODDS: f64 = 1e-4;

/// Channel (off the planet seed) for the composition draws.
const COMPOSITION_CHANNEL: i32 = 1;

/// Fractional material breakdown of a planet.
///
/// Invariant: all fractions in `[0, 1]`, summing to 1 within 1e-4.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanetComposition {
    /// Gas fraction.
    pub gas: f64,
    /// Liquid fraction.
    pub liquid: f64,
    /// Silicate fraction.
    pub silicate: f64,
    /// Metal fraction.
    pub metal: f64,
}

impl PlanetComposition {
    /// Normalization tolerance.
    pub const EPSILON: f64 = 1e-4;

    /// Sum of all fractions.
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.gas + self.liquid + self.silicate + self.metal
    }

    /// Whether the fractions are in range and sum to 1 within tolerance.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let in_range = [self.gas, self.liquid, self.silicate, self.metal]
            .iter()
            .all(|f| (0.0..=1.0).contains(f));
        in_range && (self.total() - 1.0).abs() <= Self::EPSILON
    }
}

/// Coarse label of the dominant material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompositionClass {
    /// Mostly gas.
    Gaseous,
    /// Liquid-dominated surface.
    Aqueous,
    /// Rock-dominated, silicates over metals.
    Silicic,
    /// Rock-dominated, metals over silicates.
    Metallic,
}

impl std::fmt::Display for CompositionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Gaseous => "Gaseous",
            Self::Aqueous => "Aqueous",
            Self::Silicic => "Silicic",
            Self::Metallic => "Metallic",
        };
        f.write_str(label)
    }
}

/// One fully derived planet.
///
/// Immutable once computed; owned by the system that generated it and
/// regenerated on demand, never incrementally mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetRecord {
    /// 1-based position in the system, increasing with distance.
    pub order_in_system: u32,
    /// The planet's own seed.
    pub seed: Seed,
    /// Mass in Earth masses.
    pub mass_earth: f64,
    /// Orbital semi-major axis in AU.
    pub orbital_distance_au: f64,
    /// Material breakdown.
    pub composition: PlanetComposition,
    /// Coarse composition label.
    pub composition_class: CompositionClass,
    /// Bulk density in kg/m³.
    pub density: f64,
    /// Radius in Earth radii.
    pub radius_earth: f64,
    /// Surface gravity in m/s².
    pub surface_gravity: f64,
    /// Escape velocity in m/s.
    pub escape_velocity: f64,
    /// Blackbody equilibrium temperature in K.
    pub equilibrium_temperature_k: f64,
    /// Orbital period in Julian years.
    pub orbital_period_years: f64,
    /// Fraction of a full orbit completed at epoch, in `[0, 1)`.
    pub true_anomaly: f64,
}

/// Blackbody equilibrium temperature at `distance_au` from a star of
/// `luminosity_solar` luminosities.
///
/// Incident flux `I = L / (4π d²)`, then `T = (I·albedo / 4σ)^¼`. No
/// greenhouse term: Earth's orbit around a solar twin comes out near 252 K.
///
/// # Errors
///
/// `InvalidArgument` for non-positive distance or luminosity.
pub fn equilibrium_temperature(distance_au: f64, luminosity_solar: f64) -> PlanetaryResult<f64> {
    let distance_m = require_positive("distance_au", distance_au)? * AU_M;
    let luminosity_w = require_positive("luminosity_solar", luminosity_solar)? * SOLAR_LUMINOSITY_W;

    let flux = luminosity_w / (4.0 * std::f64::consts::PI * distance_m * distance_m);
    Ok((flux * ALBEDO_FACTOR / (4.0 * STEFAN_BOLTZMANN)).powf(0.25))
}

/// Draws a composition for a planet of `mass_earth` at `temperature_k`.
///
/// Three odds terms compete: gas giants (favored by mass, peaking near the
/// 340 K pivot), water worlds (only below the pivot), and rocky worlds
/// (strongest near the pivot, floor 0.9 above it). Each term is floored at
/// a small ε before normalization so the total can never degenerate. A
/// uniform draw picks the branch; the branch then splits the remaining
/// fraction among its materials.
///
/// # Errors
///
/// `InvalidArgument` for non-positive mass or negative temperature.
pub fn classify_composition(
    seed: Seed,
    temperature_k: f64,
    mass_earth: f64,
) -> PlanetaryResult<(PlanetComposition, CompositionClass)> {
    let t = require_non_negative("temperature_k", temperature_k)?;
    let mass = require_positive("mass_earth", mass_earth)?;

    let mut stream = SampleStream::new(seed.derive(COMPOSITION_CHANNEL));

    let gas_base = if t > PIVOT_TEMPERATURE_K {
        0.05
    } else {
        0.1 * ((t - PIVOT_TEMPERATURE_K) / 50.0 + 1.0)
    };
    let gas_odds = (gas_base * (mass / 3.0)).max(MIN_ODDS);

    let water_odds = if t > PIVOT_TEMPERATURE_K {
        MIN_ODDS
    } else {
        (0.1 * ((t - PIVOT_TEMPERATURE_K) / 30.0 + 1.0)).max(MIN_ODDS)
    };

    let rocky_odds = if t < PIVOT_TEMPERATURE_K {
        (0.9 / ((t - PIVOT_TEMPERATURE_K).abs() / 30.0 + 1.0)).max(MIN_ODDS)
    } else {
        0.9
    };

    let total = gas_odds + water_odds + rocky_odds;
    let draw = stream.uniform();

    if draw < gas_odds / total {
        let gas = if t > GAS_ONLY_TEMPERATURE_K {
            1.0
        } else {
            stream.gaussian_bounded(100.0, 3.0, 25.0, 100.0) / 100.0
        };
        let composition = PlanetComposition {
            gas,
            liquid: 1.0 - gas,
            silicate: 0.0,
            metal: 0.0,
        };
        Ok((composition, CompositionClass::Gaseous))
    } else if draw < (gas_odds + water_odds) / total {
        let liquid = stream.uniform();
        let silicate = (1.0 - liquid) * stream.uniform();
        let metal = (1.0 - liquid - silicate).max(0.0);
        let composition = PlanetComposition {
            gas: 0.0,
            liquid,
            silicate,
            metal,
        };
        Ok((composition, CompositionClass::Aqueous))
    } else {
        let silicate = stream.gaussian_bounded(50.0, 50.0, 0.0, 100.0) / 100.0;
        let composition = PlanetComposition {
            gas: 0.0,
            liquid: 0.0,
            silicate,
            metal: 1.0 - silicate,
        };
        let class = if composition.silicate > composition.metal {
            CompositionClass::Silicic
        } else {
            CompositionClass::Metallic
        };
        Ok((composition, class))
    }
}

/// Composition-weighted bulk density in kg/m³.
///
/// # Errors
///
/// `InvalidArgument` when the composition is not normalized.
pub fn bulk_density(composition: &PlanetComposition) -> PlanetaryResult<f64> {
    if !composition.is_normalized() {
        return Err(crate::error::PlanetaryError::InvalidArgument {
            name: "composition_total",
            value: composition.total(),
        });
    }
    Ok(composition.gas * DENSITY_GAS
        + composition.liquid * DENSITY_LIQUID
        + composition.silicate * DENSITY_SILICATE
        + composition.metal * DENSITY_METAL)
}

/// Radius in Earth radii of a planet of `mass_earth` at `density` kg/m³.
///
/// Inverts the sphere volume: `r = (m / ρ / (4/3 π))^⅓`.
///
/// # Errors
///
/// `InvalidArgument` for non-positive mass or density.
pub fn radius_from_mass_and_density(mass_earth: f64, density: f64) -> PlanetaryResult<f64> {
    let mass_kg = require_positive("mass_earth", mass_earth)? * EARTH_MASS_KG;
    let density = require_positive("density", density)?;

    let volume = mass_kg / density;
    let radius_m = (volume / (4.0 / 3.0 * std::f64::consts::PI)).powf(1.0 / 3.0);
    Ok(radius_m / EARTH_RADIUS_M)
}

/// Surface gravity in m/s² of a planet of `mass_earth` and `radius_earth`.
///
/// # Errors
///
/// `InvalidArgument` for non-positive mass or radius.
pub fn surface_gravity(mass_earth: f64, radius_earth: f64) -> PlanetaryResult<f64> {
    let mass_kg = require_positive("mass_earth", mass_earth)? * EARTH_MASS_KG;
    let radius_m = require_positive("radius_earth", radius_earth)? * EARTH_RADIUS_M;
    Ok(GRAVITATIONAL_CONSTANT * mass_kg / (radius_m * radius_m))
}

/// Escape velocity in m/s from the surface of a planet.
///
/// # Errors
///
/// `InvalidArgument` for non-positive mass or radius.
pub fn escape_velocity(mass_earth: f64, radius_earth: f64) -> PlanetaryResult<f64> {
    let mass_kg = require_positive("mass_earth", mass_earth)? * EARTH_MASS_KG;
    let radius_m = require_positive("radius_earth", radius_earth)? * EARTH_RADIUS_M;
    Ok((2.0 * GRAVITATIONAL_CONSTANT * mass_kg / radius_m).sqrt())
}

/// Orbital period in Julian years via Kepler's third law.
///
/// `T = 2π √(a³ / (G M))` with the semi-major axis in AU and the star mass
/// in solar masses.
///
/// # Errors
///
/// `InvalidArgument` for non-positive distance or star mass.
pub fn orbital_period(distance_au: f64, star_mass_solar: f64) -> PlanetaryResult<f64> {
    let a = require_positive("distance_au", distance_au)? * AU_M;
    let m = require_positive("star_mass_solar", star_mass_solar)? * SOLAR_MASS_KG;

    let seconds =
        2.0 * std::f64::consts::PI * (a.powi(3) / (GRAVITATIONAL_CONSTANT * m)).sqrt();
    Ok(seconds / SECONDS_PER_YEAR)
}

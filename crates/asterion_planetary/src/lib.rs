//! # ASTERION Planetary Systems
//!
//! Deterministic derivation of a star's planetary system: how many worlds,
//! how massive, how far out, and what each one is physically like.
//!
//! ## Pipeline
//!
//! 1. [`system`]: orbit-spacing law, planetary-to-stellar mass ratio, mass
//!    sequence against a depleting budget, distance sequence
//! 2. [`planet`]: equilibrium temperature, composition, density, radius,
//!    surface gravity, escape velocity, orbital period
//! 3. [`orbit`]: angular position along the orbit at a given elapsed time
//!
//! Every step is a pure function of (seed, stellar parameters); the same
//! star record always yields the same planets.
//!
//! ## Example
//!
//! ```rust,ignore
//! use asterion_planetary::generate_system;
//!
//! let planets = generate_system(&star)?;
//! for planet in &planets {
//!     println!("#{} {:.2} AU {:.0} K", planet.order_in_system,
//!         planet.orbital_distance_au, planet.equilibrium_temperature_k);
//! }
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod orbit;
pub mod planet;
pub mod system;

pub use error::{PlanetaryError, PlanetaryResult};
pub use orbit::angle_at_time;
pub use planet::{CompositionClass, PlanetComposition, PlanetRecord};
pub use system::{generate_system, OrbitSpacing};

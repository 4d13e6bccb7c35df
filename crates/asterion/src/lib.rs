//! # ASTERION
//!
//! A deterministic, seed-derived procedural universe: an infinite field of
//! star systems in on-demand chunks, each star carrying a class, mass,
//! luminosity, color, and a planetary system whose physical properties are
//! derived analytically from seeds and stellar parameters.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                       ASTERION GENERATOR                         │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  asterion_random     Seed derivation + deterministic sampling    │
//! │        │                                                         │
//! │  asterion_stellar    Class catalog → stars → chunk lifecycle     │
//! │        │                                                         │
//! │  asterion_planetary  Orbit spacing → masses → planet physics     │
//! │        │                                                         │
//! │  asterion (this)     Config, Universe handle, logging            │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The presentation and save layers live outside this workspace; they call
//! [`Universe`] and display what it returns. The generator itself persists
//! nothing: given (world seed, chunk coordinate, elapsed days) it
//! reproduces all derived state.
//!
//! ## Example
//!
//! ```rust
//! use asterion::{ChunkCoord, Universe};
//!
//! let universe = Universe::with_seed(42);
//! let stars = universe.generate_chunk(ChunkCoord::new(0, 0));
//! let planets = universe.generate_system(&stars[0]).unwrap();
//! let angle = asterion::recompute_planet_position(&planets[0], 120.5).unwrap();
//! assert!((0.0..360.0).contains(&angle));
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;

use std::sync::Arc;

use tracing::{debug, info};

use asterion_planetary::orbit::angle_at_time;
use asterion_random::Seed;

pub use asterion_planetary::{
    generate_system as derive_system, CompositionClass, PlanetComposition, PlanetRecord,
};
pub use asterion_stellar::{
    ChunkCoord, ChunkStats, Rgb, StarClass, StarClassTable, StarRecord,
};
pub use config::UniverseConfig;
pub use error::{UniverseError, UniverseResult};

use asterion_stellar::{ChunkManager, StarGenerator};

/// One universe, ready to materialize chunks and systems on demand.
///
/// All state is explicit: the world seed and grid parameters come from the
/// [`UniverseConfig`], the spectral catalog from the [`StarClassTable`].
/// There is no global "current universe".
pub struct Universe {
    config: UniverseConfig,
    manager: ChunkManager,
}

impl Universe {
    /// Creates a universe from a configuration and a class catalog.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for bad grid parameters; catalog errors pass through
    /// from [`StarClassTable`].
    pub fn new(config: UniverseConfig, table: StarClassTable) -> UniverseResult<Self> {
        config.validate()?;
        let generator = StarGenerator::new(
            Seed::new(config.world_seed),
            config.chunk_size,
            config.stars_per_chunk,
            table,
        );
        info!(
            world_seed = config.world_seed,
            chunk_size = config.chunk_size,
            stars_per_chunk = config.stars_per_chunk,
            "universe created"
        );
        Ok(Self {
            config,
            manager: ChunkManager::new(generator),
        })
    }

    /// Creates a universe with default grid parameters and the built-in
    /// catalog.
    #[must_use]
    pub fn with_seed(world_seed: i32) -> Self {
        let config = UniverseConfig {
            world_seed,
            ..UniverseConfig::default()
        };
        match Self::new(config, StarClassTable::builtin()) {
            Ok(universe) => universe,
            Err(_) => unreachable!("default configuration is valid"),
        }
    }

    /// The configuration this universe was built with.
    #[must_use]
    pub const fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Materializes the chunk at `coord` (no-op when already loaded) and
    /// returns its stars.
    #[must_use]
    pub fn generate_chunk(&self, coord: ChunkCoord) -> Arc<Vec<StarRecord>> {
        debug!(x = coord.x, y = coord.y, "chunk requested");
        self.manager.ensure_loaded(coord)
    }

    /// Unloads the chunk at `coord`, discarding its stars. Idempotent.
    pub fn unload_chunk(&self, coord: ChunkCoord) {
        debug!(x = coord.x, y = coord.y, "chunk unloaded");
        self.manager.unload(coord);
    }

    /// Unloads every loaded chunk.
    pub fn unload_all(&self) {
        self.manager.unload_all();
    }

    /// Loads the `(2·radius + 1)²` chunks around a world position, the way
    /// an observer crossing chunk boundaries keeps its neighborhood warm.
    pub fn ensure_loaded_around(&self, x: f64, y: f64, radius: i32) {
        self.manager.ensure_loaded_around(x, y, radius);
    }

    /// Whether the chunk at `coord` is currently loaded.
    #[must_use]
    pub fn is_chunk_loaded(&self, coord: ChunkCoord) -> bool {
        self.manager.is_loaded(coord)
    }

    /// Number of currently loaded chunks.
    #[must_use]
    pub fn loaded_chunk_count(&self) -> usize {
        self.manager.loaded_count()
    }

    /// Generation/unload counters since construction.
    #[must_use]
    pub fn stats(&self) -> ChunkStats {
        self.manager.stats()
    }

    /// Derives the planetary system of a star.
    ///
    /// # Errors
    ///
    /// Planetary errors pass through (a record with non-positive mass, size,
    /// or luminosity violates the caller contract).
    pub fn generate_system(&self, star: &StarRecord) -> UniverseResult<Vec<PlanetRecord>> {
        debug!(
            system_seed = star.system_seed.value(),
            planet_count = star.planet_count,
            "system requested"
        );
        Ok(derive_system(star)?)
    }
}

/// Current angular position of a planet, in degrees from its epoch
/// position.
///
/// Adds the planet's epoch true anomaly to the linear phase of
/// `elapsed_days`, wrapped to `[0, 360)`.
///
/// # Errors
///
/// `InvalidArgument` for a record with a non-positive orbital period.
pub fn recompute_planet_position(planet: &PlanetRecord, elapsed_days: f64) -> UniverseResult<f64> {
    let phase = angle_at_time(planet.orbital_period_years, elapsed_days)?;
    Ok((planet.true_anomaly * 360.0 + phase).rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_seed_round_trip() {
        let universe = Universe::with_seed(42);
        assert_eq!(universe.config().world_seed, 42);
        assert_eq!(universe.config().chunk_size, 100);
    }

    #[test]
    fn test_generate_chunk_star_count() {
        let universe = Universe::with_seed(42);
        let stars = universe.generate_chunk(ChunkCoord::new(0, 0));
        assert_eq!(stars.len(), 10);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = UniverseConfig {
            chunk_size: -1,
            ..UniverseConfig::default()
        };
        assert!(Universe::new(config, StarClassTable::builtin()).is_err());
    }

    #[test]
    fn test_recompute_position_offsets_epoch() {
        let universe = Universe::with_seed(7);
        let stars = universe.generate_chunk(ChunkCoord::new(0, 0));
        let planets = universe.generate_system(&stars[0]).unwrap();
        let planet = &planets[0];

        let at_epoch = recompute_planet_position(planet, 0.0).unwrap();
        assert!((at_epoch - planet.true_anomaly * 360.0).abs() < 1e-9);

        let later = recompute_planet_position(planet, 10.0).unwrap();
        assert!((0.0..360.0).contains(&later));
    }
}

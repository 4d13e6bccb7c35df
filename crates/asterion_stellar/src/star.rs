//! # Star Generation
//!
//! Produces the stars of one chunk from the chunk's derived seed.
//!
//! ## Draw Order
//!
//! One chunk-local stream drives, per star and in this order: position x,
//! position y, class pick, mass. The order is part of the reproducibility
//! contract; reordering the draws changes every star in the chunk.
//!
//! Planet count is drawn from the star's own system seed (not the chunk
//! stream) so that adding or removing stars from a chunk never shifts the
//! planets of the systems around them.

use asterion_random::{SampleStream, Seed};

use crate::class::{Rgb, StarClass, StarClassTable};

/// Channel (off the system seed) for the planet-count draw.
const PLANET_COUNT_CHANNEL: i32 = 1;

/// A 2D world-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Vec2 {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One generated star.
///
/// Owned by the chunk that spawned it and dropped when that chunk unloads;
/// regenerating the chunk reproduces the record bit for bit.
#[derive(Clone, Debug, PartialEq)]
pub struct StarRecord {
    /// World-space position.
    pub position: Vec2,
    /// Name of the spectral class the star was drawn from.
    pub class_name: String,
    /// Mass in solar masses.
    pub mass: f64,
    /// Luminosity in solar luminosities.
    pub luminosity: f64,
    /// Size in map scale units.
    pub size: f64,
    /// Display color.
    pub color: Rgb,
    /// Seed of the star's planetary system.
    pub system_seed: Seed,
    /// Number of planets the system will generate.
    pub planet_count: u32,
}

/// Linear interpolation.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `value` within `[a, b]`, or 0 when the range is empty.
#[inline]
fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < f64::EPSILON {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Generates the stars of a chunk from the world seed.
pub struct StarGenerator {
    /// Root seed of the universe.
    world_seed: Seed,
    /// Chunk side length in world units.
    chunk_size: i32,
    /// Stars generated per chunk.
    stars_per_chunk: u32,
    /// The class catalog (validated non-empty at construction).
    table: StarClassTable,
}

impl StarGenerator {
    /// Mean of the planet-count distribution.
    const PLANET_COUNT_MEAN: f64 = 7.0;
    /// Standard deviation of the planet-count distribution.
    const PLANET_COUNT_STD_DEV: f64 = 5.0;
    /// Minimum number of planets per system.
    const PLANET_COUNT_MIN: f64 = 3.0;
    /// Base ceiling of the planet-count distribution.
    const PLANET_COUNT_CEILING: f64 = 10.0;

    /// Creates a new generator.
    #[must_use]
    pub const fn new(
        world_seed: Seed,
        chunk_size: i32,
        stars_per_chunk: u32,
        table: StarClassTable,
    ) -> Self {
        Self {
            world_seed,
            chunk_size,
            stars_per_chunk,
            table,
        }
    }

    /// The chunk side length in world units.
    #[must_use]
    pub const fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// The number of stars generated per chunk.
    #[must_use]
    pub const fn stars_per_chunk(&self) -> u32 {
        self.stars_per_chunk
    }

    /// The root seed of the universe.
    #[must_use]
    pub const fn world_seed(&self) -> Seed {
        self.world_seed
    }

    /// The class catalog.
    #[must_use]
    pub const fn table(&self) -> &StarClassTable {
        &self.table
    }

    /// Generates all stars of the chunk at `(chunk_x, chunk_y)`.
    ///
    /// Deterministic: the same world seed and coordinate always produce the
    /// same records in the same order.
    #[must_use]
    pub fn generate_chunk(&self, chunk_x: i32, chunk_y: i32) -> Vec<StarRecord> {
        let chunk_seed = Seed::for_chunk(self.world_seed, chunk_x, chunk_y);
        let mut stream = SampleStream::new(chunk_seed);
        let size = f64::from(self.chunk_size);
        let origin_x = f64::from(chunk_x) * size;
        let origin_y = f64::from(chunk_y) * size;

        let mut stars = Vec::with_capacity(self.stars_per_chunk as usize);
        for index in 0..self.stars_per_chunk {
            let position = Vec2::new(
                origin_x + stream.uniform() * size,
                origin_y + stream.uniform() * size,
            );
            let class = self.table.pick(&mut stream);
            let mass = stream.uniform_in(class.min_mass, class.max_mass);

            #[allow(clippy::cast_possible_wrap)]
            let system_seed = Seed::for_star(self.world_seed, chunk_x, chunk_y, index as i32);

            stars.push(Self::assemble(position, class, mass, system_seed));
        }
        stars
    }

    /// Builds one record from its class, mass, and system seed.
    fn assemble(position: Vec2, class: &StarClass, mass: f64, system_seed: Seed) -> StarRecord {
        let t = inverse_lerp(class.min_mass, class.max_mass, mass);
        let size = lerp(class.min_size, class.max_size, t);
        let luminosity = lerp(class.min_luminosity, class.max_luminosity, t);
        #[allow(clippy::cast_possible_truncation)]
        let color = class.min_color.lerp(class.max_color, t as f32);
        let planet_count = Self::planet_count(system_seed, mass);

        StarRecord {
            position,
            class_name: class.name.clone(),
            mass,
            luminosity,
            size,
            color,
            system_seed,
            planet_count,
        }
    }

    /// Draws the planet count for a star of the given mass.
    ///
    /// Bounded Gaussian around 7 with a floor of 3; massive stars get a
    /// ceiling that grows with the log of their mass.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn planet_count(system_seed: Seed, mass: f64) -> u32 {
        let ceiling = if mass > 1.0 {
            Self::PLANET_COUNT_CEILING * (1.0 + mass.log10())
        } else {
            Self::PLANET_COUNT_CEILING
        };
        let mut stream = SampleStream::new(system_seed.derive(PLANET_COUNT_CHANNEL));
        let count = stream.gaussian_bounded(
            Self::PLANET_COUNT_MEAN,
            Self::PLANET_COUNT_STD_DEV,
            Self::PLANET_COUNT_MIN,
            ceiling,
        );
        count as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::StarClassTable;

    fn generator() -> StarGenerator {
        StarGenerator::new(Seed::new(42), 100, 5, StarClassTable::builtin())
    }

    #[test]
    fn test_chunk_generation_determinism() {
        let gen1 = generator();
        let gen2 = generator();
        let a = gen1.generate_chunk(0, 0);
        let b = gen2.generate_chunk(0, 0);
        assert_eq!(a.len(), 5);
        assert_eq!(a, b, "same seed and coordinate must reproduce the chunk");
    }

    #[test]
    fn test_positions_inside_chunk_square() {
        let gen = generator();
        for (cx, cy) in [(0, 0), (3, -2), (-5, -5), (100, 7)] {
            for star in gen.generate_chunk(cx, cy) {
                let x0 = f64::from(cx) * 100.0;
                let y0 = f64::from(cy) * 100.0;
                assert!(star.position.x >= x0 && star.position.x < x0 + 100.0);
                assert!(star.position.y >= y0 && star.position.y < y0 + 100.0);
            }
        }
    }

    #[test]
    fn test_mass_within_class_range() {
        let gen = StarGenerator::new(Seed::new(9), 100, 50, StarClassTable::builtin());
        let table = StarClassTable::builtin();
        for star in gen.generate_chunk(0, 0) {
            let class = table
                .classes()
                .iter()
                .find(|c| c.name == star.class_name)
                .expect("class must exist in the catalog");
            assert!(star.mass >= class.min_mass && star.mass <= class.max_mass);
            assert!(star.luminosity >= class.min_luminosity);
            assert!(star.luminosity <= class.max_luminosity);
            assert!(star.size >= class.min_size && star.size <= class.max_size);
        }
    }

    #[test]
    fn test_planet_count_bounds() {
        for raw in 0..200 {
            let seed = Seed::new(raw * 7919);
            let count = StarGenerator::planet_count(seed, 0.5);
            assert!((3..=10).contains(&count), "count {count} out of [3, 10]");
        }
    }

    #[test]
    fn test_planet_count_ceiling_grows_with_mass() {
        // A 100-solar-mass star may host up to 10*(1+log10(100)) = 30 planets.
        for raw in 0..200 {
            let seed = Seed::new(raw * 104_729);
            let count = StarGenerator::planet_count(seed, 100.0);
            assert!((3..=30).contains(&count), "count {count} out of [3, 30]");
        }
    }

    #[test]
    fn test_distinct_chunks_differ() {
        let gen = generator();
        assert_ne!(gen.generate_chunk(0, 0), gen.generate_chunk(0, 1));
    }

    #[test]
    fn test_distinct_world_seeds_differ() {
        let a = StarGenerator::new(Seed::new(1), 100, 5, StarClassTable::builtin());
        let b = StarGenerator::new(Seed::new(2), 100, 5, StarClassTable::builtin());
        assert_ne!(a.generate_chunk(0, 0), b.generate_chunk(0, 0));
    }

    #[test]
    fn test_system_seeds_unique_within_chunk() {
        let gen = StarGenerator::new(Seed::new(42), 100, 32, StarClassTable::builtin());
        let stars = gen.generate_chunk(4, -9);
        let mut seeds: Vec<i32> = stars.iter().map(|s| s.system_seed.value()).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), stars.len(), "system seeds collided in one chunk");
    }
}

//! # ASTERION Star Field Generation
//!
//! Deterministic, chunked generation of an infinite star field.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same world seed always produces the same stars
//! 2. **Chunked**: the universe is materialized in fixed-size chunks
//! 3. **Streamable**: chunks are generated and discarded independently
//! 4. **Reproducible after unload**: regenerating a chunk yields records
//!    bit-identical to the first generation
//!
//! ## Core Components
//!
//! - [`StarClassTable`]: spectral-class catalog with weighted selection
//! - [`StarGenerator`]: produces the stars of one chunk
//! - [`ChunkManager`]: on-demand chunk lifecycle (load/unload)
//!
//! ## Example
//!
//! ```rust,ignore
//! use asterion_random::Seed;
//! use asterion_stellar::{ChunkCoord, ChunkManager, StarClassTable, StarGenerator};
//!
//! let table = StarClassTable::builtin();
//! let generator = StarGenerator::new(Seed::new(42), 100, 10, table);
//! let manager = ChunkManager::new(generator);
//!
//! let stars = manager.ensure_loaded(ChunkCoord::new(0, 0));
//! assert!(!stars.is_empty());
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chunk;
pub mod class;
pub mod error;
pub mod star;

pub use chunk::{ChunkCoord, ChunkManager, ChunkState, ChunkStats};
pub use class::{Rgb, StarClass, StarClassTable};
pub use error::{StellarError, StellarResult};
pub use star::{StarGenerator, StarRecord, Vec2};

//! # ASTERION Deterministic Randomness
//!
//! Seeds and sampling for reproducible universe generation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same seed and call sequence always produce the
//!    same values, on any platform
//! 2. **Hierarchical**: every entity derives child seeds from its parent;
//!    nothing shares a stream with anything unrelated
//! 3. **Bounded**: every rejection loop has an explicit cap and a documented
//!    fallback
//!
//! ## Core Components
//!
//! - [`Seed`]: 32-bit seed with stable chunk/star/channel derivation
//! - [`SampleStream`]: seeded uniform and bounded-Gaussian draws
//!
//! ## Example
//!
//! ```rust
//! use asterion_random::{SampleStream, Seed};
//!
//! let seed = Seed::new(42);
//! let mut stream = SampleStream::new(seed.derive(1));
//! let mass = stream.gaussian_bounded(7.0, 5.0, 3.0, 10.0);
//! assert!((3.0..=10.0).contains(&mass));
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod sampling;
pub mod seed;

pub use sampling::{SampleStream, MAX_REJECTIONS};
pub use seed::Seed;

//! # Generator Configuration
//!
//! Explicit configuration passed into the generator at construction; there
//! is no process-wide state. Loaded once from TOML or built from defaults.
//!
//! ## File Format
//!
//! ```toml
//! world_seed = 42
//! chunk_size = 100
//! stars_per_chunk = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{UniverseError, UniverseResult};

/// Configuration of one universe generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Root seed the whole universe derives from.
    pub world_seed: i32,
    /// Chunk side length in world units. Shared constant: callers mapping
    /// positions to chunks must use this same value.
    pub chunk_size: i32,
    /// Stars generated per chunk.
    pub stars_per_chunk: u32,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            world_seed: 0,
            chunk_size: 100,
            stars_per_chunk: 10,
        }
    }
}

impl UniverseConfig {
    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for a non-positive chunk size or star count.
    pub fn validate(&self) -> UniverseResult<()> {
        if self.chunk_size <= 0 {
            return Err(UniverseError::InvalidConfig(format!(
                "chunk_size must be positive, got {}",
                self.chunk_size
            )));
        }
        if self.stars_per_chunk == 0 {
            return Err(UniverseError::InvalidConfig(
                "stars_per_chunk must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Parse errors for malformed TOML plus the errors of
    /// [`UniverseConfig::validate`].
    pub fn from_toml_str(text: &str) -> UniverseResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// I/O errors plus the errors of [`UniverseConfig::from_toml_str`].
    pub fn from_path(path: &Path) -> UniverseResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

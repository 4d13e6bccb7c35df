//! # Facade Error Types
//!
//! One error type over everything the generator can report.

use thiserror::Error;

use asterion_planetary::PlanetaryError;
use asterion_stellar::StellarError;

/// Errors surfaced through the [`crate::Universe`] facade.
#[derive(Error, Debug)]
pub enum UniverseError {
    /// Star catalog or star-field setup failed.
    #[error(transparent)]
    Stellar(#[from] StellarError),

    /// System generation or a property calculator rejected its input.
    #[error(transparent)]
    Planetary(#[from] PlanetaryError),

    /// The configuration parsed but its values are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Parsing a configuration file failed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for universe operations.
pub type UniverseResult<T> = Result<T, UniverseError>;

//! # Stellar Error Types
//!
//! All errors that can occur while building the catalog or generating stars.

use thiserror::Error;

/// Errors from catalog loading and star-field setup.
#[derive(Error, Debug)]
pub enum StellarError {
    /// The star class catalog has no entries.
    ///
    /// This is a configuration error: generation cannot proceed and the
    /// caller must fix the catalog rather than retry.
    #[error("star class catalog is empty")]
    EmptyClassTable,

    /// The catalog parsed but its contents are unusable.
    #[error("invalid star class catalog: {0}")]
    InvalidCatalog(String),

    /// Reading a catalog file failed.
    #[error("failed to read star class catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// Parsing a catalog file failed.
    #[error("failed to parse star class catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

/// Result type for stellar operations.
pub type StellarResult<T> = Result<T, StellarError>;

//! # Star Class Catalog
//!
//! Spectral classes bounding the mass, size, luminosity, and color of the
//! stars drawn from them, each with a relative likelihood weight.
//!
//! The catalog is loaded once (TOML file or the built-in table) and never
//! mutated. Selection is a cumulative-likelihood walk over the precomputed
//! total, the same shape as a loot-table draw.
//!
//! ## Catalog Format
//!
//! ```toml
//! [[classes]]
//! name = "M"
//! likelihood = 76.45
//! min_mass = 0.08
//! max_mass = 0.45
//! min_size = 8.0
//! max_size = 60.0
//! min_luminosity = 0.0001
//! max_luminosity = 0.08
//! min_color = { r = 1.0, g = 0.50, b = 0.35 }
//! max_color = { r = 1.0, g = 0.65, b = 0.45 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use asterion_random::SampleStream;

use crate::error::{StellarError, StellarResult};

/// An RGB color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    /// Creates a new color.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolates between two colors.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// One spectral class of the catalog.
///
/// Mass is in solar masses, luminosity in solar luminosities, size in the
/// map scale units shared with the orbit calculations (a G-class star sits
/// near the reference size of 86).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarClass {
    /// Class name, e.g. `"G"`.
    pub name: String,
    /// Relative likelihood weight (higher = more common).
    pub likelihood: f64,
    /// Lower mass bound (solar masses).
    pub min_mass: f64,
    /// Upper mass bound (solar masses).
    pub max_mass: f64,
    /// Lower size bound (scale units).
    pub min_size: f64,
    /// Upper size bound (scale units).
    pub max_size: f64,
    /// Lower luminosity bound (solar luminosities).
    pub min_luminosity: f64,
    /// Upper luminosity bound (solar luminosities).
    pub max_luminosity: f64,
    /// Color at the lower mass bound.
    pub min_color: Rgb,
    /// Color at the upper mass bound.
    pub max_color: Rgb,
}

/// On-disk catalog layout.
#[derive(Deserialize)]
struct CatalogFile {
    classes: Vec<StarClass>,
}

/// Immutable star class catalog with precomputed total likelihood.
#[derive(Clone, Debug)]
pub struct StarClassTable {
    classes: Vec<StarClass>,
    total_likelihood: f64,
}

impl StarClassTable {
    /// Builds a catalog from a list of classes.
    ///
    /// # Errors
    ///
    /// Returns [`StellarError::EmptyClassTable`] for an empty list and
    /// [`StellarError::InvalidCatalog`] for negative likelihoods, a zero
    /// likelihood total, or inverted min/max ranges.
    pub fn new(classes: Vec<StarClass>) -> StellarResult<Self> {
        if classes.is_empty() {
            return Err(StellarError::EmptyClassTable);
        }
        for class in &classes {
            if class.likelihood < 0.0 || !class.likelihood.is_finite() {
                return Err(StellarError::InvalidCatalog(format!(
                    "class {} has invalid likelihood {}",
                    class.name, class.likelihood
                )));
            }
            if class.min_mass > class.max_mass
                || class.min_size > class.max_size
                || class.min_luminosity > class.max_luminosity
            {
                return Err(StellarError::InvalidCatalog(format!(
                    "class {} has an inverted range",
                    class.name
                )));
            }
            if class.min_mass <= 0.0 {
                return Err(StellarError::InvalidCatalog(format!(
                    "class {} has non-positive mass bound {}",
                    class.name, class.min_mass
                )));
            }
        }
        let total_likelihood: f64 = classes.iter().map(|c| c.likelihood).sum();
        if total_likelihood <= 0.0 {
            return Err(StellarError::InvalidCatalog(
                "total likelihood is zero".to_owned(),
            ));
        }
        Ok(Self {
            classes,
            total_likelihood,
        })
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed TOML and the same validation
    /// errors as [`StarClassTable::new`].
    pub fn from_toml_str(text: &str) -> StellarResult<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::new(file.classes)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, plus the errors of
    /// [`StarClassTable::from_toml_str`].
    pub fn from_path(path: &Path) -> StellarResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The built-in catalog: the seven spectral classes with real-world
    /// relative abundances (M dwarfs dominate, O stars are vanishingly rare).
    #[must_use]
    pub fn builtin() -> Self {
        let classes = vec![
            StarClass {
                name: "M".to_owned(),
                likelihood: 76.45,
                min_mass: 0.08,
                max_mass: 0.45,
                min_size: 8.0,
                max_size: 60.0,
                min_luminosity: 0.0001,
                max_luminosity: 0.08,
                min_color: Rgb::new(1.0, 0.50, 0.35),
                max_color: Rgb::new(1.0, 0.65, 0.45),
            },
            StarClass {
                name: "K".to_owned(),
                likelihood: 12.1,
                min_mass: 0.45,
                max_mass: 0.8,
                min_size: 60.0,
                max_size: 75.0,
                min_luminosity: 0.08,
                max_luminosity: 0.6,
                min_color: Rgb::new(1.0, 0.70, 0.45),
                max_color: Rgb::new(1.0, 0.85, 0.60),
            },
            StarClass {
                name: "G".to_owned(),
                likelihood: 7.6,
                min_mass: 0.8,
                max_mass: 1.04,
                min_size: 75.0,
                max_size: 96.0,
                min_luminosity: 0.6,
                max_luminosity: 1.5,
                min_color: Rgb::new(1.0, 0.90, 0.70),
                max_color: Rgb::new(1.0, 1.0, 0.90),
            },
            StarClass {
                name: "F".to_owned(),
                likelihood: 3.0,
                min_mass: 1.04,
                max_mass: 1.4,
                min_size: 96.0,
                max_size: 120.0,
                min_luminosity: 1.5,
                max_luminosity: 5.0,
                min_color: Rgb::new(1.0, 0.97, 0.90),
                max_color: Rgb::new(1.0, 1.0, 1.0),
            },
            StarClass {
                name: "A".to_owned(),
                likelihood: 0.6,
                min_mass: 1.4,
                max_mass: 2.1,
                min_size: 120.0,
                max_size: 155.0,
                min_luminosity: 5.0,
                max_luminosity: 25.0,
                min_color: Rgb::new(0.95, 0.97, 1.0),
                max_color: Rgb::new(1.0, 1.0, 1.0),
            },
            StarClass {
                name: "B".to_owned(),
                likelihood: 0.13,
                min_mass: 2.1,
                max_mass: 16.0,
                min_size: 155.0,
                max_size: 450.0,
                min_luminosity: 25.0,
                max_luminosity: 30_000.0,
                min_color: Rgb::new(0.80, 0.87, 1.0),
                max_color: Rgb::new(0.92, 0.95, 1.0),
            },
            StarClass {
                name: "O".to_owned(),
                likelihood: 0.003,
                min_mass: 16.0,
                max_mass: 150.0,
                min_size: 450.0,
                max_size: 1000.0,
                min_luminosity: 30_000.0,
                max_luminosity: 1_000_000.0,
                min_color: Rgb::new(0.60, 0.74, 1.0),
                max_color: Rgb::new(0.75, 0.85, 1.0),
            },
        ];
        // The built-in table is a compile-time constant in spirit; it cannot
        // fail validation.
        match Self::new(classes) {
            Ok(table) => table,
            Err(_) => unreachable!("built-in catalog is valid"),
        }
    }

    /// All classes, in catalog order.
    #[must_use]
    pub fn classes(&self) -> &[StarClass] {
        &self.classes
    }

    /// Total of all likelihood weights.
    #[must_use]
    pub const fn total_likelihood(&self) -> f64 {
        self.total_likelihood
    }

    /// Draws a class with likelihood-weighted probability.
    ///
    /// Walks the classes accumulating weight until the draw is exceeded.
    /// If floating-point rounding leaves a residual past the last class,
    /// the last class is returned; the boundary never panics.
    #[must_use]
    pub fn pick(&self, stream: &mut SampleStream) -> &StarClass {
        let draw = stream.uniform() * self.total_likelihood;
        let mut accumulated = 0.0;
        for class in &self.classes {
            accumulated += class.likelihood;
            if draw < accumulated {
                return class;
            }
        }
        // Rounding residual: fall back to the last class.
        &self.classes[self.classes.len() - 1]
    }
}

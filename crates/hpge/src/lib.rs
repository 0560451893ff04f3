//! HPGe crystal geometry and germanium materials.
//!
//! Layout
//! - `config`: LEGEND metadata records (serde) and their validation.
//! - `profile`: per-family `(r, z)` revolution profiles with surface tags.
//! - `query`: volume, surface area, inside tests and surface distances on a profile.
//! - `materials`: natural/enriched germanium densities and a material registry.
//! - `detector`: a named crystal bound to a material, behind [`SolidGeometry`].
//!
//! Lengths are millimeters, angles degrees, densities g/cm³.

pub mod config;
pub mod detector;
pub mod error;
pub mod materials;
pub mod profile;
pub mod query;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use detector::{ClippedDetector, Detector, PlanarCut, SolidGeometry};
pub use error::{Error, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::config::{DetectorConfig, DetectorMetadata};
    pub use crate::detector::{ClippedDetector, Detector, PlanarCut, SolidGeometry};
    pub use crate::materials::{DensityModel, Material, MaterialRegistry};
    pub use crate::profile::{Family, Profile, SurfaceTag};
    pub use crate::query::DEFAULT_TOL;
    pub use crate::units::{CubicMillimeters, Grams, GramsPerCm3, SquareMillimeters};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

//! Revolution profiles of HPGe crystals.
//!
//! Purpose
//! - Turn a [`DetectorConfig`] into an ordered `(r, z)` polygon plus one
//!   surface tag per edge, ready to be swept 2π about the z-axis by an
//!   external solid builder.
//!
//! Conventions
//! - Units are mm; taper angles are degrees.
//! - Profiles start on the axis, run counter-clockwise and end on the axis.
//! - No validation happens here; see [`DetectorConfig::validate`].
//!
//! Families are a closed enum; a new crystal type is a new variant plus a
//! builder in `builders.rs`.

mod builders;
mod types;

pub use types::{Profile, SurfaceTag};

use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;

/// Detector family, keyed by the metadata `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Inverted-coaxial point contact (ICPC).
    #[serde(rename = "icpc")]
    InvertedCoax,
    /// Semi-coaxial.
    #[serde(rename = "coax")]
    SemiCoax,
    /// Broad-energy / p-type point contact.
    #[serde(rename = "bege", alias = "ppc")]
    Bege,
}

impl Family {
    /// Decode the revolution profile for this family.
    pub fn decode_profile(self, config: &DetectorConfig) -> Profile {
        let profile = match self {
            Family::InvertedCoax => builders::inverted_coax(config),
            Family::SemiCoax => builders::semi_coax(config),
            Family::Bege => builders::bege(config),
        };
        tracing::debug!(
            family = ?self,
            vertices = profile.vertices.len(),
            "decoded profile"
        );
        profile
    }
}

#[cfg(test)]
mod tests;

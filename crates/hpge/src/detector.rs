//! Detector facade: a named crystal (family + geometry) bound to a material.
//!
//! Geometric queries go through [`SolidGeometry`]. Solids that are a plain
//! revolution of their profile answer every query; solids that are not (for
//! instance a crystal with a flat cut) report [`Error::UnsupportedShape`] for
//! point queries and volume, and fall back to the uncut profile for area.

use std::path::Path;
use std::sync::Arc;

use nalgebra::Vector3;
use serde::Serialize;
use tracing::warn;

use crate::config::{DetectorConfig, DetectorMetadata};
use crate::error::{Error, Result};
use crate::materials::{Material, MaterialRegistry};
use crate::profile::{Family, Profile, SurfaceTag};
use crate::query;
use crate::units::{CubicMillimeters, Grams, SquareMillimeters};

/// A solid that may or may not be the 2π revolution of an `(r, z)` profile.
pub trait SolidGeometry {
    fn name(&self) -> &str;

    fn material(&self) -> &Material;

    /// Profile the solid was built from, before any non-axisymmetric cut.
    fn base_profile(&self) -> Profile;

    /// `Some` only when the solid is exactly the revolution of its profile.
    fn revolution_profile(&self) -> Option<Profile>;

    fn volume(&self) -> Result<CubicMillimeters> {
        let profile = self.require_revolution("volume")?;
        Ok(query::volume(&profile))
    }

    fn mass(&self) -> Result<Grams> {
        Ok(self.volume()?.mass(self.material().density))
    }

    /// Area of the selected surfaces (all when `None`).
    ///
    /// For a cut solid this is the area of the uncut profile.
    fn surface_area(&self, surface_indices: Option<&[usize]>) -> Result<SquareMillimeters> {
        let profile = match self.revolution_profile() {
            Some(p) => p,
            None => {
                warn!(solid = self.name(), "the area is that of the solid without cut");
                self.base_profile()
            }
        };
        query::surface_area(&profile, surface_indices)
    }

    /// Area of every surface carrying `tag`.
    fn tagged_area(&self, tag: SurfaceTag) -> Result<SquareMillimeters> {
        let indices = self.base_profile().surface_indices(tag);
        self.surface_area(Some(&indices))
    }

    fn is_inside(&self, points: &[Vector3<f64>], tol: f64) -> Result<Vec<bool>> {
        let profile = self.require_revolution("is_inside")?;
        Ok(query::is_inside(&profile, points, tol))
    }

    fn distance_to_surface(
        &self,
        points: &[Vector3<f64>],
        surface_indices: Option<&[usize]>,
        tol: f64,
    ) -> Result<Vec<f64>> {
        let profile = self.require_revolution("distance_to_surface")?;
        query::distance_to_surface(&profile, points, surface_indices, tol)
    }

    #[doc(hidden)]
    fn require_revolution(&self, query: &'static str) -> Result<Profile> {
        self.revolution_profile()
            .ok_or_else(|| Error::UnsupportedShape {
                query,
                solid: self.name().to_owned(),
            })
    }
}

/// An axisymmetric HPGe crystal.
#[derive(Clone, Debug)]
pub struct Detector {
    pub name: String,
    pub family: Family,
    pub config: DetectorConfig,
    pub material: Arc<Material>,
}

impl Detector {
    pub fn new(
        name: impl Into<String>,
        family: Family,
        config: DetectorConfig,
        material: Arc<Material>,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            config,
            material,
        }
    }

    /// Build from metadata; enriched germanium when the production record
    /// states an enrichment, natural germanium otherwise.
    pub fn from_metadata(meta: &DetectorMetadata, registry: &mut MaterialRegistry) -> Result<Self> {
        let material = match meta.enrichment() {
            Some(f) => registry.enriched_germanium(f)?,
            None => registry.natural_germanium(),
        };
        Ok(Self::new(meta.name.clone(), meta.family, meta.geometry, material))
    }

    pub fn from_path<P: AsRef<Path>>(path: P, registry: &mut MaterialRegistry) -> Result<Self> {
        Self::from_metadata(&DetectorMetadata::from_path(path)?, registry)
    }

    /// Profile decoded from the current configuration.
    pub fn profile(&self) -> Profile {
        self.family.decode_profile(&self.config)
    }

    /// Summary of the physical properties, as reported by the CLI.
    pub fn properties(&self) -> Result<Properties> {
        let volume = self.volume()?;
        let surfaces = SurfaceTag::ALL
            .iter()
            .map(|&tag| Ok((tag, self.tagged_area(tag)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Properties {
            name: self.name.clone(),
            material: self.material.name.clone(),
            density: self.material.density.value(),
            volume_mm3: volume.value(),
            mass_g: volume.mass(self.material.density).value(),
            area_mm2: self.surface_area(None)?.value(),
            area_by_surface_mm2: surfaces.into_iter().map(|(t, a)| (t, a.value())).collect(),
        })
    }
}

impl SolidGeometry for Detector {
    fn name(&self) -> &str {
        &self.name
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn base_profile(&self) -> Profile {
        self.profile()
    }

    fn revolution_profile(&self) -> Option<Profile> {
        Some(self.profile())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Properties {
    pub name: String,
    pub material: String,
    /// g/cm³
    pub density: f64,
    pub volume_mm3: f64,
    pub mass_g: f64,
    pub area_mm2: f64,
    pub area_by_surface_mm2: Vec<(SurfaceTag, f64)>,
}

/// Half-space `normal · x > offset` removed from the crystal (mm).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarCut {
    pub normal: Vector3<f64>,
    pub offset: f64,
}

/// A crystal with a flat cut; no longer a solid of revolution.
#[derive(Clone, Debug)]
pub struct ClippedDetector {
    pub detector: Detector,
    pub cut: PlanarCut,
}

impl ClippedDetector {
    pub fn new(detector: Detector, cut: PlanarCut) -> Self {
        Self { detector, cut }
    }
}

impl SolidGeometry for ClippedDetector {
    fn name(&self) -> &str {
        &self.detector.name
    }

    fn material(&self) -> &Material {
        &self.detector.material
    }

    fn base_profile(&self) -> Profile {
        self.detector.profile()
    }

    fn revolution_profile(&self) -> Option<Profile> {
        None
    }
}

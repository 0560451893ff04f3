//! Caller-owned cache of germanium isotopes and materials.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::units::GramsPerCm3;

use super::density::{mixture_density, DensityModel, NATURAL_GE_DENSITY};
use super::isotopes::{isotope_mass, IsotopeMixture, GE_ISOTOPE_MASS, GE_Z};

/// Enrichment assumed when a detector does not state one.
pub const DEFAULT_GE76_FRACTION: f64 = 0.92;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Isotope {
    pub name: String,
    pub z: u32,
    pub n: u32,
    /// Molar mass, g/mol.
    pub a: f64,
}

/// A germanium material: isotope mixture plus density.
///
/// `isotopes` holds the registry's shared isotope records with their mole
/// fractions, in the mixture's order.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub symbol: String,
    pub mixture: IsotopeMixture,
    pub isotopes: Vec<(Arc<Isotope>, f64)>,
    pub density: GramsPerCm3,
}

/// Materials are built once per name and shared afterwards.
///
/// The registry is a plain value owned by the caller; there is no global
/// instance.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    model: DensityModel,
    isotopes: HashMap<String, Arc<Isotope>>,
    materials: HashMap<String, Arc<Material>>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose enriched materials use `model` for the number density.
    pub fn with_model(model: DensityModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn model(&self) -> DensityModel {
        self.model
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Material>> {
        self.materials.get(name).cloned()
    }

    /// Shared record of germanium isotope `n`, registered on first use.
    pub fn isotope(&mut self, n: u32) -> Option<Arc<Isotope>> {
        let a = isotope_mass(n)?;
        let name = format!("Ge{n}");
        let iso = self.isotopes.entry(name.clone()).or_insert_with(|| {
            Arc::new(Isotope {
                name,
                z: GE_Z,
                n,
                a,
            })
        });
        Some(iso.clone())
    }

    /// The stable germanium isotopes `Ge70 … Ge76`.
    pub fn germanium_isotopes(&mut self) -> Vec<Arc<Isotope>> {
        GE_ISOTOPE_MASS
            .iter()
            .filter_map(|&(n, _)| self.isotope(n))
            .collect()
    }

    fn register(
        &mut self,
        name: String,
        symbol: String,
        mixture: IsotopeMixture,
        density: GramsPerCm3,
    ) -> Arc<Material> {
        // Mixtures only hold stable isotopes, so every lookup succeeds.
        let isotopes = mixture
            .iter()
            .filter_map(|(n, frac)| Some((self.isotope(n)?, frac)))
            .collect();
        debug!(%name, density = density.value(), "registering material");
        let mat = Arc::new(Material {
            name: name.clone(),
            symbol,
            mixture,
            isotopes,
            density,
        });
        self.materials.insert(name, mat.clone());
        mat
    }

    /// Natural germanium at its measured density.
    pub fn natural_germanium(&mut self) -> Arc<Material> {
        if let Some(mat) = self.materials.get("NaturalGermanium") {
            return mat.clone();
        }
        self.register(
            "NaturalGermanium".to_owned(),
            "NatGe".to_owned(),
            IsotopeMixture::natural(),
            GramsPerCm3(NATURAL_GE_DENSITY),
        )
    }

    /// Enriched germanium approximated as Ge-76 at `ge76_fraction`, rest Ge-74.
    ///
    /// Materials are keyed by the fraction rounded to three decimals, so
    /// `0.9201` returns the material registered for `0.920`.
    pub fn enriched_germanium(&mut self, ge76_fraction: f64) -> Result<Arc<Material>> {
        let mixture = IsotopeMixture::enriched(ge76_fraction)?;
        let name = format!("EnrichedGermanium{ge76_fraction:.3}");
        if let Some(mat) = self.materials.get(&name) {
            return Ok(mat.clone());
        }
        let density = mixture_density(&mixture, self.model);
        Ok(self.register(name, format!("EnrGe{ge76_fraction:.3}"), mixture, density))
    }
}

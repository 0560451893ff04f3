//! Germanium densities as a function of isotopic composition.
//!
//! The lattice is fixed, so the atom number density `n` does not depend on
//! the isotopes; only the mean molar mass does. Any composition then has
//! `ρ = n · M / N_A`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::units::{GramsPerCm3, PerCubicCentimeter};

use super::isotopes::{isotope_mass, IsotopeMixture};

/// Avogadro constant, 1/mol.
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Measured density of natural germanium at room temperature, g/cm³.
pub const NATURAL_GE_DENSITY: f64 = 5.3234;

/// Covalent radius of germanium, cm.
pub const GE_ATOMIC_RADIUS_CM: f64 = 0.122e-7;

/// Where the atom number density comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityModel {
    /// Back out `n` from the measured density of natural germanium.
    #[default]
    Measured,
    /// Diamond-cubic lattice (8 atoms per cell) of touching spheres.
    Theoretical,
}

impl DensityModel {
    pub fn number_density(self) -> PerCubicCentimeter {
        match self {
            DensityModel::Measured => measured_number_density(),
            DensityModel::Theoretical => theoretical_number_density(),
        }
    }
}

/// `n = N_A · ρ_nat / M_nat`.
pub fn measured_number_density() -> PerCubicCentimeter {
    PerCubicCentimeter(AVOGADRO * NATURAL_GE_DENSITY / IsotopeMixture::natural().molar_mass())
}

/// `n = 8 / a³` with lattice constant `a = 8 r / √3`.
pub fn theoretical_number_density() -> PerCubicCentimeter {
    let a = 8.0 * GE_ATOMIC_RADIUS_CM / 3f64.sqrt();
    PerCubicCentimeter(8.0 / (a * a * a))
}

/// Mean molar mass of the Ge-74/Ge-76 approximation of enriched germanium.
#[inline]
pub fn enriched_molar_mass(ge76_fraction: f64) -> f64 {
    let (m74, m76) = (
        isotope_mass(74).unwrap_or_default(),
        isotope_mass(76).unwrap_or_default(),
    );
    m76 * ge76_fraction + m74 * (1.0 - ge76_fraction)
}

/// Density of a mixture under the given number-density model.
pub fn mixture_density(mixture: &IsotopeMixture, model: DensityModel) -> GramsPerCm3 {
    GramsPerCm3(model.number_density().value() * mixture.molar_mass() / AVOGADRO)
}

/// Density of enriched germanium with Ge-76 fraction `f` (rest Ge-74).
///
/// Fails with [`Error::InvalidMixture`](crate::error::Error::InvalidMixture)
/// unless `0 <= f <= 1`.
pub fn enriched_germanium_density(ge76_fraction: f64, model: DensityModel) -> Result<GramsPerCm3> {
    let mixture = IsotopeMixture::enriched(ge76_fraction)?;
    Ok(mixture_density(&mixture, model))
}

/// Density of natural germanium. Under [`DensityModel::Measured`] this is
/// [`NATURAL_GE_DENSITY`] up to rounding.
pub fn natural_germanium_density(model: DensityModel) -> GramsPerCm3 {
    mixture_density(&IsotopeMixture::natural(), model)
}

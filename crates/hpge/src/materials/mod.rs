//! Germanium materials: isotope data, density from enrichment, and a
//! caller-owned registry that builds each material once.
//!
//! All densities are g/cm³ and all molar masses g/mol.

mod density;
mod isotopes;
mod registry;

pub use density::{
    enriched_germanium_density, enriched_molar_mass, measured_number_density, mixture_density,
    natural_germanium_density, theoretical_number_density, DensityModel, AVOGADRO,
    GE_ATOMIC_RADIUS_CM, NATURAL_GE_DENSITY,
};
pub use isotopes::{
    isotope_mass, IsotopeMixture, FRACTION_SUM_TOL, GE_ISOTOPE_MASS, GE_Z, NATURAL_GE_FRACTIONS,
};
pub use registry::{Isotope, Material, MaterialRegistry, DEFAULT_GE76_FRACTION};

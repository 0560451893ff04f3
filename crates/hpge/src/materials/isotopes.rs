//! Germanium isotope data and validated isotope mixtures.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Atomic number of germanium.
pub const GE_Z: u32 = 32;

/// Molar masses of the stable germanium isotopes, g/mol (NIST).
pub const GE_ISOTOPE_MASS: [(u32, f64); 5] = [
    (70, 69.924),
    (72, 71.922),
    (73, 72.923),
    (74, 73.921),
    (76, 75.921),
];

/// Isotopic composition of natural germanium, mole fractions (NIST).
pub const NATURAL_GE_FRACTIONS: [(u32, f64); 5] = [
    (70, 0.2057),
    (72, 0.2745),
    (73, 0.0775),
    (74, 0.3650),
    (76, 0.0773),
];

/// Accepted deviation of a mixture's fraction sum from 1.
pub const FRACTION_SUM_TOL: f64 = 1e-9;

/// Molar mass of germanium isotope `n`, if it is one of the stable ones.
#[inline]
pub fn isotope_mass(n: u32) -> Option<f64> {
    GE_ISOTOPE_MASS
        .iter()
        .find(|(mass_number, _)| *mass_number == n)
        .map(|(_, a)| *a)
}

/// Mole fractions per mass number.
///
/// Invariants:
/// - every isotope is a stable germanium isotope;
/// - every fraction lies in `[0, 1]`;
/// - fractions sum to 1 within [`FRACTION_SUM_TOL`].
#[derive(Clone, Debug, PartialEq)]
pub struct IsotopeMixture {
    fractions: BTreeMap<u32, f64>,
}

impl IsotopeMixture {
    pub fn new<I: IntoIterator<Item = (u32, f64)>>(fractions: I) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (n, frac) in fractions {
            if isotope_mass(n).is_none() {
                return Err(Error::InvalidMixture(format!("unknown isotope Ge{n}")));
            }
            if !(0.0..=1.0).contains(&frac) {
                return Err(Error::InvalidMixture(format!(
                    "fraction of Ge{n} must lie in [0, 1], got {frac}"
                )));
            }
            *map.entry(n).or_insert(0.0) += frac;
        }
        let sum: f64 = map.values().sum();
        if (sum - 1.0).abs() > FRACTION_SUM_TOL {
            return Err(Error::InvalidMixture(format!(
                "isotope fractions sum to {sum}, expected 1"
            )));
        }
        Ok(Self { fractions: map })
    }

    /// Natural germanium.
    pub fn natural() -> Self {
        Self {
            fractions: NATURAL_GE_FRACTIONS.into_iter().collect(),
        }
    }

    /// Two-isotope approximation of enriched germanium: Ge-76 at `ge76_fraction`, rest Ge-74.
    pub fn enriched(ge76_fraction: f64) -> Result<Self> {
        Self::new([(74, 1.0 - ge76_fraction), (76, ge76_fraction)])
    }

    #[inline]
    pub fn fraction(&self, n: u32) -> f64 {
        self.fractions.get(&n).copied().unwrap_or(0.0)
    }

    /// `(mass number, fraction)` in ascending mass number.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.fractions.iter().map(|(&n, &f)| (n, f))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Fraction-weighted molar mass, g/mol.
    pub fn molar_mass(&self) -> f64 {
        self.iter()
            .map(|(n, f)| isotope_mass(n).unwrap_or(0.0) * f)
            .sum()
    }
}

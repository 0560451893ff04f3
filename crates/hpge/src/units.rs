//! Unit-carrying scalars for the physical quantities handed back to callers.
//!
//! Geometry is evaluated in millimeters; densities are quoted in g/cm³ as in
//! the material literature. Each newtype exposes its raw value plus the few
//! conversions callers actually need.

use serde::Serialize;
use std::fmt;

macro_rules! quantity {
    ($(#[$doc:meta])* $name:ident, $unit:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize)]
        pub struct $name(pub f64);

        impl $name {
            #[inline]
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, $unit)
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }
    };
}

quantity!(
    /// Volume in mm³.
    CubicMillimeters,
    "mm^3"
);
quantity!(
    /// Area in mm².
    SquareMillimeters,
    "mm^2"
);
quantity!(
    /// Mass in grams.
    Grams,
    "g"
);
quantity!(
    /// Mass density in g/cm³.
    GramsPerCm3,
    "g/cm^3"
);
quantity!(
    /// Number density in atoms per cm³.
    PerCubicCentimeter,
    "cm^-3"
);

impl CubicMillimeters {
    #[inline]
    pub fn to_cm3(self) -> f64 {
        self.0 * 1e-3
    }

    /// Mass of this volume at the given density.
    #[inline]
    pub fn mass(self, density: GramsPerCm3) -> Grams {
        Grams(self.to_cm3() * density.0)
    }
}

impl SquareMillimeters {
    #[inline]
    pub fn to_cm2(self) -> f64 {
        self.0 * 1e-2
    }
}

impl Grams {
    #[inline]
    pub fn to_kg(self) -> f64 {
        self.0 * 1e-3
    }
}

impl std::iter::Sum for SquareMillimeters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        SquareMillimeters(iter.map(|a| a.0).sum())
    }
}

//! Profile and surface-tag types.
//!
//! - `SurfaceTag`: electrode classification of one profile edge.
//! - `Profile`: CCW meridian polygon `(r, z)` with one tag per edge.

use nalgebra::Vector2;
use serde::{Serialize, Serializer};
use std::fmt;

/// Electrode type of a profile edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceTag {
    /// Point-contact (p+) electrode.
    PPlus,
    /// Lithium-drifted (n+) electrode.
    NPlus,
    /// Passivated surface.
    Passive,
}

impl SurfaceTag {
    pub const ALL: [SurfaceTag; 3] = [SurfaceTag::PPlus, SurfaceTag::NPlus, SurfaceTag::Passive];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceTag::PPlus => "p+",
            SurfaceTag::NPlus => "n+",
            SurfaceTag::Passive => "passive",
        }
    }
}

impl fmt::Display for SurfaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SurfaceTag {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p+" | "pplus" => Ok(SurfaceTag::PPlus),
            "n+" | "nplus" => Ok(SurfaceTag::NPlus),
            "passive" => Ok(SurfaceTag::Passive),
            other => Err(format!("unknown surface tag '{other}' (expected p+, n+ or passive)")),
        }
    }
}

impl Serialize for SurfaceTag {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Meridian cross-section of an axisymmetric solid.
///
/// Invariants:
/// - `vertices[i] = (r_i, z_i)` with `r_i >= 0`, traced counter-clockwise.
/// - The polygon closes implicitly along the axis (last → first vertex).
/// - `tags.len() == vertices.len() - 1`; `tags[i]` labels edge `i → i+1`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub vertices: Vec<Vector2<f64>>,
    pub tags: Vec<SurfaceTag>,
}

impl Profile {
    /// Build from parallel `r`/`z` lists and edge tags.
    ///
    /// Panics if the lengths are inconsistent; builders always emit them in lockstep.
    pub fn from_rz(r: &[f64], z: &[f64], tags: Vec<SurfaceTag>) -> Self {
        assert_eq!(r.len(), z.len(), "r and z must have equal length");
        assert_eq!(
            tags.len() + 1,
            r.len(),
            "one surface tag per edge between consecutive vertices"
        );
        Self {
            vertices: r.iter().zip(z).map(|(&r, &z)| Vector2::new(r, z)).collect(),
            tags,
        }
    }

    /// Number of tagged edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Endpoints of tagged edge `i`.
    #[inline]
    pub fn edge(&self, i: usize) -> (Vector2<f64>, Vector2<f64>) {
        (self.vertices[i], self.vertices[i + 1])
    }

    pub fn r(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.x).collect()
    }

    pub fn z(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.y).collect()
    }

    /// Edge indices carrying `tag`, in profile order.
    pub fn surface_indices(&self, tag: SurfaceTag) -> Vec<usize> {
        self.tags
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == tag)
            .map(|(i, _)| i)
            .collect()
    }

    /// Same polygon traversed in the opposite direction (tags follow their edges).
    pub fn reversed(&self) -> Profile {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        let mut tags = self.tags.clone();
        tags.reverse();
        Profile { vertices, tags }
    }
}

/// Wire form handed to the external solid builder: `{"r": [...], "z": [...], "surfaces": [...]}`.
impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut st = s.serialize_struct("Profile", 3)?;
        st.serialize_field("r", &self.r())?;
        st.serialize_field("z", &self.z())?;
        st.serialize_field("surfaces", &self.tags)?;
        st.end()
    }
}

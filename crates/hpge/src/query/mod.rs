//! Geometry queries on revolution profiles.
//!
//! Purpose
//! - Exact volume and surface area of a profile swept about the z-axis.
//! - Batch inside tests and nearest-surface distances for 3-D points.
//!
//! Assumptions and conventions
//! - Works on any [`Profile`]; nothing here depends on the detector family.
//! - Surface indices address tagged edges (`i → i+1`). The closing edge along
//!   the axis is interior to the solid and never a surface.
//! - Batch queries are data-parallel over points (rayon) and return results
//!   in input order.

mod area;
mod distance;
mod volume;

pub use area::{edge_area, frustum_edge_area, surface_area};
pub use distance::{distance_to_surface, is_inside, signed_distances, to_rz, DEFAULT_TOL};
pub use volume::volume;

use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::profile::Profile;

/// Reject surface indices that do not name a tagged edge.
pub(crate) fn check_indices(profile: &Profile, indices: &[usize]) -> Result<()> {
    let edges = profile.edge_count();
    match indices.iter().find(|&&i| i >= edges) {
        Some(&index) => Err(Error::SurfaceIndexOutOfRange { index, edges }),
        None => Ok(()),
    }
}

/// Query points from rows of coordinates; every row must be `[x, y, z]`.
pub fn points_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Vector3<f64>>> {
    rows.iter()
        .map(|row| match row.as_ref() {
            &[x, y, z] => Ok(Vector3::new(x, y, z)),
            other => Err(Error::DimensionMismatch { got: other.len() }),
        })
        .collect()
}

/// Query points from a flat `x0, y0, z0, x1, ...` buffer.
///
/// A trailing partial point is reported with the number of leftover coordinates.
pub fn points_from_flat(coords: &[f64]) -> Result<Vec<Vector3<f64>>> {
    let rem = coords.len() % 3;
    if rem != 0 {
        return Err(Error::DimensionMismatch { got: rem });
    }
    Ok(coords
        .chunks_exact(3)
        .map(|c| Vector3::new(c[0], c[1], c[2]))
        .collect())
}

//! Surface area of the revolved profile, per edge or over a selection.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::error::Result;
use crate::profile::Profile;
use crate::units::SquareMillimeters;

use super::check_indices;

/// Area swept by the edge `a → b` about the z-axis.
///
/// Vertical edges sweep a cylinder patch `2π·r·|dz|`; any other edge counts
/// as the cone patch `π·|dr|·|ab|`. That term is exact for edges starting
/// on the axis and is the area convention of the LEGEND detector database;
/// [`frustum_edge_area`] gives the exact lateral area for every edge.
/// Zero-length edges give zero.
#[inline]
pub fn edge_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let dr = b.x - a.x;
    let dz = b.y - a.y;
    if dr == 0.0 {
        2.0 * PI * a.x * dz.abs()
    } else {
        PI * dr.abs() * dr.hypot(dz)
    }
}

/// Exact lateral area `π·(r1 + r2)·|ab|` of the conical frustum swept by `a → b`.
#[inline]
pub fn frustum_edge_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    PI * (a.x + b.x) * (b - a).norm()
}

/// Area of the selected tagged edges, or of every tagged edge when `surface_indices` is `None`.
///
/// The implicit closing edge along the axis sweeps no area and is never counted.
pub fn surface_area(profile: &Profile, surface_indices: Option<&[usize]>) -> Result<SquareMillimeters> {
    let area = match surface_indices {
        None => (0..profile.edge_count())
            .map(|i| {
                let (a, b) = profile.edge(i);
                edge_area(a, b)
            })
            .sum(),
        Some(indices) => {
            check_indices(profile, indices)?;
            indices
                .iter()
                .map(|&i| {
                    let (a, b) = profile.edge(i);
                    edge_area(a, b)
                })
                .sum()
        }
    };
    Ok(SquareMillimeters(area))
}

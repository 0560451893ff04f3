//! Point-to-profile distances and inside classification.
//!
//! Query points are 3-D; each is reduced to `(hypot(x, y), z)` in the
//! meridian plane and compared against the tagged profile edges.
//!
//! Sign convention
//! - Positive on the crystal side of an edge, negative outside. The interior
//!   side comes from the polygon winding (left of each edge for CCW).
//! - When the closest point is an edge endpoint, the side is decided by the
//!   vertex pseudo-normal (sum of the two adjacent unit normals). Both edges
//!   sharing that vertex then agree on the sign, so a distance tie between
//!   them cannot flip the classification.
//! - Nearest edge = smallest absolute distance; ties keep the lower index.
//!
//! Tolerance
//! - Distances `<= tol` snap to 0 (on the surface, hence inside).
//! - Edges not longer than `tol` are dropped from the comparison.

use nalgebra::{Vector2, Vector3};
use rayon::prelude::*;

use crate::error::Result;
use crate::profile::Profile;

use super::check_indices;
use super::volume::signed_area;

/// Default tolerance (mm) for on-surface snapping.
pub const DEFAULT_TOL: f64 = 1e-11;

/// Meridian-plane coordinates `(r, z)` of a 3-D point.
#[inline]
pub fn to_rz(p: &Vector3<f64>) -> Vector2<f64> {
    Vector2::new(p.x.hypot(p.y), p.z)
}

/// One edge prepared for repeated distance evaluation.
#[derive(Clone, Copy, Debug)]
struct Segment {
    a: Vector2<f64>,
    d: Vector2<f64>,
    len2: f64,
    normal: Vector2<f64>,
    normal_start: Vector2<f64>,
    normal_end: Vector2<f64>,
}

impl Segment {
    /// Signed distance from `p`, snapped to 0 within `tol`.
    #[inline]
    fn signed_distance(&self, p: Vector2<f64>, tol: f64) -> f64 {
        let t = ((p - self.a).dot(&self.d) / self.len2).clamp(0.0, 1.0);
        let q = self.a + self.d * t;
        let offset = p - q;
        let dist = offset.norm();
        if dist <= tol {
            return 0.0;
        }
        let side = if t <= 0.0 {
            self.normal_start
        } else if t >= 1.0 {
            self.normal_end
        } else {
            self.normal
        };
        if offset.dot(&side) < 0.0 {
            -dist
        } else {
            dist
        }
    }
}

/// Prepare every tagged edge for distance queries, indexed by edge.
///
/// Edges not longer than `tol` map to `None`. Pseudo-normals always come
/// from the full profile, so subset queries see the same geometry.
fn segments(profile: &Profile, tol: f64) -> Vec<Option<Segment>> {
    let orientation = if signed_area(profile) < 0.0 { -1.0 } else { 1.0 };
    let n_edges = profile.edge_count();

    let normals: Vec<Option<Vector2<f64>>> = (0..n_edges)
        .map(|i| {
            let (a, b) = profile.edge(i);
            let d = b - a;
            let len = d.norm();
            if len > tol && len > 0.0 {
                Some(Vector2::new(-d.y, d.x) * (orientation / len))
            } else {
                None
            }
        })
        .collect();

    let prev_normal = |i: usize| normals[..i].iter().rev().find_map(|n| *n);
    let next_normal = |i: usize| normals[i + 1..].iter().find_map(|n| *n);

    (0..n_edges)
        .map(|i| {
            let normal = normals[i]?;
            let (a, b) = profile.edge(i);
            let d = b - a;
            Some(Segment {
                a,
                d,
                len2: d.norm_squared(),
                normal,
                normal_start: normal + prev_normal(i).unwrap_or(Vector2::zeros()),
                normal_end: normal + next_normal(i).unwrap_or(Vector2::zeros()),
            })
        })
        .collect()
}

/// Signed distance to the nearest segment; `+inf` when there is none.
#[inline]
fn nearest_signed(segs: &[Segment], p: Vector2<f64>, tol: f64) -> f64 {
    let mut best = f64::INFINITY;
    for s in segs {
        let d = s.signed_distance(p, tol);
        if d.abs() < best.abs() {
            best = d;
        }
    }
    best
}

/// Signed distance of every point to the nearest tagged edge (positive inside).
pub fn signed_distances(profile: &Profile, points: &[Vector3<f64>], tol: f64) -> Vec<f64> {
    let segs: Vec<Segment> = segments(profile, tol).into_iter().flatten().collect();
    points
        .par_iter()
        .map(|p| nearest_signed(&segs, to_rz(p), tol))
        .collect()
}

/// Whether each point lies inside the revolved solid.
///
/// Points within `tol` of the surface count as inside.
pub fn is_inside(profile: &Profile, points: &[Vector3<f64>], tol: f64) -> Vec<bool> {
    signed_distances(profile, points, tol)
        .into_iter()
        .map(|d| d.is_finite() && d >= 0.0)
        .collect()
}

/// Unsigned distance of every point to the nearest selected surface.
///
/// `surface_indices` restricts the comparison to those tagged edges; `None`
/// uses all of them. An empty selection yields `+inf` for every point.
pub fn distance_to_surface(
    profile: &Profile,
    points: &[Vector3<f64>],
    surface_indices: Option<&[usize]>,
    tol: f64,
) -> Result<Vec<f64>> {
    let all = segments(profile, tol);
    let segs: Vec<Segment> = match surface_indices {
        None => all.into_iter().flatten().collect(),
        Some(indices) => {
            check_indices(profile, indices)?;
            indices.iter().filter_map(|&i| all[i]).collect()
        }
    };
    Ok(points
        .par_iter()
        .map(|p| nearest_signed(&segs, to_rz(p), tol).abs())
        .collect())
}

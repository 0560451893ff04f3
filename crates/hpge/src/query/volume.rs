//! Closed-form volume of a profile revolved about the z-axis.

use std::f64::consts::PI;

use crate::profile::Profile;
use crate::units::CubicMillimeters;

/// Volume of the solid obtained by sweeping `profile` through 2π.
///
/// Sums the signed frustum slabs `(r1² + r1·r2 + r2²)(z2 − z1)` over every
/// edge, including the implicit closing edge from the last vertex back to
/// the first, and scales by `2π/6`. The absolute value makes the result
/// independent of traversal direction.
pub fn volume(profile: &Profile) -> CubicMillimeters {
    let verts = &profile.vertices;
    let Some(&last) = verts.last() else {
        return CubicMillimeters(0.0);
    };
    let (mut r1, mut z1) = (last.x, last.y);
    let mut acc = 0.0;
    for v in verts {
        let (r2, z2) = (v.x, v.y);
        acc += (r1 * r1 + r1 * r2 + r2 * r2) * (z2 - z1);
        r1 = r2;
        z1 = z2;
    }
    CubicMillimeters(2.0 * PI * acc.abs() / 6.0)
}

/// Signed area of the closed meridian polygon (positive for counter-clockwise).
pub(crate) fn signed_area(profile: &Profile) -> f64 {
    let verts = &profile.vertices;
    let n = verts.len();
    let mut acc = 0.0;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        acc += a.x * b.y - b.x * a.y;
    }
    0.5 * acc
}

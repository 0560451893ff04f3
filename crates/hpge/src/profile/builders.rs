//! Per-family vertex emission rules.
//!
//! Every builder walks the meridian cross-section counter-clockwise and emits
//! one surface tag per edge. The emission order is part of the contract:
//! callers address surfaces by edge index.

use crate::config::{DetectorConfig, Taper};

use super::types::{Profile, SurfaceTag};

use SurfaceTag::{NPlus, PPlus, Passive};

/// Lockstep accumulator for vertices and edge tags.
#[derive(Default)]
struct Trace {
    r: Vec<f64>,
    z: Vec<f64>,
    tags: Vec<SurfaceTag>,
}

impl Trace {
    /// First vertex; carries no tag.
    fn start(&mut self, r: f64, z: f64) {
        debug_assert!(self.r.is_empty());
        self.r.push(r);
        self.z.push(z);
    }

    /// Next vertex, tagging the edge that reaches it.
    fn to(&mut self, r: f64, z: f64, tag: SurfaceTag) {
        self.r.push(r);
        self.z.push(z);
        self.tags.push(tag);
    }

    fn finish(self) -> Profile {
        Profile::from_rz(&self.r, &self.z, self.tags)
    }
}

/// Shared bottom segment: p+ contact and the groove around it.
fn pplus_and_groove(c: &DetectorConfig, t: &mut Trace) {
    let pp = c.pp_contact;
    let g = c.groove;
    if pp.depth > 0.0 {
        t.start(0.0, pp.depth);
        t.to(pp.radius, pp.depth, PPlus);
        t.to(pp.radius, 0.0, Passive);
        t.to(g.inner_radius, 0.0, Passive);
    } else if pp.radius < g.inner_radius {
        t.start(0.0, 0.0);
        t.to(pp.radius, 0.0, PPlus);
        t.to(g.inner_radius, 0.0, Passive);
    } else {
        t.start(0.0, 0.0);
        t.to(pp.radius, 0.0, PPlus);
    }
    t.to(g.inner_radius, g.depth, Passive);
    t.to(g.outer_radius, g.depth, Passive);
    t.to(g.outer_radius, 0.0, Passive);
}

/// Outer side: bottom taper then top taper, ending on the top face.
fn side_tapers(c: &DetectorConfig, t: &mut Trace) {
    bottom_taper(c.radius, c.taper.bottom, t);
    top_taper(c.radius, c.height, c.taper.top, t);
}

fn bottom_taper(radius: f64, taper: Taper, t: &mut Trace) {
    if taper.height > 0.0 {
        t.to(radius - taper.inset(), 0.0, NPlus);
        t.to(radius, taper.height, NPlus);
    } else {
        t.to(radius, 0.0, NPlus);
    }
}

fn top_taper(radius: f64, height: f64, taper: Taper, t: &mut Trace) {
    if taper.height > 0.0 {
        t.to(radius, height - taper.height, NPlus);
        t.to(radius - taper.inset(), height, NPlus);
    } else {
        t.to(radius, height, NPlus);
    }
}

/// Inverted-coaxial point contact: groove at the bottom, well from the top face.
pub(super) fn inverted_coax(c: &DetectorConfig) -> Profile {
    let mut t = Trace::default();
    pplus_and_groove(c, &mut t);
    side_tapers(c, &mut t);

    let bh = c.borehole;
    let bh_taper = c.taper.borehole;
    if bh_taper.height > 0.0 {
        t.to(bh.radius + bh_taper.inset(), c.height, NPlus);
        t.to(bh.radius, c.height - bh_taper.height, NPlus);
    } else {
        t.to(bh.radius, c.height, NPlus);
    }

    let floor = c.height - bh.depth;
    if bh_taper.height != bh.depth {
        t.to(bh.radius, floor, NPlus);
        t.to(0.0, floor, NPlus);
    } else {
        t.to(0.0, floor, NPlus);
    }
    t.finish()
}

/// Semi-coaxial: p+ borehole opened from the bottom face, groove outside it.
pub(super) fn semi_coax(c: &DetectorConfig) -> Profile {
    let mut t = Trace::default();
    let bh = c.borehole;
    let bh_taper = c.taper.borehole;

    t.start(0.0, bh.depth);
    t.to(bh.radius, bh.depth, PPlus);
    if bh_taper.height > 0.0 {
        t.to(bh.radius, bh_taper.height, PPlus);
        t.to(bh.radius + bh_taper.inset(), 0.0, PPlus);
    } else {
        t.to(bh.radius, 0.0, PPlus);
    }

    let g = c.groove;
    t.to(g.inner_radius, 0.0, PPlus);
    t.to(g.inner_radius, g.depth, Passive);
    t.to(g.outer_radius, g.depth, Passive);
    t.to(g.outer_radius, 0.0, Passive);

    side_tapers(c, &mut t);
    t.to(0.0, c.height, NPlus);
    t.finish()
}

/// Broad-energy / p-type point contact: full cylinder with the shared bottom segment.
pub(super) fn bege(c: &DetectorConfig) -> Profile {
    let mut t = Trace::default();
    pplus_and_groove(c, &mut t);
    side_tapers(c, &mut t);
    t.to(0.0, c.height, NPlus);
    t.finish()
}

use super::*;
use crate::config::{Borehole, Groove, PpContact, Taper, Tapers};
use nalgebra::Vector2;

use SurfaceTag::{NPlus as N, PPlus as P, Passive as X};

fn icpc() -> DetectorConfig {
    DetectorConfig {
        radius: 40.0,
        height: 80.0,
        pp_contact: PpContact {
            radius: 3.0,
            depth: 0.0,
        },
        groove: Groove {
            inner_radius: 5.0,
            outer_radius: 8.0,
            depth: 2.0,
        },
        taper: Tapers {
            top: Taper {
                height: 10.0,
                angle: 45.0,
            },
            ..Tapers::default()
        },
        borehole: Borehole {
            radius: 5.0,
            depth: 50.0,
        },
    }
}

fn assert_vertices(p: &Profile, expected: &[(f64, f64)]) {
    assert_eq!(p.vertices.len(), expected.len(), "vertex count of {:?}", p.vertices);
    for (i, (v, &(r, z))) in p.vertices.iter().zip(expected).enumerate() {
        assert!(
            (v - Vector2::new(r, z)).norm() < 1e-9,
            "vertex {i}: got ({}, {}), expected ({r}, {z})",
            v.x,
            v.y
        );
    }
}

fn assert_consistent(p: &Profile) {
    assert_eq!(p.tags.len() + 1, p.vertices.len());
    assert_eq!(p.vertices.first().map(|v| v.x), Some(0.0));
    assert_eq!(p.vertices.last().map(|v| v.x), Some(0.0));
    assert!(p.vertices.iter().all(|v| v.x >= 0.0));
}

#[test]
fn icpc_flat_contact_inside_groove() {
    let p = Family::InvertedCoax.decode_profile(&icpc());
    assert_consistent(&p);
    assert_vertices(
        &p,
        &[
            (0.0, 0.0),
            (3.0, 0.0),
            (5.0, 0.0),
            (5.0, 2.0),
            (8.0, 2.0),
            (8.0, 0.0),
            (40.0, 0.0),
            (40.0, 70.0),
            (30.0, 80.0),
            (5.0, 80.0),
            (5.0, 30.0),
            (0.0, 30.0),
        ],
    );
    assert_eq!(p.tags, vec![P, X, X, X, X, N, N, N, N, N, N]);
}

#[test]
fn icpc_recessed_contact_emits_contact_face() {
    let mut c = icpc();
    c.pp_contact.depth = 2.0;
    let p = Family::InvertedCoax.decode_profile(&c);
    assert_consistent(&p);
    assert_eq!(&p.r()[..4], &[0.0, 3.0, 3.0, 5.0]);
    assert_eq!(&p.z()[..4], &[2.0, 2.0, 0.0, 0.0]);
    assert_eq!(&p.tags[..6], &[P, X, X, X, X, X]);
}

#[test]
fn icpc_contact_covering_groove_inner_radius() {
    let mut c = icpc();
    c.pp_contact.radius = 6.0;
    let p = Family::InvertedCoax.decode_profile(&c);
    assert_consistent(&p);
    assert_eq!(&p.r()[..3], &[0.0, 6.0, 5.0]);
    assert_eq!(&p.tags[..4], &[P, X, X, X]);
    assert_eq!(p.tags.len(), 10);
}

#[test]
fn icpc_bottom_taper_adds_two_edges() {
    let mut c = icpc();
    c.taper.bottom = Taper {
        height: 4.0,
        angle: 45.0,
    };
    let p = Family::InvertedCoax.decode_profile(&c);
    assert_consistent(&p);
    assert!((p.vertices[6] - Vector2::new(36.0, 0.0)).norm() < 1e-9);
    assert!((p.vertices[7] - Vector2::new(40.0, 4.0)).norm() < 1e-9);
    assert_eq!(p.tags.len(), 12);
}

#[test]
fn icpc_borehole_taper_spanning_full_depth_closes_directly() {
    let mut c = icpc();
    c.borehole.depth = 10.0;
    c.taper.borehole = Taper {
        height: 10.0,
        angle: 45.0,
    };
    let p = Family::InvertedCoax.decode_profile(&c);
    assert_consistent(&p);
    let n = p.vertices.len();
    assert!((p.vertices[n - 3] - Vector2::new(15.0, 80.0)).norm() < 1e-9);
    assert!((p.vertices[n - 2] - Vector2::new(5.0, 70.0)).norm() < 1e-9);
    assert!((p.vertices[n - 1] - Vector2::new(0.0, 70.0)).norm() < 1e-9);
    assert!(p.tags[5..].iter().all(|&t| t == N));
}

#[test]
fn icpc_partial_borehole_taper_keeps_wall_and_floor() {
    let mut c = icpc();
    c.taper.borehole = Taper {
        height: 5.0,
        angle: 45.0,
    };
    let p = Family::InvertedCoax.decode_profile(&c);
    assert_consistent(&p);
    let tail: Vec<(f64, f64)> = p.vertices[9..].iter().map(|v| (v.x, v.y)).collect();
    assert_eq!(tail.len(), 4);
    assert!((tail[0].0 - 10.0).abs() < 1e-9 && tail[0].1 == 80.0);
    assert_eq!(tail[1], (5.0, 75.0));
    assert_eq!(tail[2], (5.0, 30.0));
    assert_eq!(tail[3], (0.0, 30.0));
}

#[test]
fn semicoax_starts_at_borehole_floor() {
    let c = DetectorConfig {
        radius: 40.0,
        height: 80.0,
        pp_contact: PpContact::default(),
        groove: Groove {
            inner_radius: 8.0,
            outer_radius: 11.0,
            depth: 2.0,
        },
        taper: Tapers::default(),
        borehole: Borehole {
            radius: 5.0,
            depth: 40.0,
        },
    };
    let p = Family::SemiCoax.decode_profile(&c);
    assert_consistent(&p);
    assert_vertices(
        &p,
        &[
            (0.0, 40.0),
            (5.0, 40.0),
            (5.0, 0.0),
            (8.0, 0.0),
            (8.0, 2.0),
            (11.0, 2.0),
            (11.0, 0.0),
            (40.0, 0.0),
            (40.0, 80.0),
            (0.0, 80.0),
        ],
    );
    assert_eq!(p.tags, vec![P, P, P, X, X, X, N, N, N]);
}

#[test]
fn semicoax_mouth_taper_widens_borehole() {
    let mut c = icpc();
    c.borehole.depth = 40.0;
    c.taper.top = Taper::default();
    c.taper.borehole = Taper {
        height: 5.0,
        angle: 45.0,
    };
    c.groove.inner_radius = 12.0;
    c.groove.outer_radius = 15.0;
    let p = Family::SemiCoax.decode_profile(&c);
    assert_consistent(&p);
    assert!((p.vertices[2] - Vector2::new(5.0, 5.0)).norm() < 1e-9);
    assert!((p.vertices[3] - Vector2::new(10.0, 0.0)).norm() < 1e-9);
    assert_eq!(&p.tags[..4], &[P, P, P, P]);
    assert_eq!(&p.tags[4..7], &[X, X, X]);
}

#[test]
fn bege_is_capped_at_full_height() {
    let c = DetectorConfig {
        radius: 35.0,
        height: 30.0,
        pp_contact: PpContact {
            radius: 7.0,
            depth: 0.0,
        },
        groove: Groove {
            inner_radius: 9.0,
            outer_radius: 12.0,
            depth: 2.0,
        },
        taper: Tapers::default(),
        borehole: Borehole::default(),
    };
    let p = Family::Bege.decode_profile(&c);
    assert_consistent(&p);
    assert_vertices(
        &p,
        &[
            (0.0, 0.0),
            (7.0, 0.0),
            (9.0, 0.0),
            (9.0, 2.0),
            (12.0, 2.0),
            (12.0, 0.0),
            (35.0, 0.0),
            (35.0, 30.0),
            (0.0, 30.0),
        ],
    );
    assert_eq!(p.tags, vec![P, X, X, X, X, N, N, N]);
    assert_eq!(p.surface_indices(X), vec![1, 2, 3, 4]);
}

#[test]
fn profile_serializes_as_parallel_lists() {
    let p = Family::Bege.decode_profile(&icpc());
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["r"].as_array().unwrap().len(), p.vertices.len());
    assert_eq!(v["surfaces"][0], "p+");
    assert_eq!(v["surfaces"][1], "passive");
}

#[test]
fn surface_tag_parses_metadata_spellings() {
    assert_eq!("p+".parse::<SurfaceTag>().unwrap(), P);
    assert_eq!("nplus".parse::<SurfaceTag>().unwrap(), N);
    assert!("bulk".parse::<SurfaceTag>().is_err());
}

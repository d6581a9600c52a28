//! Chromaticity diagram construction properties.
//!
//! Every diagram vertex must lie inside the convex hull of the spectral
//! locus closed by the line of purples, and all indices must address
//! vertices.

use gamut_math::{Vec2, Vec3};
use gamut_models::ChromaticityDiagram;
use gamut_primaries::plotting_illuminant;
use gamut_visuals::{DiagramSettings, ToneMapping, build_diagram, build_diagram_with, cmfs};

/// Convex hull of `points` (Andrew's monotone chain), counter-clockwise.
fn convex_hull(mut points: Vec<Vec2>) -> Vec<Vec2> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points.dedup();

    let cross = |o: Vec2, a: Vec2, b: Vec2| (a - o).perp_dot(b - o);
    let mut lower: Vec<Vec2> = Vec::new();
    for &p in &points {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Vec2> = Vec::new();
    for &p in points.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn inside_hull(hull: &[Vec2], p: Vec2, eps: f32) -> bool {
    (0..hull.len()).all(|k| {
        let a = hull[k];
        let b = hull[(k + 1) % hull.len()];
        let edge = b - a;
        edge.perp_dot(p - a) >= -eps * edge.length()
    })
}

fn locus(diagram: ChromaticityDiagram, cmfs: &[Vec3]) -> Vec<Vec2> {
    cmfs.iter()
        .map(|&xyz| diagram.xyz_to_ij(xyz, plotting_illuminant()))
        .collect()
}

#[test]
fn vertices_inside_locus_hull() {
    let cmfs = cmfs::cie_1931_2_degree_fitted();
    for diagram in ChromaticityDiagram::ALL {
        let mesh = build_diagram(48, &cmfs, diagram, ToneMapping::NormaliseMaximum).unwrap();
        let hull = convex_hull(locus(diagram, &cmfs));
        for v in &mesh.vertices {
            let p = Vec2::new(v.position.x, v.position.y);
            assert!(inside_hull(&hull, p, 1e-5), "{diagram}: {p:?} outside locus");
        }
    }
}

#[test]
fn whitepoint_is_a_vertex() {
    let cmfs = cmfs::cie_1931_2_degree_fitted();
    let mesh = build_diagram(16, &cmfs, ChromaticityDiagram::Cie1931, ToneMapping::Clip).unwrap();
    let wp = plotting_illuminant();
    assert!(
        mesh.vertices
            .iter()
            .any(|v| (v.position.x - wp.x).abs() < 1e-6 && (v.position.y - wp.y).abs() < 1e-6)
    );
}

#[test]
fn indices_address_vertices() {
    let cmfs = cmfs::cie_1931_2_degree(420.0, 645.0, 5.0).unwrap();
    let settings = DiagramSettings {
        samples: 40,
        ..Default::default()
    };
    let mesh = build_diagram_with(&settings, &cmfs).unwrap();
    assert!(mesh.indices_in_bounds());
    assert!(!mesh.outline.is_empty());
    // Euler: a triangulated disc has E = V + F - 1
    assert_eq!(mesh.outline.len(), mesh.vertices.len() + mesh.faces.len() - 1);
}

#[test]
fn normalised_colours_reach_one() {
    let cmfs = cmfs::cie_1931_2_degree_fitted();
    let mesh = build_diagram(24, &cmfs, ChromaticityDiagram::Cie1976Ucs, ToneMapping::NormaliseMaximum)
        .unwrap();
    for v in &mesh.vertices {
        let max = v.colour.x.max(v.colour.y).max(v.colour.z);
        assert!((max - 1.0).abs() < 1e-5, "{:?}", v.colour);
    }
}

#[test]
fn rebuild_is_bit_identical() {
    let cmfs = cmfs::cie_1931_2_degree_fitted();
    let a = build_diagram(32, &cmfs, ChromaticityDiagram::Cie1960Ucs, ToneMapping::Clip).unwrap();
    let b = build_diagram(32, &cmfs, ChromaticityDiagram::Cie1960Ucs, ToneMapping::Clip).unwrap();
    assert_eq!(a, b);
}

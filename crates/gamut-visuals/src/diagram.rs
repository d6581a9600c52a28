//! Filled chromaticity diagrams.
//!
//! The diagram interior is a Delaunay triangulation of the spectral locus,
//! the line of purples closing it, the plotting whitepoint and a regular
//! grid of samples inside the locus. Grid points are kept when the
//! triangulation of the locus alone contains them, which doubles as the
//! inside test.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use spade::{DelaunayTriangulation, Point2, PositionInTriangulation, Triangulation};
use tracing::{debug, trace};

use gamut_core::{Error, Result};
use gamut_geometry::{Mesh, Vertex};
use gamut_math::{Vec2, Vec3};
use gamut_models::ChromaticityDiagram;
use gamut_primaries::{plotting_illuminant, srgb::xyz_to_srgb};

use crate::styles::{DiagramSettings, ToneMapping, rgba_vec};

type Delaunay = DelaunayTriangulation<Point2<f64>>;

/// Largest accepted `samples`; the grid scan visits `samples²` points.
pub const MAX_DIAGRAM_SAMPLES: u32 = 4096;

#[inline]
fn point(ij: Vec2) -> Point2<f64> {
    Point2::new(ij.x as f64, ij.y as f64)
}

fn triangulate(points: Vec<Point2<f64>>) -> Result<Delaunay> {
    Delaunay::bulk_load(points).map_err(|e| Error::geometry(format!("triangulation failed: {e:?}")))
}

#[inline]
fn is_inside(triangulation: &Delaunay, p: Point2<f64>) -> bool {
    !matches!(
        triangulation.locate(p),
        PositionInTriangulation::OutsideOfConvexHull(_) | PositionInTriangulation::NoTriangulation
    )
}

/// Points strictly between `a` and `b`, spaced about `spacing` apart.
fn line_of_purples(a: Vec2, b: Vec2, spacing: f32) -> Vec<Vec2> {
    let count = ((b - a).length() / spacing).ceil() as usize;
    (1..count)
        .map(|k| a.lerp(b, k as f32 / count as f32))
        .collect()
}

/// Builds the filled chromaticity diagram bounded by the spectral locus.
///
/// `cmfs` are colour matching function tristimulus values in wavelength
/// order. Locus samples with a non-finite projection are dropped. Vertex
/// colours are the display colour of each diagram point (at `Y = 1`,
/// relative to the plotting illuminant) brought into range by
/// `tone_mapping`. Vertices lie at `z = 0`; the outline buffer holds every
/// triangulation edge once.
///
/// # Errors
///
/// Returns a geometry error for `samples < 2` or when fewer than three
/// non-collinear locus points remain, and a configuration error for
/// `samples` above [`MAX_DIAGRAM_SAMPLES`].
pub fn build_diagram(
    samples: u32,
    cmfs: &[Vec3],
    diagram: ChromaticityDiagram,
    tone_mapping: ToneMapping,
) -> Result<Mesh> {
    trace!(samples, cmfs = cmfs.len(), diagram = %diagram, "build_diagram");
    if samples < 2 {
        return Err(Error::geometry(format!(
            "diagram needs at least 2 samples per axis, got {samples}"
        )));
    }
    if samples > MAX_DIAGRAM_SAMPLES {
        return Err(Error::configuration(format!(
            "diagram samples must be at most {MAX_DIAGRAM_SAMPLES}, got {samples}"
        )));
    }

    let illuminant = plotting_illuminant();
    let locus: Vec<Vec2> = cmfs
        .iter()
        .map(|&xyz| diagram.xyz_to_ij(xyz, illuminant))
        .filter(|ij| ij.is_finite())
        .collect();
    let dropped = cmfs.len() - locus.len();
    if dropped > 0 {
        debug!(dropped, "dropped non-finite locus points");
    }
    if locus.len() < 3 {
        return Err(Error::geometry(format!(
            "only {} finite locus points on {diagram}",
            locus.len()
        )));
    }

    let boundary = triangulate(locus.iter().copied().map(point).collect())?;
    if boundary.num_inner_faces() == 0 {
        return Err(Error::geometry("spectral locus points are collinear"));
    }

    // Square grid over the locus bounds
    let (lo, hi) = locus
        .iter()
        .fold((Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)), |(lo, hi), &p| {
            (lo.min(p), hi.max(p))
        });
    let origin = lo.min_element();
    let side = (hi.max_element() - origin).max(f32::EPSILON);
    let spacing = side / (samples - 1) as f32;

    let n = samples as usize;
    let grid_point = |k: usize| {
        let (i, j) = (k % n, k / n);
        Vec2::new(origin + i as f32 * spacing, origin + j as f32 * spacing)
    };
    let keep = |k: usize| {
        let ij = grid_point(k);
        is_inside(&boundary, point(ij)).then_some(ij)
    };
    #[cfg(feature = "parallel")]
    let interior: Vec<Vec2> = (0..n * n).into_par_iter().filter_map(keep).collect();
    #[cfg(not(feature = "parallel"))]
    let interior: Vec<Vec2> = (0..n * n).filter_map(keep).collect();

    let first = locus[0];
    let last = locus[locus.len() - 1];
    let purples = line_of_purples(first, last, spacing);
    let whitepoint = diagram.xy_to_ij(illuminant);

    debug!(
        locus = locus.len(),
        interior = interior.len(),
        purples = purples.len(),
        "diagram points"
    );

    let mut input: Vec<Point2<f64>> =
        Vec::with_capacity(locus.len() + purples.len() + interior.len() + 1);
    input.extend(locus.iter().copied().map(point));
    input.extend(purples.iter().copied().map(point));
    input.push(point(whitepoint));
    input.extend(interior.iter().copied().map(point));

    let triangulation = triangulate(input)?;
    if triangulation.num_inner_faces() == 0 {
        return Err(Error::geometry("diagram triangulation has no faces"));
    }

    let extent = Vec2::splat(side);
    let to_vertex = |ij: Vec2| {
        let rgb = tone_mapping.apply(xyz_to_srgb(diagram.ij_to_xyz(ij)));
        Vertex {
            position: Vec3::new(ij.x, ij.y, 0.0),
            normal: Vec3::Z,
            uv: (ij - Vec2::splat(origin)) / extent,
            colour: rgba_vec(rgb, 1.0),
        }
    };
    let vertices: Vec<Vertex> = triangulation
        .vertices()
        .map(|v| {
            let p = v.position();
            to_vertex(Vec2::new(p.x as f32, p.y as f32))
        })
        .collect();

    let faces: Vec<[u32; 3]> = triangulation
        .inner_faces()
        .map(|f| f.vertices().map(|v| v.fix().index() as u32))
        .collect();
    let outline: Vec<[u32; 2]> = triangulation
        .undirected_edges()
        .map(|e| e.vertices().map(|v| v.fix().index() as u32))
        .collect();

    debug!(vertices = vertices.len(), faces = faces.len(), "diagram built");

    Ok(Mesh {
        vertices,
        faces,
        outline,
    })
}

/// [`build_diagram`] with settings.
pub fn build_diagram_with(settings: &DiagramSettings, cmfs: &[Vec3]) -> Result<Mesh> {
    build_diagram(settings.samples, cmfs, settings.diagram, settings.tone_mapping)
}

//! Chromaticity diagram construction.
//!
//! Shows how the xy diagram arises from XYZ: the `X + Y + Z = 1` plane
//! drawn as a triangle, and one ray from the origin through each colour
//! matching function sample. Where a ray pierces the plane is the locus
//! point for that wavelength.

use tracing::trace;

use gamut_core::{Error, Result};
use gamut_geometry::{Line, LineMode, Mesh, Vertex};
use gamut_math::{Vec2, Vec3, Vec4};

/// Ray length as a multiple of the sample tristimulus value.
pub const CONSTRUCTION_RAY_SCALE: f32 = 1.75;

/// Buffers of the construction visual.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConstruction {
    /// Unit simplex, white at half opacity.
    pub simplex: Mesh,
    /// Simplex edges, opaque white.
    pub simplex_wireframe: Mesh,
    /// Black segments from the origin through every sample.
    pub rays: Line,
}

fn unit_simplex() -> Mesh {
    let normal = Vec3::splat(1.0 / 3.0_f32.sqrt());
    let corners = [
        (Vec3::new(1.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
        (Vec3::new(0.0, 1.0, 0.0), Vec2::new(1.0, 0.0)),
        (Vec3::new(0.0, 0.0, 1.0), Vec2::new(0.0, 1.0)),
    ];
    Mesh {
        vertices: corners
            .into_iter()
            .map(|(position, uv)| Vertex {
                position,
                normal,
                uv,
                colour: Vec4::ONE,
            })
            .collect(),
        faces: vec![[0, 1, 2]],
        outline: vec![[0, 1], [1, 2], [2, 0]],
    }
}

/// Builds the construction visual from colour matching function samples.
///
/// # Errors
///
/// Returns a configuration error when `cmfs` is empty.
pub fn build_diagram_construction(cmfs: &[Vec3]) -> Result<DiagramConstruction> {
    trace!(samples = cmfs.len(), "build_diagram_construction");
    if cmfs.is_empty() {
        return Err(Error::configuration(
            "diagram construction needs at least one colour matching function sample",
        ));
    }

    let mut simplex = unit_simplex();
    let simplex_wireframe = simplex.to_wireframe();
    simplex.set_opacity(0.5);

    let black = Vec4::new(0.0, 0.0, 0.0, 1.0);
    let positions: Vec<Vec3> = cmfs
        .iter()
        .flat_map(|&xyz| [Vec3::ZERO, xyz * CONSTRUCTION_RAY_SCALE])
        .collect();
    let rays = Line {
        colours: vec![black; positions.len()],
        positions,
        mode: LineMode::Segments,
    };

    Ok(DiagramConstruction {
        simplex,
        simplex_wireframe,
        rays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmfs::cie_1931_2_degree_fitted;

    #[test]
    fn test_simplex() {
        let c = build_diagram_construction(&cie_1931_2_degree_fitted()).unwrap();
        assert_eq!(c.simplex.vertices.len(), 3);
        assert_eq!(c.simplex.faces, vec![[0, 1, 2]]);
        assert!(c.simplex.vertices.iter().all(|v| v.colour.w == 0.5));
        // Every corner lies on X + Y + Z = 1
        assert!(c.simplex.positions().all(|p| p.sum() == 1.0));

        assert!(c.simplex_wireframe.faces.is_empty());
        assert_eq!(c.simplex_wireframe.outline.len(), 3);
        assert!(c.simplex_wireframe.vertices.iter().all(|v| v.colour == Vec4::ONE));
    }

    #[test]
    fn test_rays() {
        let cmfs = cie_1931_2_degree_fitted();
        let c = build_diagram_construction(&cmfs).unwrap();
        assert_eq!(c.rays.mode, LineMode::Segments);
        assert_eq!(c.rays.segment_count(), cmfs.len());
        assert_eq!(c.rays.positions[0], Vec3::ZERO);
        assert_eq!(c.rays.positions[1], cmfs[0] * 1.75);
        assert_eq!(c.rays.colours[3], Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_empty_cmfs() {
        let err = build_diagram_construction(&[]).unwrap_err();
        assert!(err.is_configuration_error());
    }
}

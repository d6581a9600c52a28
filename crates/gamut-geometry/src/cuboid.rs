//! Subdivided box generation.

use gamut_core::{Error, Result};
use gamut_math::Vec3;
use tracing::{debug, trace};

use crate::plane::procedural_colours;
use crate::{Direction, FaceMask, Mesh, generate_plane};

/// Generates a box centred on the origin from up to six planes.
///
/// Axes follow a Z-up convention: `width` runs along X, `depth` along Y and
/// `height` along Z. Each selected face is a [`generate_plane`] call with
/// the face's two in-plane extents and segment counts, pushed outward by
/// half the orthogonal extent. Faces are concatenated in the order
/// `-z, +z, -y, +y, -x, +x` with indices offset by the running vertex
/// count.
///
/// Vertex colours are recomputed over the whole box (positions min-max
/// normalised, no channel zeroed), so a unit box carries its RGB identity
/// colour once shifted into `[0, 1]³`.
///
/// # Errors
///
/// Configuration error on an empty `faces` mask, zero segment counts,
/// non-finite dimensions, or more vertices than `u32` indices can address.
pub fn generate_box(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
    faces: FaceMask,
) -> Result<Mesh> {
    trace!(
        width,
        height,
        depth,
        width_segments,
        height_segments,
        depth_segments,
        faces = faces.count(),
        "generate_box"
    );

    if faces.is_empty() {
        return Err(Error::configuration("box face mask must not be empty"));
    }
    if !depth.is_finite() {
        return Err(Error::configuration(format!(
            "box depth must be finite, got {depth}"
        )));
    }

    let (w_s, h_s, d_s) = (width_segments, height_segments, depth_segments);
    let mut mesh = Mesh::default();
    let mut vertex_total: u64 = 0;

    for direction in faces.iter() {
        let (mut face, offset) = match direction {
            Direction::NegZ | Direction::PosZ => (
                generate_plane(width, depth, w_s, d_s, direction)?,
                Vec3::Z * (height / 2.0),
            ),
            Direction::NegY | Direction::PosY => (
                generate_plane(height, width, h_s, w_s, direction)?,
                Vec3::Y * (depth / 2.0),
            ),
            Direction::NegX | Direction::PosX => (
                generate_plane(depth, height, d_s, h_s, direction)?,
                Vec3::X * (width / 2.0),
            ),
        };
        face.translate(offset * direction.sign());

        vertex_total += face.vertices.len() as u64;
        if vertex_total > u32::MAX as u64 {
            return Err(Error::configuration(
                "box vertex count exceeds u32 indices",
            ));
        }
        mesh.append(face);
    }

    let positions: Vec<Vec3> = mesh.positions().collect();
    for (v, colour) in mesh
        .vertices
        .iter_mut()
        .zip(procedural_colours(&positions, None))
    {
        v.colour = colour;
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        outline = mesh.outline.len(),
        "box generated"
    );
    Ok(mesh)
}

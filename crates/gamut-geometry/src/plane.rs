//! Subdivided plane generation.

use gamut_core::{Error, Result};
use gamut_math::{Vec2, Vec3, Vec4};
use tracing::{debug, trace};

use crate::{Direction, Mesh, Vertex};

/// Generates a subdivided plane centred on the origin.
///
/// The grid of `(width_segments + 1) * (height_segments + 1)` vertices is
/// laid out in the XY plane (width along X, height along -Y, UVs in
/// `[0, 1]²`, normal `+Z`) and then moved into place by a cyclic
/// permutation of the components:
///
/// | direction | shift | plane | normal |
/// |-----------|-------|-------|--------|
/// | `±x` | 1 | YZ (width on Y, height on Z) | `±X` |
/// | `±y` | -1 | ZX (width on Z, height on X) | `±Y` |
/// | `±z` | 0 | XY | `±Z` |
///
/// The sign only affects normals. Vertex colours are the positions
/// min-max normalised to `[0, 1]` over all components, with the channel of
/// the perpendicular axis zeroed and full opacity.
///
/// # Errors
///
/// Configuration error when a segment count is zero, a dimension is not
/// finite, or the vertex count does not fit a `u32` index.
///
/// # Example
///
/// ```rust
/// use gamut_geometry::{generate_plane, Direction};
///
/// let plane = generate_plane(2.0, 1.0, 4, 2, Direction::PosZ).unwrap();
/// assert_eq!(plane.vertices.len(), 5 * 3);
/// assert_eq!(plane.faces.len(), 2 * 4 * 2);
/// assert_eq!(plane.outline.len(), 4 * 4 * 2);
/// ```
pub fn generate_plane(
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
    direction: Direction,
) -> Result<Mesh> {
    trace!(width, height, width_segments, height_segments, %direction, "generate_plane");

    let mut mesh = plane_grid(width, height, width_segments, height_segments)?;

    let shift = direction.shift();
    let sign = direction.sign();
    for v in &mut mesh.vertices {
        v.position = v.position.roll(shift);
        v.normal = v.normal.roll(shift) * sign;
    }

    let positions: Vec<Vec3> = mesh.positions().collect();
    let colours = procedural_colours(&positions, Some(direction.axis()));
    for (v, colour) in mesh.vertices.iter_mut().zip(colours) {
        v.colour = colour;
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "plane generated"
    );
    Ok(mesh)
}

/// Flat `+z` grid without procedural colours.
fn plane_grid(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Result<Mesh> {
    if width_segments < 1 || height_segments < 1 {
        return Err(Error::configuration(format!(
            "plane segments must be >= 1, got {width_segments}x{height_segments}"
        )));
    }
    if !width.is_finite() || !height.is_finite() {
        return Err(Error::configuration(format!(
            "plane dimensions must be finite, got {width}x{height}"
        )));
    }

    let x_grid = width_segments;
    let y_grid = height_segments;
    let x_grid1 = x_grid + 1;
    let y_grid1 = y_grid + 1;

    let vertex_count = (x_grid1 as u64) * (y_grid1 as u64);
    if vertex_count > u32::MAX as u64 {
        return Err(Error::configuration(format!(
            "plane with {width_segments}x{height_segments} segments exceeds u32 indices"
        )));
    }

    let mut vertices = Vec::with_capacity(vertex_count as usize);
    for i_y in 0..y_grid1 {
        let y = i_y as f32 * height / y_grid as f32 - height / 2.0;
        for i_x in 0..x_grid1 {
            let x = i_x as f32 * width / x_grid as f32 - width / 2.0;
            vertices.push(Vertex {
                position: Vec3::new(x, -y, 0.0),
                normal: Vec3::Z,
                uv: Vec2::new(
                    i_x as f32 / x_grid as f32,
                    1.0 - i_y as f32 / y_grid as f32,
                ),
                colour: Vec4::ONE,
            });
        }
    }

    let cells = (x_grid as usize) * (y_grid as usize);
    let mut faces = Vec::with_capacity(cells * 2);
    let mut outline = Vec::with_capacity(cells * 4);
    for i_y in 0..y_grid {
        for i_x in 0..x_grid {
            let a = i_x + x_grid1 * i_y;
            let b = i_x + x_grid1 * (i_y + 1);
            let c = (i_x + 1) + x_grid1 * (i_y + 1);
            let d = (i_x + 1) + x_grid1 * i_y;

            faces.push([a, b, d]);
            faces.push([b, c, d]);

            outline.push([a, b]);
            outline.push([b, c]);
            outline.push([c, d]);
            outline.push([d, a]);
        }
    }

    Ok(Mesh {
        vertices,
        faces,
        outline,
    })
}

/// Colours from positions: every component min-max normalised over the
/// whole buffer, optional `neutral_axis` channel zeroed, alpha 1.
pub(crate) fn procedural_colours(positions: &[Vec3], neutral_axis: Option<usize>) -> Vec<Vec4> {
    let (min, max) = positions
        .iter()
        .flat_map(|p| p.to_array())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c), hi.max(c))
        });
    let range = max - min;

    positions
        .iter()
        .map(|p| {
            let mut c = if range > 0.0 {
                (*p - Vec3::splat(min)) / range
            } else {
                Vec3::ZERO
            };
            if let Some(axis) = neutral_axis {
                c[axis] = 0.0;
            }
            Vec4::new(c.x, c.y, c.z, 1.0)
        })
        .collect()
}

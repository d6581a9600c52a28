//! RGB colourspace triangles on chromaticity diagrams.

use tracing::trace;

use gamut_core::Result;
use gamut_geometry::Line;
use gamut_math::{Vec3, zero_non_finite2};
use gamut_models::ChromaticityDiagram;
use gamut_primaries::{ColourspaceDescriptor, plotting_illuminant, xy_to_xyz};

use crate::styles::LineStyle;

/// Colour used when the style has no uniform colour.
pub const DEFAULT_TRIANGLE_COLOUR: [f32; 3] = [0.8, 0.8, 0.8];

/// Builds the closed outline of the colourspace primaries on `diagram`.
///
/// Positions run `r, g, b, r` at `z = 0`; non-finite coordinates are
/// zeroed.
///
/// ```rust
/// use gamut_models::ChromaticityDiagram;
/// use gamut_primaries::{ColourspaceDescriptor, SRGB};
/// use gamut_visuals::{build_gamut_triangle, LineStyle};
///
/// let cs = ColourspaceDescriptor::from_primaries(&SRGB).unwrap();
/// let line = build_gamut_triangle(&cs, ChromaticityDiagram::Cie1931, &LineStyle::default()).unwrap();
/// assert!(line.is_closed());
/// assert_eq!(line.segment_count(), 3);
/// ```
pub fn build_gamut_triangle(
    colourspace: &ColourspaceDescriptor,
    diagram: ChromaticityDiagram,
    style: &LineStyle,
) -> Result<Line> {
    trace!(colourspace = %colourspace.name, diagram = %diagram, "build_gamut_triangle");
    colourspace.validate()?;

    let illuminant = plotting_illuminant();
    let mut positions: Vec<Vec3> = colourspace
        .primaries
        .iter()
        .map(|&xy| {
            let ij = zero_non_finite2(diagram.xyz_to_ij(xy_to_xyz(xy), illuminant));
            Vec3::new(ij.x, ij.y, 0.0)
        })
        .collect();
    positions.push(positions[0]);

    Ok(Line::strip(positions, style.colour_or(DEFAULT_TRIANGLE_COLOUR)))
}

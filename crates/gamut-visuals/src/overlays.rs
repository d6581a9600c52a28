//! Reference overlays: whitepoint axis, external gamut boundaries, axes.

use tracing::trace;

use gamut_core::{Error, Result};
use gamut_geometry::{Line, LineMode};
use gamut_math::{Vec2, Vec3, Vec4};
use gamut_models::{ReferenceModel, to_reference_model};
use gamut_primaries::{ColourspaceDescriptor, xyy_to_xyz};

use crate::styles::LineStyle;

/// Luminance the whitepoint axis reaches.
const WHITEPOINT_AXIS_TOP: f32 = 1.1;

/// Colour used for boundaries when the style has no uniform colour.
pub const DEFAULT_BOUNDARY_COLOUR: [f32; 3] = [0.9, 0.9, 0.9];

/// Builds the achromatic axis of `colourspace` in `model`.
///
/// A white segment from the whitepoint chromaticity at `Y = 0` to
/// `Y = 1.1`, transformed relative to `illuminant`.
pub fn build_whitepoint_axis(
    colourspace: &ColourspaceDescriptor,
    model: ReferenceModel,
    illuminant: Vec2,
) -> Result<Line> {
    trace!(colourspace = %colourspace.name, model = %model, "build_whitepoint_axis");
    colourspace.validate()?;

    let xyz = [
        xyy_to_xyz(colourspace.whitepoint, 0.0),
        xyy_to_xyz(colourspace.whitepoint, WHITEPOINT_AXIS_TOP),
    ];
    let positions = to_reference_model(&xyz, illuminant, model)?;
    Ok(Line::strip(positions, Vec4::ONE))
}

/// Builds a closed outline through caller-supplied boundary XYZ values.
///
/// Used for external gamut boundaries such as Pointer's gamut. The values
/// are transformed relative to `illuminant`; non-finite coordinates are
/// zeroed.
pub fn build_boundary_outline(
    xyz: &[Vec3],
    illuminant: Vec2,
    model: ReferenceModel,
    style: &LineStyle,
) -> Result<Line> {
    trace!(model = %model, points = xyz.len(), "build_boundary_outline");
    if xyz.len() < 2 {
        return Err(Error::configuration(format!(
            "boundary needs at least 2 points, got {}",
            xyz.len()
        )));
    }

    let mut positions = to_reference_model(xyz, illuminant, model)?;
    positions.push(positions[0]);
    Ok(Line::strip(positions, style.colour_or(DEFAULT_BOUNDARY_COLOUR)))
}

/// Builds three `scale` long segments from the origin along X, Y and Z,
/// coloured red, green and blue.
pub fn build_axes(scale: f32) -> Line {
    let axes = [
        (Vec3::X, Vec4::new(1.0, 0.0, 0.0, 1.0)),
        (Vec3::Y, Vec4::new(0.0, 1.0, 0.0, 1.0)),
        (Vec3::Z, Vec4::new(0.0, 0.0, 1.0, 1.0)),
    ];

    let mut line = Line {
        mode: LineMode::Segments,
        ..Default::default()
    };
    for (axis, colour) in axes {
        line.positions.extend([Vec3::ZERO, axis * scale]);
        line.colours.extend([colour, colour]);
    }
    line
}

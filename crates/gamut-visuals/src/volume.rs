//! RGB colourspace gamut volumes.

use tracing::{debug, trace};

use gamut_core::Result;
use gamut_geometry::{FaceMask, Mesh, generate_box};
use gamut_math::Vec3;
use gamut_models::{ReferenceModel, to_reference_model};
use gamut_primaries::ColourspaceDescriptor;

use crate::styles::{FillStyle, WireframeStyle, rgba};

/// Fill mesh of a gamut volume and its optional wireframe shell.
#[derive(Debug, Clone, PartialEq)]
pub struct GamutVolume {
    /// Triangulated surface.
    pub fill: Mesh,
    /// Same vertices drawn through the outline buffer, no faces.
    pub wireframe: Option<Mesh>,
}

/// Builds the `[0, 1]³` RGB identity cube.
///
/// Vertex positions double as RGB values and vertex colours are the
/// positions normalised to `[0, 1]` with full opacity.
///
/// ```rust
/// use gamut_visuals::build_rgb_identity_cube;
///
/// let cube = build_rgb_identity_cube(2).unwrap();
/// assert_eq!(cube.vertices.len(), 6 * 3 * 3);
/// assert!(cube.positions().all(|p| p.min_element() >= 0.0 && p.max_element() <= 1.0));
/// ```
pub fn build_rgb_identity_cube(segments: u32) -> Result<Mesh> {
    let mut cube = generate_box(1.0, 1.0, 1.0, segments, segments, segments, FaceMask::ALL)?;
    cube.translate(Vec3::splat(0.5));
    Ok(cube)
}

fn apply_style(mesh: &mut Mesh, uniform_colour: Option<[f32; 3]>, opacity: f32) {
    match uniform_colour {
        Some(rgb) => mesh.set_uniform_colour(rgba(rgb, opacity)),
        None => mesh.set_opacity(opacity),
    }
}

/// Builds the gamut volume of `colourspace` in `model`.
///
/// The RGB identity cube is converted to XYZ with the colourspace matrix
/// (no chromatic adaptation) and then to `model` relative to the
/// colourspace whitepoint. Vertex colours stay the RGB identity colours
/// unless a style requests a uniform colour. The wireframe shares every
/// vertex position with the fill.
///
/// # Errors
///
/// Returns a configuration error for an unusable descriptor or
/// `segments < 1`; nothing is built in that case.
pub fn build_gamut_volume(
    colourspace: &ColourspaceDescriptor,
    model: ReferenceModel,
    segments: u32,
    fill_style: &FillStyle,
    wireframe_style: Option<&WireframeStyle>,
) -> Result<GamutVolume> {
    trace!(colourspace = %colourspace.name, model = %model, segments, "build_gamut_volume");
    colourspace.validate()?;

    let mut base = build_rgb_identity_cube(segments)?;

    let xyz: Vec<Vec3> = base.positions().map(|rgb| colourspace.to_xyz(rgb)).collect();
    let points = to_reference_model(&xyz, colourspace.whitepoint, model)?;
    for (vertex, p) in base.vertices.iter_mut().zip(points) {
        vertex.position = p;
    }

    let wireframe = wireframe_style.map(|style| {
        let mut wire = base.to_wireframe();
        apply_style(&mut wire, style.uniform_colour, style.opacity);
        wire
    });

    let mut fill = base;
    apply_style(&mut fill, fill_style.uniform_colour, fill_style.opacity);

    debug!(
        vertices = fill.vertices.len(),
        faces = fill.faces.len(),
        wireframe = wireframe.is_some(),
        "gamut volume built"
    );

    Ok(GamutVolume { fill, wireframe })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamut_math::{Mat3, Vec2, Vec4};
    use gamut_primaries::SRGB;

    #[test]
    fn test_identity_cube_bounds() {
        let cube = build_rgb_identity_cube(3).unwrap();
        let min = cube.positions().fold(Vec3::splat(f32::MAX), Vec3::min);
        let max = cube.positions().fold(Vec3::splat(f32::MIN), Vec3::max);
        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::ONE);
    }

    #[test]
    fn test_fill_and_wireframe_share_positions() {
        let cs = ColourspaceDescriptor::from_primaries(&SRGB).unwrap();
        let v = build_gamut_volume(
            &cs,
            ReferenceModel::CieLab,
            4,
            &FillStyle::default(),
            Some(&WireframeStyle::default()),
        )
        .unwrap();
        let wire = v.wireframe.unwrap();
        assert!(wire.faces.is_empty());
        assert_eq!(wire.outline, v.fill.outline);
        assert!(v.fill.positions().eq(wire.positions()));
        assert!(v.fill.vertices.iter().all(|v| v.colour.w == 0.5));
        assert!(wire.vertices.iter().all(|v| v.colour.w == 1.0));
    }

    #[test]
    fn test_lab_lightness_range() {
        let cs = ColourspaceDescriptor::from_primaries(&SRGB).unwrap();
        let v = build_gamut_volume(&cs, ReferenceModel::CieLab, 2, &FillStyle::default(), None)
            .unwrap();
        let l_max = v.fill.positions().map(|p| p.z).fold(f32::MIN, f32::max);
        let l_min = v.fill.positions().map(|p| p.z).fold(f32::MAX, f32::min);
        assert!((l_max - 100.0).abs() < 0.1, "L max = {l_max}");
        assert!(l_min.abs() < 1e-3, "L min = {l_min}");
    }

    #[test]
    fn test_uniform_colour() {
        let cs = ColourspaceDescriptor::from_primaries(&SRGB).unwrap();
        let style = FillStyle {
            uniform_colour: Some([0.2, 0.4, 0.6]),
            opacity: 0.3,
        };
        let v = build_gamut_volume(&cs, ReferenceModel::CieXyz, 1, &style, None).unwrap();
        assert!(v.wireframe.is_none());
        assert!(v.fill.vertices.iter().all(|v| v.colour == Vec4::new(0.2, 0.4, 0.6, 0.3)));
    }

    #[test]
    fn test_singular_descriptor_fails_fast() {
        let cs = ColourspaceDescriptor {
            name: "broken".into(),
            whitepoint: Vec2::new(0.3127, 0.3290),
            rgb_to_xyz: Mat3::ZERO,
            primaries: [Vec2::ZERO; 3],
        };
        let err = build_gamut_volume(&cs, ReferenceModel::CieXyz, 4, &FillStyle::default(), None)
            .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_zero_segments() {
        let cs = ColourspaceDescriptor::from_primaries(&SRGB).unwrap();
        let err = build_gamut_volume(&cs, ReferenceModel::CieXyz, 0, &FillStyle::default(), None)
            .unwrap_err();
        assert!(err.is_configuration_error());
    }
}

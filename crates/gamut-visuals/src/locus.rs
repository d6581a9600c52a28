//! Spectral locus lines.

use tracing::{debug, trace};

use gamut_core::{Error, Result};
use gamut_geometry::Line;
use gamut_math::{Vec2, Vec3, Vec4};
use gamut_models::{ChromaticityDiagram, ReferenceModel, to_reference_model};
use gamut_primaries::{plotting_illuminant, srgb::xyz_to_srgb};

use crate::styles::{LineStyle, ToneMapping, rgba, rgba_vec};

fn check_cmfs(cmfs: &[Vec3]) -> Result<()> {
    if cmfs.len() < 2 {
        return Err(Error::configuration(format!(
            "spectral locus needs at least 2 CMF samples, got {}",
            cmfs.len()
        )));
    }
    Ok(())
}

/// Per-position colours: uniform, or the display colour of each stimulus.
fn locus_colours(xyz: &[Vec3], style: &LineStyle) -> Vec<Vec4> {
    match style.uniform_colour {
        Some(rgb) => vec![rgba(rgb, style.opacity); xyz.len()],
        None => xyz
            .iter()
            .map(|&v| rgba_vec(ToneMapping::NormaliseMaximum.apply(xyz_to_srgb(v)), style.opacity))
            .collect(),
    }
}

/// Builds the spectral locus in a reference model.
///
/// The CMF tristimulus values are transformed relative to `whitepoint`
/// and the line is closed back onto the first sample. Non-finite
/// coordinates are zeroed.
pub fn build_spectral_locus(
    cmfs: &[Vec3],
    whitepoint: Vec2,
    model: ReferenceModel,
    style: &LineStyle,
) -> Result<Line> {
    trace!(model = %model, samples = cmfs.len(), "build_spectral_locus");
    check_cmfs(cmfs)?;

    let mut xyz = cmfs.to_vec();
    xyz.push(cmfs[0]);

    let positions = to_reference_model(&xyz, whitepoint, model)?;
    let colours = locus_colours(&xyz, style);
    Ok(Line {
        positions,
        colours,
        ..Default::default()
    })
}

/// Builds the spectral locus on a chromaticity diagram.
///
/// Unlike [`build_spectral_locus`], samples whose projection is not
/// finite are dropped so the outline matches the diagram boundary. The
/// line is closed with `z = 0`.
pub fn build_spectral_locus_diagram(
    cmfs: &[Vec3],
    diagram: ChromaticityDiagram,
    style: &LineStyle,
) -> Result<Line> {
    trace!(diagram = %diagram, samples = cmfs.len(), "build_spectral_locus_diagram");
    check_cmfs(cmfs)?;

    let illuminant = plotting_illuminant();
    let (mut kept, mut positions): (Vec<Vec3>, Vec<Vec3>) = cmfs
        .iter()
        .filter_map(|&xyz| {
            let ij = diagram.xyz_to_ij(xyz, illuminant);
            ij.is_finite().then(|| (xyz, Vec3::new(ij.x, ij.y, 0.0)))
        })
        .unzip();

    let dropped = cmfs.len() - kept.len();
    if dropped > 0 {
        debug!(dropped, "dropped non-finite locus samples");
    }
    if kept.len() < 2 {
        return Err(Error::geometry(format!(
            "only {} finite locus samples on {diagram}",
            kept.len()
        )));
    }

    positions.push(positions[0]);
    kept.push(kept[0]);

    let colours = locus_colours(&kept, style);
    Ok(Line {
        positions,
        colours,
        ..Default::default()
    })
}

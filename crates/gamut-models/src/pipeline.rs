//! Batch XYZ to reference model pipeline.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use gamut_core::{Error, Result};
use gamut_math::{Vec2, Vec3};

use crate::model::ReferenceModel;
use crate::transforms::*;

/// Converts one XYZ value to `model`, lightness axis last.
///
/// Chromaticity-only models return `(i, j, 0)`. The result is raw: NaN
/// and infinity are passed through, see [`to_reference_model`] for the
/// sanitised batch form.
pub fn convert(xyz: Vec3, whitepoint: Vec2, model: ReferenceModel) -> Vec3 {
    let flat = |ij: Vec2| Vec3::new(ij.x, ij.y, 0.0);

    match model {
        ReferenceModel::CieXyz => xyz,
        ReferenceModel::CieXyy => xyz_to_xyy(xyz, whitepoint),
        ReferenceModel::CieXy => flat(xyz_to_xy(xyz, whitepoint)),
        ReferenceModel::CieLab => xyz_to_lab(xyz, whitepoint).roll(-1),
        ReferenceModel::CieLuv => xyz_to_luv(xyz, whitepoint).roll(-1),
        ReferenceModel::CieLuvUv => flat(xyz_to_luv_uv(xyz)),
        ReferenceModel::CieUcs => xyz_to_ucs(xyz),
        ReferenceModel::CieUcsUv => flat(xyz_to_ucs_uv(xyz)),
        ReferenceModel::CieUvw => xyz_to_uvw(xyz, whitepoint),
        ReferenceModel::Ipt => xyz_to_ipt(xyz).roll(-1),
        ReferenceModel::HunterLab => xyz_to_hunter_lab(xyz, whitepoint).roll(-1),
        ReferenceModel::HunterRdab => xyz_to_hunter_rdab(xyz, whitepoint).roll(-1),
    }
}

fn check_whitepoint(whitepoint: Vec2) -> Result<()> {
    if !whitepoint.is_finite() || whitepoint.y.abs() < 1e-10 {
        return Err(Error::configuration(format!(
            "invalid whitepoint ({}, {})",
            whitepoint.x, whitepoint.y
        )));
    }
    Ok(())
}

/// Converts XYZ samples to `model`.
///
/// Lightness-bearing models are reordered so lightness is the last
/// component. Every non-finite output component is replaced with zero.
///
/// # Errors
///
/// Returns a configuration error for a non-finite whitepoint or one with
/// `y = 0`.
///
/// # Example
///
/// ```rust
/// use gamut_models::{to_reference_model, ReferenceModel};
/// use gamut_math::{Vec2, Vec3};
///
/// let xyz = [Vec3::new(0.2, 0.3, 0.4)];
/// let out = to_reference_model(&xyz, Vec2::new(0.3127, 0.3290), ReferenceModel::CieXyz).unwrap();
/// assert_eq!(out[0], xyz[0]);
/// ```
pub fn to_reference_model(
    xyz: &[Vec3],
    whitepoint: Vec2,
    model: ReferenceModel,
) -> Result<Vec<Vec3>> {
    trace!(model = %model, samples = xyz.len(), "to_reference_model");
    check_whitepoint(whitepoint)?;

    let f = |v: &Vec3| convert(*v, whitepoint, model);

    #[cfg(feature = "parallel")]
    let mut out: Vec<Vec3> = xyz.par_iter().map(f).collect();
    #[cfg(not(feature = "parallel"))]
    let mut out: Vec<Vec3> = xyz.iter().map(f).collect();

    let mut zeroed = 0usize;
    for v in &mut out {
        if !v.is_finite() {
            *v = v.zero_non_finite();
            zeroed += 1;
        }
    }
    if zeroed > 0 {
        debug!(model = %model, zeroed, "zeroed non-finite samples");
        if zeroed == out.len() {
            warn!(model = %model, "every sample was non-finite");
        }
    }

    Ok(out)
}

/// Converts XYZ samples to a chromaticity-only model.
///
/// # Errors
///
/// Returns a configuration error when `model` is not one of `CIE xy`,
/// `CIE UCS uv` or `CIE Luv uv`, or for an invalid whitepoint.
pub fn to_reference_model_2d(
    xyz: &[Vec3],
    whitepoint: Vec2,
    model: ReferenceModel,
) -> Result<Vec<Vec2>> {
    if !model.is_chromaticity() {
        return Err(Error::configuration(format!(
            "{model} is not a chromaticity model"
        )));
    }
    let out = to_reference_model(xyz, whitepoint, model)?;
    Ok(out.into_iter().map(|v| Vec2::new(v.x, v.y)).collect())
}

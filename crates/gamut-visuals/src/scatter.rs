//! RGB sample clouds.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use gamut_core::{Error, Result};
use gamut_geometry::Points;
use gamut_math::{Vec3, Vec4};
use gamut_models::{ReferenceModel, to_reference_model};
use gamut_primaries::ColourspaceDescriptor;

use crate::styles::{LineStyle, rgba, rgba_vec};

/// Auto stride factor applied to the image height.
const AUTO_STRIDE_FACTOR: f32 = 0.0078125;

/// Pixel decimation applied before scattering an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resampling {
    /// Keep every pixel.
    None,
    /// Keep one pixel every `n` rows and columns.
    Stride(usize),
    /// Stride derived from the image height.
    #[default]
    Auto,
}

impl Resampling {
    /// Row and column stride for an image `height` pixels tall.
    pub fn stride(self, height: usize) -> usize {
        match self {
            Self::None => 1,
            Self::Stride(n) => n.max(1),
            Self::Auto => (((AUTO_STRIDE_FACTOR * height as f32) / 2.0).floor() as usize).max(1),
        }
    }

    /// Decimates a row-major `width`-pixel wide image.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `width` is zero or does not
    /// divide the pixel count.
    pub fn apply(self, rgb: &[Vec3], width: usize) -> Result<Vec<Vec3>> {
        if width == 0 || rgb.len() % width != 0 {
            return Err(Error::configuration(format!(
                "{} pixels do not form rows of width {width}",
                rgb.len()
            )));
        }
        let height = rgb.len() / width;
        let stride = self.stride(height);
        if stride == 1 {
            return Ok(rgb.to_vec());
        }
        Ok(rgb
            .chunks_exact(width)
            .step_by(stride)
            .flat_map(|row| row.iter().step_by(stride).copied())
            .collect())
    }
}

/// Builds a point cloud from RGB pixels of `colourspace` in `model`.
///
/// `rgb` is a row-major image `width` pixels wide; a flat sample list is
/// an image one pixel wide. Positions are model coordinates relative to
/// the colourspace whitepoint with non-finite values zeroed. Colours are
/// the input RGB clipped to `[0, 1]`, or the uniform style colour.
pub fn build_rgb_scatter(
    rgb: &[Vec3],
    width: usize,
    colourspace: &ColourspaceDescriptor,
    model: ReferenceModel,
    style: &LineStyle,
    resampling: Resampling,
) -> Result<Points> {
    trace!(
        colourspace = %colourspace.name,
        model = %model,
        pixels = rgb.len(),
        ?resampling,
        "build_rgb_scatter"
    );
    colourspace.validate()?;

    let samples = resampling.apply(rgb, width)?;
    debug!(kept = samples.len(), of = rgb.len(), "resampled scatter input");

    let to_xyz = |v: &Vec3| colourspace.to_xyz(*v);
    #[cfg(feature = "parallel")]
    let xyz: Vec<Vec3> = samples.par_iter().map(to_xyz).collect();
    #[cfg(not(feature = "parallel"))]
    let xyz: Vec<Vec3> = samples.iter().map(to_xyz).collect();

    let positions = to_reference_model(&xyz, colourspace.whitepoint, model)?;

    let colours: Vec<Vec4> = match style.uniform_colour {
        Some(c) => vec![rgba(c, style.opacity); samples.len()],
        None => samples
            .iter()
            .map(|v| rgba_vec(v.zero_non_finite().clamp01(), style.opacity))
            .collect(),
    };

    Ok(Points { positions, colours })
}

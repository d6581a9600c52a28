//! Resolved colourspace descriptor handed to the geometry engine.

use gamut_core::{Error, Result};
use gamut_math::{Mat3, Vec2, Vec3};
use tracing::debug;

use crate::{Primaries, rgb_to_xyz_matrix};

/// An RGB colourspace as seen by the engine.
///
/// Only the whitepoint, the RGB to XYZ matrix and the primaries matter;
/// the name is carried for logging. Builders call
/// [`ColourspaceDescriptor::validate`] before producing any geometry, so a
/// descriptor assembled by hand with a singular matrix fails fast.
///
/// ```rust
/// use gamut_primaries::ColourspaceDescriptor;
/// use gamut_math::{Mat3, Vec2};
///
/// let identity = ColourspaceDescriptor::new(
///     "identity",
///     [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0)],
///     Vec2::splat(1.0 / 3.0),
///     Mat3::IDENTITY,
/// )
/// .unwrap();
/// assert_eq!(identity.rgb_to_xyz, Mat3::IDENTITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColourspaceDescriptor {
    /// Display name, used in log messages only.
    pub name: String,
    /// Whitepoint xy chromaticity.
    pub whitepoint: Vec2,
    /// Linear RGB to CIE XYZ matrix.
    pub rgb_to_xyz: Mat3,
    /// Red, green and blue primaries as xy chromaticities.
    pub primaries: [Vec2; 3],
}

impl ColourspaceDescriptor {
    /// Creates a validated descriptor.
    pub fn new(
        name: impl Into<String>,
        primaries: [Vec2; 3],
        whitepoint: Vec2,
        rgb_to_xyz: Mat3,
    ) -> Result<Self> {
        let descriptor = Self {
            name: name.into(),
            whitepoint,
            rgb_to_xyz,
            primaries,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Derives a descriptor from primaries, computing the RGB to XYZ matrix.
    pub fn from_primaries(primaries: &Primaries) -> Result<Self> {
        let rgb_to_xyz = rgb_to_xyz_matrix(primaries).ok_or_else(|| {
            Error::configuration(format!(
                "primaries of '{}' are collinear, no RGB to XYZ matrix exists",
                primaries.name
            ))
        })?;
        debug!(name = primaries.name, "derived RGB to XYZ matrix");
        Self::new(
            primaries.name,
            primaries.xy(),
            primaries.whitepoint(),
            rgb_to_xyz,
        )
    }

    /// Checks that the matrix / whitepoint pair is usable.
    ///
    /// The matrix must be finite and invertible; the whitepoint must be
    /// finite with a non-zero `y`; primaries must be finite.
    pub fn validate(&self) -> Result<()> {
        if !self.rgb_to_xyz.is_finite() {
            return Err(Error::configuration(format!(
                "colourspace '{}' has a non-finite RGB to XYZ matrix",
                self.name
            )));
        }
        if self.rgb_to_xyz.inverse().is_none() {
            return Err(Error::configuration(format!(
                "colourspace '{}' has a singular RGB to XYZ matrix",
                self.name
            )));
        }
        if !self.whitepoint.is_finite() || self.whitepoint.y.abs() < 1e-10 {
            return Err(Error::configuration(format!(
                "colourspace '{}' has an invalid whitepoint ({}, {})",
                self.name, self.whitepoint.x, self.whitepoint.y
            )));
        }
        if self.primaries.iter().any(|p| !p.is_finite()) {
            return Err(Error::configuration(format!(
                "colourspace '{}' has non-finite primaries",
                self.name
            )));
        }
        Ok(())
    }

    /// Linear RGB to XYZ, no chromatic adaptation.
    #[inline]
    pub fn to_xyz(&self, rgb: Vec3) -> Vec3 {
        self.rgb_to_xyz * rgb
    }

    /// Inverse matrix, XYZ to linear RGB.
    pub fn xyz_to_rgb(&self) -> Result<Mat3> {
        self.rgb_to_xyz.inverse().ok_or_else(|| {
            Error::configuration(format!(
                "colourspace '{}' has a singular RGB to XYZ matrix",
                self.name
            ))
        })
    }
}

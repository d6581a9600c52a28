//! # gamut-primaries
//!
//! Colourspace descriptors and the RGB to XYZ matrices behind them.
//!
//! The geometry engine never looks colourspaces up by name: callers resolve
//! a [`ColourspaceDescriptor`] (whitepoint, RGB to XYZ matrix, primaries)
//! from their own registry and hand it in. This crate provides the
//! descriptor type, its validation, and the standard primaries most
//! registries start from.
//!
//! # Usage
//!
//! ```rust
//! use gamut_primaries::{ColourspaceDescriptor, SRGB};
//! use gamut_math::Vec3;
//!
//! let srgb = ColourspaceDescriptor::from_primaries(&SRGB).unwrap();
//! let white = srgb.rgb_to_xyz * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod descriptor;
pub mod srgb;

pub use descriptor::ColourspaceDescriptor;

use gamut_math::{Mat3, Vec2, Vec3};

/// RGB colourspace primaries definition.
///
/// Three primaries and a white point, all as CIE xy chromaticities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
    /// Colourspace name
    pub name: &'static str,
}

impl Primaries {
    /// Primaries as an `[r, g, b]` array of xy coordinates.
    #[inline]
    pub fn xy(&self) -> [Vec2; 3] {
        [self.r.into(), self.g.into(), self.b.into()]
    }

    /// White point as xy.
    #[inline]
    pub fn whitepoint(&self) -> Vec2 {
        self.w.into()
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity, CIE 1931 2 degree observer.
///
/// Also the illuminant used to plot spectral loci and chromaticity diagrams.
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

/// D50 white point chromaticity.
pub const D50_XY: (f32, f32) = (0.34567, 0.35850);

/// D60 white point chromaticity (ACES).
pub const D60_XY: (f32, f32) = (0.32168, 0.33767);

/// DCI white point chromaticity.
pub const DCI_XY: (f32, f32) = (0.31400, 0.35100);

/// CIE illuminant C chromaticity, the reference white of Pointer's gamut.
pub const C_XY: (f32, f32) = (0.31006, 0.31616);

/// Illuminant used for diagrams, loci and overlays.
#[inline]
pub fn plotting_illuminant() -> Vec2 {
    D65_XY.into()
}

// ============================================================================
// Standard Colourspace Primaries
// ============================================================================

/// sRGB / ITU-R BT.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// ITU-R BT.2020 primaries (D65 white point).
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "ITU-R BT.2020",
};

/// DCI-P3 primaries (DCI white point).
pub const DCI_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: DCI_XY,
    name: "DCI-P3",
};

/// Display P3 primaries (D65 white point).
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Display P3",
};

/// ACES AP0 primaries (ACES2065-1, D60 white point).
///
/// The blue primary has a negative y, so its projection into some
/// chromaticity diagrams lands outside the spectral locus.
pub const ACES_AP0: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.0000, 1.0000),
    b: (0.0001, -0.0770),
    w: D60_XY,
    name: "ACES2065-1",
};

/// ACES AP1 primaries (ACEScg, D60 white point).
pub const ACES_AP1: Primaries = Primaries {
    r: (0.7130, 0.2930),
    g: (0.1650, 0.8300),
    b: (0.1280, 0.0440),
    w: D60_XY,
    name: "ACEScg",
};

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Adobe RGB (1998)",
};

/// ProPhoto RGB primaries (D50 white point).
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
    w: D50_XY,
    name: "ProPhoto RGB",
};

/// Every primaries set shipped with this crate.
pub const STANDARD_PRIMARIES: [Primaries; 8] = [
    SRGB,
    REC2020,
    DCI_P3,
    DISPLAY_P3,
    ACES_AP0,
    ACES_AP1,
    ADOBE_RGB,
    PROPHOTO_RGB,
];

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ with `Y = 1`.
///
/// Returns zero when `y` is zero.
#[inline]
pub fn xy_to_xyz(xy: Vec2) -> Vec3 {
    xyy_to_xyz(xy, 1.0)
}

/// Converts xy chromaticity and luminance `Y` to XYZ.
///
/// Returns zero when `y` is zero.
#[inline]
pub fn xyy_to_xyz(xy: Vec2, luminance: f32) -> Vec3 {
    if xy.y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(
            xy.x * luminance / xy.y,
            luminance,
            (1.0 - xy.x - xy.y) * luminance / xy.y,
        )
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Columns are the primaries' XYZ (with `Y = 1`) scaled so that RGB white
/// maps onto the white point. Returns `None` when the primaries are
/// collinear.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r.into());
    let g_xyz = xy_to_xyz(primaries.g.into());
    let b_xyz = xy_to_xyz(primaries.b.into());
    let w_xyz = xy_to_xyz(primaries.w.into());

    // Solve M * S = W for the per-primary scale S
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse()? * w_xyz;

    Some(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

/// Computes the XYZ to RGB matrix for a set of primaries.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries)?.inverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();
        assert!((m.m[0][0] - 0.4124564).abs() < 0.001);
        assert!((m.m[1][0] - 0.2126729).abs() < 0.001);
        assert!((m.m[2][2] - 0.9503041).abs() < 0.001);
    }

    #[test]
    fn test_white_maps_to_whitepoint() {
        for space in STANDARD_PRIMARIES {
            let m = rgb_to_xyz_matrix(&space).unwrap();
            let white = m * Vec3::ONE;
            assert!((white.y - 1.0).abs() < 1e-2, "{} white Y = {}", space.name, white.y);
            let x = white.x / white.sum();
            assert!((x - space.w.0).abs() < 1e-2, "{} white x = {}", space.name, x);
        }
    }

    #[test]
    fn test_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&SRGB).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&SRGB).unwrap();

        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = to_rgb * (to_xyz * rgb);

        assert!((rgb.x - back.x).abs() < 0.001);
        assert!((rgb.y - back.y).abs() < 0.001);
        assert!((rgb.z - back.z).abs() < 0.001);
    }

    #[test]
    fn test_collinear_primaries() {
        let flat = Primaries {
            r: (0.2, 0.2),
            g: (0.4, 0.4),
            b: (0.6, 0.6),
            w: D65_XY,
            name: "flat",
        };
        assert!(rgb_to_xyz_matrix(&flat).is_none());
    }

    #[test]
    fn test_xy_to_xyz() {
        let xyz = xy_to_xyz(Vec2::new(0.25, 0.5));
        assert_eq!(xyz, Vec3::new(0.5, 1.0, 0.5));
        assert_eq!(xy_to_xyz(Vec2::new(0.3, 0.0)), Vec3::ZERO);
        assert_eq!(xyy_to_xyz(Vec2::new(0.25, 0.5), 0.0), Vec3::ZERO);
    }
}

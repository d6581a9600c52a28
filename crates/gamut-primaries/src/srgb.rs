//! sRGB display encoding.
//!
//! Diagram and locus vertex colours are shown on an sRGB display: XYZ
//! (relative to D65) goes through [`XYZ_TO_SRGB`] and then the sRGB
//! inverse EOTF.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use gamut_math::{Mat3, Vec3};

/// XYZ (D65) to linear sRGB matrix.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// sRGB OETF: encodes linear light to sRGB.
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// Negative input stays on the linear segment, so the result is never NaN.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts D65-relative XYZ to encoded (display) sRGB, unclipped.
#[inline]
pub fn xyz_to_srgb(xyz: Vec3) -> Vec3 {
    (XYZ_TO_SRGB * xyz).map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oetf_segments() {
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(0.0031308) - 0.04045).abs() < 1e-5);
        assert!((oetf(0.18) - 0.46135).abs() < 1e-4);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_stays_finite() {
        assert!(oetf(-0.5).is_finite());
        assert!(oetf(-0.5) < 0.0);
    }

    #[test]
    fn test_d65_white_is_display_white() {
        let white = xyz_to_srgb(Vec3::new(0.95047, 1.0, 1.08883));
        assert!((white.x - 1.0).abs() < 1e-3);
        assert!((white.y - 1.0).abs() < 1e-3);
        assert!((white.z - 1.0).abs() < 1e-3);
    }
}

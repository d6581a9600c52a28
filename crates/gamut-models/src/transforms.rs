//! XYZ to colour model transforms.
//!
//! Functions here return raw model coordinates in the model's natural
//! component order and may produce NaN or infinity on degenerate input
//! (black, coordinate poles). The batch pipeline reorders axes and zeroes
//! non-finite values.
//!
//! Input XYZ uses the `[0, 1]` domain (`Y = 1` for the reference white).
//! Models defined on the `[0, 100]` domain (`CIE UVW`, Hunter) scale
//! internally.

use gamut_math::{Mat3, Vec2, Vec3};
use gamut_primaries::xy_to_xyz;

/// CIE ε = 216 / 24389.
const CIE_E: f32 = 216.0 / 24389.0;

/// CIE κ = 24389 / 27.
const CIE_K: f32 = 24389.0 / 27.0;

/// IPT XYZ (D65) to LMS matrix.
const IPT_XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0000, 0.0000, 0.9184],
]);

/// IPT non-linear LMS to IPT matrix.
const IPT_LMS_TO_IPT: Mat3 = Mat3::from_rows([
    [0.4000, 0.4000, 0.2000],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
]);

/// Sign preserving power.
#[inline]
fn spow(a: f32, p: f32) -> f32 {
    a.signum() * a.abs().powf(p)
}

/// XYZ to xyY.
///
/// Black maps to the whitepoint chromaticity with `Y = 0`.
pub fn xyz_to_xyy(xyz: Vec3, whitepoint: Vec2) -> Vec3 {
    let xy = xyz_to_xy(xyz, whitepoint);
    Vec3::new(xy.x, xy.y, xyz.y)
}

/// XYZ to xy chromaticity; black maps to the whitepoint.
pub fn xyz_to_xy(xyz: Vec3, whitepoint: Vec2) -> Vec2 {
    if xyz == Vec3::ZERO {
        return whitepoint;
    }
    let sum = xyz.sum();
    Vec2::new(xyz.x / sum, xyz.y / sum)
}

/// CIE lightness companding.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > CIE_E {
        t.cbrt()
    } else {
        (CIE_K * t + 16.0) / 116.0
    }
}

/// XYZ to CIE L*a*b*, as `(L, a, b)`.
pub fn xyz_to_lab(xyz: Vec3, whitepoint: Vec2) -> Vec3 {
    let n = xy_to_xyz(whitepoint);
    let f = (xyz / n).map(lab_f);
    Vec3::new(116.0 * f.y - 16.0, 500.0 * (f.x - f.y), 200.0 * (f.y - f.z))
}

#[inline]
fn lab_f_inv(f: f32) -> f32 {
    let t = f * f * f;
    if t > CIE_E { t } else { (116.0 * f - 16.0) / CIE_K }
}

/// CIE L*a*b* `(L, a, b)` to XYZ.
pub fn lab_to_xyz(lab: Vec3, whitepoint: Vec2) -> Vec3 {
    let fy = (lab.x + 16.0) / 116.0;
    let f = Vec3::new(fy + lab.y / 500.0, fy, fy - lab.z / 200.0);
    f.map(lab_f_inv) * xy_to_xyz(whitepoint)
}

/// CIE LCh(ab) `(L, C, h)`, hue in degrees, to L*a*b*.
pub fn lchab_to_lab(lch: Vec3) -> Vec3 {
    let (sin, cos) = lch.z.to_radians().sin_cos();
    Vec3::new(lch.x, lch.y * cos, lch.y * sin)
}

/// XYZ to CIE 1976 UCS u'v'.
pub fn xyz_to_luv_uv(xyz: Vec3) -> Vec2 {
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    Vec2::new(4.0 * xyz.x / d, 9.0 * xyz.y / d)
}

/// XYZ to CIE L*u*v*, as `(L, u, v)`.
pub fn xyz_to_luv(xyz: Vec3, whitepoint: Vec2) -> Vec3 {
    let n = xy_to_xyz(whitepoint);
    let yr = xyz.y / n.y;
    let l = if yr > CIE_E {
        116.0 * yr.cbrt() - 16.0
    } else {
        CIE_K * yr
    };
    let uv = xyz_to_luv_uv(xyz);
    let uv_n = xyz_to_luv_uv(n);
    Vec3::new(l, 13.0 * l * (uv.x - uv_n.x), 13.0 * l * (uv.y - uv_n.y))
}

/// XYZ to CIE 1960 UCS `UVW`.
pub fn xyz_to_ucs(xyz: Vec3) -> Vec3 {
    Vec3::new(
        2.0 / 3.0 * xyz.x,
        xyz.y,
        0.5 * (-xyz.x + 3.0 * xyz.y + xyz.z),
    )
}

/// XYZ to CIE 1960 UCS uv.
pub fn xyz_to_ucs_uv(xyz: Vec3) -> Vec2 {
    let ucs = xyz_to_ucs(xyz);
    let sum = ucs.sum();
    Vec2::new(ucs.x / sum, ucs.y / sum)
}

/// xy chromaticity to CIE 1960 UCS uv.
pub fn xy_to_ucs_uv(xy: Vec2) -> Vec2 {
    let d = -2.0 * xy.x + 12.0 * xy.y + 3.0;
    Vec2::new(4.0 * xy.x / d, 6.0 * xy.y / d)
}

/// CIE 1960 UCS uv to xy chromaticity.
pub fn ucs_uv_to_xy(uv: Vec2) -> Vec2 {
    let d = 2.0 * uv.x - 8.0 * uv.y + 4.0;
    Vec2::new(3.0 * uv.x / d, 2.0 * uv.y / d)
}

/// CIE 1976 UCS u'v' to xy chromaticity.
pub fn luv_uv_to_xy(uv: Vec2) -> Vec2 {
    let d = 6.0 * uv.x - 16.0 * uv.y + 12.0;
    Vec2::new(9.0 * uv.x / d, 4.0 * uv.y / d)
}

/// XYZ to CIE 1964 U*V*W*.
///
/// Defined on the `[0, 100]` domain; XYZ is scaled by 100 first.
pub fn xyz_to_uvw(xyz: Vec3, whitepoint: Vec2) -> Vec3 {
    let xyz = xyz * 100.0;
    let uv = xyz_to_ucs_uv(xyz);
    let uv_0 = xy_to_ucs_uv(whitepoint);

    let w = 25.0 * spow(xyz.y, 1.0 / 3.0) - 17.0;
    Vec3::new(13.0 * w * (uv.x - uv_0.x), 13.0 * w * (uv.y - uv_0.y), w)
}

/// XYZ (D65) to IPT, as `(I, P, T)`.
pub fn xyz_to_ipt(xyz: Vec3) -> Vec3 {
    let lms = (IPT_XYZ_TO_LMS * xyz).map(|c| spow(c, 0.43));
    IPT_LMS_TO_IPT * lms
}

/// Hunter `K_a`, `K_b` chromaticity coefficients for a reference white
/// given in the `[0, 100]` domain.
fn hunter_k_ab(n: Vec3) -> (f32, f32) {
    (175.0 / 198.04 * (n.x + n.y), 70.0 / 218.11 * (n.y + n.z))
}

/// XYZ to Hunter L,a,b, as `(L, a, b)`.
///
/// Defined on the `[0, 100]` domain; XYZ and the reference white are
/// scaled by 100 first.
pub fn xyz_to_hunter_lab(xyz: Vec3, whitepoint: Vec2) -> Vec3 {
    let xyz = xyz * 100.0;
    let n = xy_to_xyz(whitepoint) * 100.0;
    let (k_a, k_b) = hunter_k_ab(n);

    let y_yn = xyz.y / n.y;
    let sqrt_y_yn = y_yn.sqrt();

    Vec3::new(
        100.0 * sqrt_y_yn,
        k_a * ((xyz.x / n.x - y_yn) / sqrt_y_yn),
        k_b * ((y_yn - xyz.z / n.z) / sqrt_y_yn),
    )
}

/// XYZ to Hunter Rd,a,b, as `(Rd, a, b)`.
///
/// Defined on the `[0, 100]` domain like [`xyz_to_hunter_lab`].
pub fn xyz_to_hunter_rdab(xyz: Vec3, whitepoint: Vec2) -> Vec3 {
    let xyz = xyz * 100.0;
    let n = xy_to_xyz(whitepoint) * 100.0;
    let (k_a, k_b) = hunter_k_ab(n);

    let f = 0.51 * ((21.0 + 0.2 * xyz.y) / (1.0 + 0.2 * xyz.y));
    let y_yn = xyz.y / n.y;

    Vec3::new(
        xyz.y,
        k_a * f * (xyz.x / n.x - y_yn),
        k_b * f * (y_yn - xyz.z / n.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const D65: Vec2 = Vec2::new(0.3127, 0.3290);

    fn d65_white() -> Vec3 {
        xy_to_xyz(D65)
    }

    #[test]
    fn test_xyy_black_is_whitepoint() {
        let xyy = xyz_to_xyy(Vec3::ZERO, D65);
        assert_eq!(xyy, Vec3::new(0.3127, 0.3290, 0.0));
    }

    #[test]
    fn test_lab_white_and_grey() {
        let lab = xyz_to_lab(d65_white(), D65);
        assert!((lab.x - 100.0).abs() < 1e-3);
        assert!(lab.y.abs() < 1e-3 && lab.z.abs() < 1e-3);

        // 18% grey has L* ~ 49.5
        let grey = xyz_to_lab(d65_white() * 0.18, D65);
        assert!((grey.x - 49.496).abs() < 0.01, "L = {}", grey.x);
    }

    #[test]
    fn test_lab_known_value() {
        // sRGB red under D65
        let lab = xyz_to_lab(Vec3::new(0.4124564, 0.2126729, 0.0193339), D65);
        assert!((lab.x - 53.24).abs() < 0.05, "L = {}", lab.x);
        assert!((lab.y - 80.09).abs() < 0.2, "a = {}", lab.y);
        assert!((lab.z - 67.20).abs() < 0.2, "b = {}", lab.z);
    }

    #[test]
    fn test_lab_inverse() {
        let red = Vec3::new(0.4124564, 0.2126729, 0.0193339);
        let back = lab_to_xyz(xyz_to_lab(red, D65), D65);
        assert!((back - red).map(f32::abs).max_element() < 1e-5, "{back:?}");

        // Dark values go through the linear segment
        let dark = d65_white() * 0.002;
        let back = lab_to_xyz(xyz_to_lab(dark, D65), D65);
        assert!((back - dark).map(f32::abs).max_element() < 1e-6, "{back:?}");
    }

    #[test]
    fn test_lchab_to_lab() {
        let lab = lchab_to_lab(Vec3::new(50.0, 20.0, 90.0));
        assert_eq!(lab.x, 50.0);
        assert!(lab.y.abs() < 1e-5);
        assert!((lab.z - 20.0).abs() < 1e-5);

        let lab = lchab_to_lab(Vec3::new(30.0, 10.0, 180.0));
        assert!((lab.y + 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_luv_white_and_black() {
        let luv = xyz_to_luv(d65_white(), D65);
        assert!((luv.x - 100.0).abs() < 1e-3);
        assert!(luv.y.abs() < 1e-3 && luv.z.abs() < 1e-3);
        assert!(xyz_to_luv(Vec3::ZERO, D65).is_nan());
    }

    #[test]
    fn test_uv_conversions_roundtrip() {
        let xy = Vec2::new(0.64, 0.33);
        let back = ucs_uv_to_xy(xy_to_ucs_uv(xy));
        assert!((back - xy).abs().max_element() < 1e-6);

        let xyz = xy_to_xyz(xy);
        let uv = xyz_to_luv_uv(xyz);
        let back = luv_uv_to_xy(uv);
        assert!((back - xy).abs().max_element() < 1e-6);

        // 1960 v is 2/3 of 1976 v'
        let uv60 = xyz_to_ucs_uv(xyz);
        assert!((uv60.x - uv.x).abs() < 1e-6);
        assert!((uv60.y - uv.y * 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_uvw_white() {
        let uvw = xyz_to_uvw(d65_white(), D65);
        // W* = 25 * 100^(1/3) - 17
        assert!((uvw.z - 99.04).abs() < 0.01, "W = {}", uvw.z);
        assert!(uvw.x.abs() < 1e-3 && uvw.y.abs() < 1e-3);
    }

    #[test]
    fn test_ipt_white() {
        let ipt = xyz_to_ipt(Vec3::new(0.95047, 1.0, 1.08883));
        assert!((ipt.x - 1.0).abs() < 0.01, "I = {}", ipt.x);
        assert!(ipt.y.abs() < 0.01 && ipt.z.abs() < 0.01);
    }

    #[test]
    fn test_hunter_white() {
        let lab = xyz_to_hunter_lab(d65_white(), D65);
        assert!((lab.x - 100.0).abs() < 1e-3);
        assert!(lab.y.abs() < 1e-3 && lab.z.abs() < 1e-3);
        assert!(xyz_to_hunter_lab(Vec3::ZERO, D65).is_nan());

        let rdab = xyz_to_hunter_rdab(d65_white(), D65);
        assert!((rdab.x - 100.0).abs() < 1e-3);
        assert!(rdab.y.abs() < 1e-3 && rdab.z.abs() < 1e-3);
    }

    #[test]
    fn test_hunter_k_ab_d65() {
        let (k_a, k_b) = hunter_k_ab(d65_white() * 100.0);
        assert!((k_a - 172.35).abs() < 0.1, "Ka = {k_a}");
        assert!((k_b - 67.05).abs() < 0.1, "Kb = {k_b}");
    }
}

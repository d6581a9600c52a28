//! Analytic CIE 1931 2° colour matching functions.
//!
//! Multi-lobe piecewise Gaussian fit of the CIE 1931 2° standard observer
//! from Wyman, Sloan & Shirley, "Simple Analytic Approximations to the CIE
//! XYZ Color Matching Functions", JCGT 2(2), 2013.
//!
//! The fit only traces the spectral locus faithfully inside [`FIT_RANGE`];
//! further out its tails decay at the wrong rates and the locus folds
//! back on itself. The real locus barely moves past either end of the
//! range, so the line of purples closes it with little visible loss.
//!
//! Tabulated CMFs work just as well: every builder takes CMF values as a
//! plain `&[Vec3]`.

use gamut_core::{Error, Result};
use gamut_math::Vec3;

/// Wavelength range in nm where the fitted locus is usable.
pub const FIT_RANGE: (f32, f32) = (420.0, 645.0);

/// Piecewise Gaussian with different spreads either side of the mean.
#[inline]
fn g(x: f32, mu: f32, sigma_1: f32, sigma_2: f32) -> f32 {
    let t = (x - mu) / if x < mu { sigma_1 } else { sigma_2 };
    (-0.5 * t * t).exp()
}

/// CIE 1931 2° tristimulus values of a monochromatic stimulus.
///
/// `wavelength` is in nanometres.
pub fn cie_1931_2_degree_at(wavelength: f32) -> Vec3 {
    let l = wavelength;
    Vec3::new(
        1.056 * g(l, 599.8, 37.9, 31.0) + 0.362 * g(l, 442.0, 16.0, 26.7)
            - 0.065 * g(l, 501.1, 20.4, 26.2),
        0.821 * g(l, 568.8, 46.9, 40.5) + 0.286 * g(l, 530.9, 16.3, 31.1),
        1.217 * g(l, 437.0, 11.8, 36.0) + 0.681 * g(l, 459.0, 26.0, 13.8),
    )
}

/// Samples the CIE 1931 2° observer over `[start, end]` every `step` nm.
///
/// # Errors
///
/// Returns a configuration error for an empty or non-finite range, a
/// non-positive step, or a range reaching outside [`FIT_RANGE`].
///
/// ```rust
/// use gamut_visuals::cmfs;
///
/// let values = cmfs::cie_1931_2_degree(420.0, 645.0, 5.0).unwrap();
/// assert_eq!(values.len(), 46);
/// ```
pub fn cie_1931_2_degree(start: f32, end: f32, step: f32) -> Result<Vec<Vec3>> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) || step <= 0.0 || end < start {
        return Err(Error::configuration(format!(
            "invalid wavelength range {start}..={end} step {step}"
        )));
    }
    if start < FIT_RANGE.0 || end > FIT_RANGE.1 {
        return Err(Error::configuration(format!(
            "wavelength range {start}..={end} is outside the fitted range {}..={}",
            FIT_RANGE.0, FIT_RANGE.1
        )));
    }
    let count = ((end - start) / step).floor() as usize + 1;
    Ok((0..count)
        .map(|i| cie_1931_2_degree_at(start + i as f32 * step))
        .collect())
}

/// The whole [`FIT_RANGE`] sampled every nanometre.
pub fn cie_1931_2_degree_fitted() -> Vec<Vec3> {
    let (start, end) = FIT_RANGE;
    (start as u32..=end as u32)
        .map(|l| cie_1931_2_degree_at(l as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peaks() {
        // y-bar peaks near 555 nm at ~1.0
        let y = cie_1931_2_degree_at(555.0).y;
        assert!((y - 1.0).abs() < 0.03, "y(555) = {y}");
        // z-bar peaks near 445 nm at ~1.78
        let z = cie_1931_2_degree_at(445.0).z;
        assert!((z - 1.78).abs() < 0.1, "z(445) = {z}");
        // x-bar secondary lobe
        let x = cie_1931_2_degree_at(600.0).x;
        assert!((x - 1.06).abs() < 0.05, "x(600) = {x}");
    }

    #[test]
    fn test_locus_extremes() {
        // Long wavelengths approach x ~ 0.72
        let v = cie_1931_2_degree_at(640.0);
        let x = v.x / v.sum();
        assert!((x - 0.719).abs() < 0.01, "x(640) = {x}");
        // 520 nm is the green apex with y ~ 0.83
        let v = cie_1931_2_degree_at(520.0);
        let y = v.y / v.sum();
        assert!((y - 0.834).abs() < 0.03, "y(520) = {y}");
    }

    #[test]
    fn test_range() {
        assert_eq!(cie_1931_2_degree(420.0, 645.0, 1.0).unwrap().len(), 226);
        assert_eq!(cie_1931_2_degree_fitted(), cie_1931_2_degree(420.0, 645.0, 1.0).unwrap());
        assert_eq!(cie_1931_2_degree(500.0, 500.0, 10.0).unwrap().len(), 1);
        assert!(cie_1931_2_degree(600.0, 500.0, 1.0).is_err());
        assert!(cie_1931_2_degree(450.0, 600.0, 0.0).is_err());
        assert!(cie_1931_2_degree(380.0, 780.0, 1.0).unwrap_err().is_configuration_error());
    }
}

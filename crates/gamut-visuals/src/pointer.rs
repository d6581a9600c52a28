//! Pointer's gamut overlays.
//!
//! Pointer's gamut is the set of real surface colours measured by
//! M. R. Pointer (1980). It ships as two tables: the xy chromaticities of
//! its outer boundary, and maximum chroma samples given as LCh(ab) rows
//! under illuminant C, lightness-major, [`POINTER_GAMUT_RINGS`] lightness
//! levels with the same number of hues each.
//!
//! The tables are caller data: [`PointerGamut`] deserialises from any serde
//! format and is validated before use.
//!
//! ```rust
//! use gamut_models::ReferenceModel;
//! use gamut_visuals::{LineStyle, PointerGamut, build_pointer_gamut_hull};
//!
//! let volume = (0..16)
//!     .flat_map(|l| (0..8).map(move |h| [15.0 + 5.0 * l as f32, 25.0, 45.0 * h as f32]))
//!     .collect();
//! let gamut = PointerGamut {
//!     boundary: vec![[0.6, 0.3], [0.3, 0.6], [0.15, 0.06]],
//!     volume,
//! };
//! let hull = build_pointer_gamut_hull(&gamut, ReferenceModel::CieLab, &LineStyle::default())
//!     .unwrap();
//! assert_eq!(hull.len(), 16);
//! assert!(hull.iter().all(|ring| ring.is_closed()));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use gamut_core::{Error, Result};
use gamut_geometry::{Line, Points};
use gamut_math::{Vec2, Vec3};
use gamut_models::transforms::{lab_to_xyz, lchab_to_lab};
use gamut_models::{ReferenceModel, to_reference_model};
use gamut_primaries::{C_XY, plotting_illuminant, xy_to_xyz};

use crate::overlays::{DEFAULT_BOUNDARY_COLOUR, build_boundary_outline};
use crate::styles::LineStyle;

/// Number of lightness levels in the volume table.
pub const POINTER_GAMUT_RINGS: usize = 16;

/// Reference white of the volume table (illuminant C).
#[inline]
pub fn pointer_gamut_illuminant() -> Vec2 {
    C_XY.into()
}

/// Pointer's gamut measurement tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerGamut {
    /// Outer boundary chromaticities, xy.
    pub boundary: Vec<[f32; 2]>,
    /// Maximum chroma samples as `(L, C, h)` rows, hue in degrees.
    pub volume: Vec<[f32; 3]>,
}

impl PointerGamut {
    /// Checks the table shapes.
    ///
    /// The boundary needs at least 3 chromaticities. The volume must split
    /// into [`POINTER_GAMUT_RINGS`] rings of at least 3 samples.
    pub fn validate(&self) -> Result<()> {
        if self.boundary.len() < 3 {
            return Err(Error::configuration(format!(
                "pointer gamut boundary needs at least 3 chromaticities, got {}",
                self.boundary.len()
            )));
        }
        let n = self.volume.len();
        if n % POINTER_GAMUT_RINGS != 0 || n / POINTER_GAMUT_RINGS < 3 {
            return Err(Error::configuration(format!(
                "pointer gamut volume must hold {POINTER_GAMUT_RINGS} rings of at least 3 samples, got {n} rows"
            )));
        }
        Ok(())
    }

    /// Boundary chromaticities as XYZ with `Y = 1`.
    pub fn boundary_xyz(&self) -> Vec<Vec3> {
        self.boundary
            .iter()
            .map(|&xy| xy_to_xyz(Vec2::from(xy)))
            .collect()
    }

    /// Volume samples as XYZ relative to [`pointer_gamut_illuminant`].
    pub fn volume_xyz(&self) -> Vec<Vec3> {
        let illuminant = pointer_gamut_illuminant();
        self.volume
            .iter()
            .map(|&lch| lab_to_xyz(lchab_to_lab(Vec3::from(lch)), illuminant))
            .collect()
    }
}

/// Builds the closed outline of the boundary chromaticities in `model`.
///
/// The boundary is transformed relative to the plotting illuminant;
/// non-finite coordinates are zeroed.
pub fn build_pointer_gamut_boundaries(
    gamut: &PointerGamut,
    model: ReferenceModel,
    style: &LineStyle,
) -> Result<Line> {
    trace!(model = %model, points = gamut.boundary.len(), "build_pointer_gamut_boundaries");
    gamut.validate()?;
    build_boundary_outline(&gamut.boundary_xyz(), plotting_illuminant(), model, style)
}

/// Builds one closed line per lightness level of the volume table.
pub fn build_pointer_gamut_hull(
    gamut: &PointerGamut,
    model: ReferenceModel,
    style: &LineStyle,
) -> Result<Vec<Line>> {
    trace!(model = %model, samples = gamut.volume.len(), "build_pointer_gamut_hull");
    gamut.validate()?;

    let xyz = gamut.volume_xyz();
    let ring = xyz.len() / POINTER_GAMUT_RINGS;
    let hull = xyz
        .chunks_exact(ring)
        .map(|r| build_boundary_outline(r, pointer_gamut_illuminant(), model, style))
        .collect::<Result<Vec<_>>>()?;
    debug!(rings = hull.len(), ring, "pointer gamut hull");
    Ok(hull)
}

/// Builds the volume samples as a point cloud.
pub fn build_pointer_gamut_points(
    gamut: &PointerGamut,
    model: ReferenceModel,
    style: &LineStyle,
) -> Result<Points> {
    trace!(model = %model, samples = gamut.volume.len(), "build_pointer_gamut_points");
    gamut.validate()?;

    let positions = to_reference_model(&gamut.volume_xyz(), pointer_gamut_illuminant(), model)?;
    let colours = vec![style.colour_or(DEFAULT_BOUNDARY_COLOUR); positions.len()];
    Ok(Points { positions, colours })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gamut_math::Vec4;

    const HUES: usize = 36;

    /// Constant chroma rings at L = 15, 20, ..., 90.
    fn gamut(chroma: f32) -> PointerGamut {
        let volume = (0..POINTER_GAMUT_RINGS)
            .flat_map(|l| {
                (0..HUES).map(move |h| [15.0 + 5.0 * l as f32, chroma, 10.0 * h as f32])
            })
            .collect();
        PointerGamut {
            boundary: vec![[0.659, 0.316], [0.18, 0.66], [0.16, 0.09], [0.5, 0.2]],
            volume,
        }
    }

    #[test]
    fn test_validate_shapes() {
        assert!(gamut(20.0).validate().is_ok());

        let mut g = gamut(20.0);
        g.volume.pop();
        assert!(g.validate().unwrap_err().is_configuration_error());

        let mut g = gamut(20.0);
        g.volume.truncate(2 * POINTER_GAMUT_RINGS);
        assert!(g.validate().is_err());

        let mut g = gamut(20.0);
        g.boundary.truncate(2);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_hull_rings_in_lab() {
        let hull =
            build_pointer_gamut_hull(&gamut(20.0), ReferenceModel::CieLab, &LineStyle::default())
                .unwrap();
        assert_eq!(hull.len(), POINTER_GAMUT_RINGS);
        for (i, ring) in hull.iter().enumerate() {
            assert!(ring.is_closed());
            assert_eq!(ring.positions.len(), HUES + 1);
            for p in &ring.positions {
                // (a, b, L) relative to illuminant C recovers the table
                assert_abs_diff_eq!(p.z, 15.0 + 5.0 * i as f32, epsilon = 1e-2);
                assert_abs_diff_eq!(p.x.hypot(p.y), 20.0, epsilon = 1e-2);
            }
        }
    }

    #[test]
    fn test_points_cover_volume() {
        let style = LineStyle {
            uniform_colour: None,
            opacity: 0.8,
        };
        let points =
            build_pointer_gamut_points(&gamut(30.0), ReferenceModel::CieXyy, &style).unwrap();
        assert_eq!(points.len(), POINTER_GAMUT_RINGS * HUES);
        assert_eq!(points.colours[0], Vec4::new(0.9, 0.9, 0.9, 0.8));
        assert!(points.positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_boundaries_closed_in_xyy() {
        let g = gamut(20.0);
        let line =
            build_pointer_gamut_boundaries(&g, ReferenceModel::CieXyy, &LineStyle::default())
                .unwrap();
        assert!(line.is_closed());
        assert_eq!(line.positions.len(), g.boundary.len() + 1);
        let first = line.positions[0];
        assert_abs_diff_eq!(first.x, 0.659, epsilon = 1e-5);
        assert_abs_diff_eq!(first.y, 0.316, epsilon = 1e-5);
        assert_abs_diff_eq!(first.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_boundaries_zero_non_finite() {
        let mut g = gamut(20.0);
        // y = 0 gives black, which has no Luv chromaticity
        g.boundary[1] = [0.0, 0.0];
        let line = build_pointer_gamut_boundaries(&g, ReferenceModel::CieLuv, &LineStyle::default())
            .unwrap();
        let p = line.positions[1];
        assert!(p.is_finite());
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn test_deserialise_tables() {
        let json = r#"{"boundary": [[0.6, 0.3], [0.3, 0.6], [0.15, 0.06]],
                       "volume": [[50.0, 20.0, 0.0]]}"#;
        let g: PointerGamut = serde_json::from_str(json).unwrap();
        assert_eq!(g.boundary.len(), 3);
        assert!(g.validate().is_err());
    }
}

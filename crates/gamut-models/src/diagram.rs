//! Chromaticity diagram projections.

use std::fmt;
use std::str::FromStr;

use gamut_core::{Error, Result};
use gamut_math::{Vec2, Vec3};
use gamut_primaries::xy_to_xyz;
use serde::{Deserialize, Serialize};

use crate::model::ReferenceModel;
use crate::transforms::{
    luv_uv_to_xy, ucs_uv_to_xy, xy_to_ucs_uv, xyz_to_luv_uv, xyz_to_ucs_uv, xyz_to_xy,
};

/// 2D chromaticity diagram a gamut triangle or spectral locus is drawn on.
///
/// Diagram coordinates are called `ij` regardless of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChromaticityDiagram {
    /// CIE 1931 xy.
    #[default]
    #[serde(rename = "CIE 1931")]
    Cie1931,
    /// CIE 1960 UCS uv.
    #[serde(rename = "CIE 1960 UCS")]
    Cie1960Ucs,
    /// CIE 1976 UCS u'v'.
    #[serde(rename = "CIE 1976 UCS")]
    Cie1976Ucs,
}

impl ChromaticityDiagram {
    /// Every supported diagram.
    pub const ALL: [ChromaticityDiagram; 3] =
        [Self::Cie1931, Self::Cie1960Ucs, Self::Cie1976Ucs];

    /// Canonical name, e.g. `"CIE 1976 UCS"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cie1931 => "CIE 1931",
            Self::Cie1960Ucs => "CIE 1960 UCS",
            Self::Cie1976Ucs => "CIE 1976 UCS",
        }
    }

    /// The chromaticity-only reference model with the same coordinates.
    pub const fn reference_model(self) -> ReferenceModel {
        match self {
            Self::Cie1931 => ReferenceModel::CieXy,
            Self::Cie1960Ucs => ReferenceModel::CieUcsUv,
            Self::Cie1976Ucs => ReferenceModel::CieLuvUv,
        }
    }

    /// Projects XYZ onto the diagram.
    ///
    /// `whitepoint` is only used by `CIE 1931`, where black maps onto it.
    /// Black is non-finite in the UCS projections.
    pub fn xyz_to_ij(self, xyz: Vec3, whitepoint: Vec2) -> Vec2 {
        match self {
            Self::Cie1931 => xyz_to_xy(xyz, whitepoint),
            Self::Cie1960Ucs => xyz_to_ucs_uv(xyz),
            Self::Cie1976Ucs => xyz_to_luv_uv(xyz),
        }
    }

    /// Projects xy chromaticity onto the diagram.
    pub fn xy_to_ij(self, xy: Vec2) -> Vec2 {
        match self {
            Self::Cie1931 => xy,
            Self::Cie1960Ucs => xy_to_ucs_uv(xy),
            Self::Cie1976Ucs => {
                let uv = xy_to_ucs_uv(xy);
                Vec2::new(uv.x, uv.y * 1.5)
            }
        }
    }

    /// Diagram coordinates back to xy chromaticity.
    pub fn ij_to_xy(self, ij: Vec2) -> Vec2 {
        match self {
            Self::Cie1931 => ij,
            Self::Cie1960Ucs => ucs_uv_to_xy(ij),
            Self::Cie1976Ucs => luv_uv_to_xy(ij),
        }
    }

    /// Diagram coordinates back to XYZ with `Y = 1`.
    pub fn ij_to_xyz(self, ij: Vec2) -> Vec3 {
        xy_to_xyz(self.ij_to_xy(ij))
    }
}

impl fmt::Display for ChromaticityDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromaticityDiagram {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s.trim())
            .ok_or_else(|| {
                Error::unsupported_model("chromaticity diagram", s, Self::ALL.map(Self::name))
            })
    }
}

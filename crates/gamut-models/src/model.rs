//! Reference model tags.

use std::fmt;
use std::str::FromStr;

use gamut_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Target coordinate system for gamut visualisation.
///
/// The set is closed: parsing an unknown name is a configuration error
/// listing [`ReferenceModel::ALL`], never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceModel {
    /// CIE 1931 XYZ tristimulus values (identity).
    #[serde(rename = "CIE XYZ")]
    CieXyz,
    /// CIE xyY.
    #[serde(rename = "CIE xyY")]
    CieXyy,
    /// CIE xy chromaticity coordinates.
    #[serde(rename = "CIE xy")]
    CieXy,
    /// CIE L*a*b*, reordered to `(a, b, L)`.
    #[serde(rename = "CIE Lab")]
    CieLab,
    /// CIE L*u*v*, reordered to `(u, v, L)`.
    #[serde(rename = "CIE Luv")]
    CieLuv,
    /// CIE 1976 UCS u'v' chromaticity coordinates.
    #[serde(rename = "CIE Luv uv")]
    CieLuvUv,
    /// CIE 1960 UCS UVW tristimulus values.
    #[serde(rename = "CIE UCS")]
    CieUcs,
    /// CIE 1960 UCS uv chromaticity coordinates.
    #[serde(rename = "CIE UCS uv")]
    CieUcsUv,
    /// CIE 1964 U*V*W*.
    #[serde(rename = "CIE UVW")]
    CieUvw,
    /// IPT, reordered to `(P, T, I)`.
    #[serde(rename = "IPT")]
    Ipt,
    /// Hunter L,a,b, reordered to `(a, b, L)`.
    #[serde(rename = "Hunter Lab")]
    HunterLab,
    /// Hunter Rd,a,b, reordered to `(a, b, Rd)`.
    #[serde(rename = "Hunter Rdab")]
    HunterRdab,
}

impl ReferenceModel {
    /// Every supported model.
    pub const ALL: [ReferenceModel; 12] = [
        Self::CieXyz,
        Self::CieXyy,
        Self::CieXy,
        Self::CieLab,
        Self::CieLuv,
        Self::CieLuvUv,
        Self::CieUcs,
        Self::CieUcsUv,
        Self::CieUvw,
        Self::Ipt,
        Self::HunterLab,
        Self::HunterRdab,
    ];

    /// Models with three components, i.e. usable for gamut volumes.
    pub const VOLUMETRIC: [ReferenceModel; 9] = [
        Self::CieXyz,
        Self::CieXyy,
        Self::CieLab,
        Self::CieLuv,
        Self::CieUcs,
        Self::CieUvw,
        Self::Ipt,
        Self::HunterLab,
        Self::HunterRdab,
    ];

    /// Canonical name, e.g. `"CIE Lab"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CieXyz => "CIE XYZ",
            Self::CieXyy => "CIE xyY",
            Self::CieXy => "CIE xy",
            Self::CieLab => "CIE Lab",
            Self::CieLuv => "CIE Luv",
            Self::CieLuvUv => "CIE Luv uv",
            Self::CieUcs => "CIE UCS",
            Self::CieUcsUv => "CIE UCS uv",
            Self::CieUvw => "CIE UVW",
            Self::Ipt => "IPT",
            Self::HunterLab => "Hunter Lab",
            Self::HunterRdab => "Hunter Rdab",
        }
    }

    /// `true` for the 2D chromaticity-only models.
    pub const fn is_chromaticity(self) -> bool {
        matches!(self, Self::CieXy | Self::CieLuvUv | Self::CieUcsUv)
    }

    /// `true` when the lightness axis is moved from first to last.
    pub const fn reorders_axes(self) -> bool {
        matches!(
            self,
            Self::CieLab | Self::CieLuv | Self::Ipt | Self::HunterLab | Self::HunterRdab
        )
    }

    /// Axis labels in output order (after reordering).
    ///
    /// Chromaticity models report an empty third label.
    pub const fn labels(self) -> [&'static str; 3] {
        match self {
            Self::CieXyz => ["X", "Y", "Z"],
            Self::CieXyy => ["x", "y", "Y"],
            Self::CieXy => ["x", "y", ""],
            Self::CieLab => ["a*", "b*", "L*"],
            Self::CieLuv => ["u*", "v*", "L*"],
            Self::CieLuvUv => ["u'", "v'", ""],
            Self::CieUcs => ["U", "V", "W"],
            Self::CieUcsUv => ["u", "v", ""],
            Self::CieUvw => ["U*", "V*", "W*"],
            Self::Ipt => ["P", "T", "I"],
            Self::HunterLab => ["a", "b", "L"],
            Self::HunterRdab => ["a", "b", "Rd"],
        }
    }
}

impl fmt::Display for ReferenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s.trim())
            .ok_or_else(|| {
                Error::unsupported_model("reference model", s, Self::ALL.map(Self::name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for model in ReferenceModel::ALL {
            assert_eq!(model.name().parse::<ReferenceModel>().unwrap(), model);
        }
    }

    #[test]
    fn test_unknown_model_lists_supported() {
        let err = "CIE LCHab".parse::<ReferenceModel>().unwrap_err();
        assert!(err.is_configuration_error());
        let msg = err.to_string();
        assert!(msg.contains("CIE LCHab"));
        assert!(msg.contains("Hunter Rdab"));
        assert!(msg.contains("IPT"));
    }

    #[test]
    fn test_serde_names() {
        let m: ReferenceModel = serde_json::from_str("\"Hunter Lab\"").unwrap();
        assert_eq!(m, ReferenceModel::HunterLab);
        assert_eq!(serde_json::to_string(&ReferenceModel::CieXyy).unwrap(), "\"CIE xyY\"");
        assert!(serde_json::from_str::<ReferenceModel>("\"CIE Foo\"").is_err());
    }

    #[test]
    fn test_volumetric_excludes_chromaticity() {
        assert!(ReferenceModel::VOLUMETRIC.iter().all(|m| !m.is_chromaticity()));
        assert_eq!(ReferenceModel::ALL.iter().filter(|m| m.is_chromaticity()).count(), 3);
    }
}

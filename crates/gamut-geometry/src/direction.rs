//! Plane facing directions and box face masks.

use std::fmt;
use std::str::FromStr;

use gamut_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Axis direction a plane faces.
///
/// Parses from and serialises to `"+x"`, `"-x"`, `"+y"`, `"-y"`, `"+z"`, `"-z"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Facing +X.
    #[serde(rename = "+x")]
    PosX,
    /// Facing -X.
    #[serde(rename = "-x")]
    NegX,
    /// Facing +Y.
    #[serde(rename = "+y")]
    PosY,
    /// Facing -Y.
    #[serde(rename = "-y")]
    NegY,
    /// Facing +Z.
    #[serde(rename = "+z")]
    PosZ,
    /// Facing -Z.
    #[serde(rename = "-z")]
    NegZ,
}

impl Direction {
    /// All six directions, in the order boxes are assembled.
    pub const ALL: [Direction; 6] = [
        Direction::NegZ,
        Direction::PosZ,
        Direction::NegY,
        Direction::PosY,
        Direction::NegX,
        Direction::PosX,
    ];

    /// Canonical name, e.g. `"+x"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PosX => "+x",
            Self::NegX => "-x",
            Self::PosY => "+y",
            Self::NegY => "-y",
            Self::PosZ => "+z",
            Self::NegZ => "-z",
        }
    }

    /// Index of the axis the plane is perpendicular to (0 = x, 1 = y, 2 = z).
    ///
    /// This is the "neutral" axis whose procedural colour channel is zeroed.
    pub const fn axis(self) -> usize {
        match self {
            Self::PosX | Self::NegX => 0,
            Self::PosY | Self::NegY => 1,
            Self::PosZ | Self::NegZ => 2,
        }
    }

    /// Cyclic component shift moving the XY plane into place.
    pub const fn shift(self) -> i32 {
        match self {
            Self::PosX | Self::NegX => 1,
            Self::PosY | Self::NegY => -1,
            Self::PosZ | Self::NegZ => 0,
        }
    }

    /// `-1.0` for negative directions, `1.0` otherwise.
    pub const fn sign(self) -> f32 {
        match self {
            Self::NegX | Self::NegY | Self::NegZ => -1.0,
            _ => 1.0,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::PosX => 1 << 0,
            Self::NegX => 1 << 1,
            Self::PosY => 1 << 2,
            Self::NegY => 1 << 3,
            Self::PosZ => 1 << 4,
            Self::NegZ => 1 << 5,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| {
                Error::configuration(format!(
                    "unknown direction '{s}', expected one of: +x, -x, +y, -y, +z, -z"
                ))
            })
    }
}

/// Subset of box faces to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceMask(u8);

impl FaceMask {
    /// No faces. Rejected by [`crate::generate_box`].
    pub const EMPTY: Self = Self(0);

    /// All six faces.
    pub const ALL: Self = Self(0b11_1111);

    /// Returns `true` when `direction` is included.
    #[inline]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Adds a face.
    #[inline]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Returns `true` when no face is selected.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of selected faces.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Selected faces in assembly order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl Default for FaceMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<Direction> for FaceMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("+X".parse::<Direction>().unwrap(), Direction::PosX);
        assert_eq!(" -z ".parse::<Direction>().unwrap(), Direction::NegZ);
        let err = "up".parse::<Direction>().unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_face_mask() {
        let mask: FaceMask = [Direction::PosX, Direction::NegZ].into_iter().collect();
        assert_eq!(mask.count(), 2);
        assert!(mask.contains(Direction::PosX));
        assert!(!mask.contains(Direction::NegX));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![Direction::NegZ, Direction::PosX]);
        assert_eq!(FaceMask::ALL.count(), 6);
        assert!(FaceMask::EMPTY.is_empty());
    }

    #[test]
    fn test_direction_serde() {
        let d: Direction = serde_json::from_str("\"-y\"").unwrap();
        assert_eq!(d, Direction::NegY);
        assert_eq!(serde_json::to_string(&Direction::PosZ).unwrap(), "\"+z\"");
    }
}

//! Style and resolution settings.
//!
//! Plain serde structs: the engine never reads files, callers deserialise
//! them from whatever settings format they use.

use gamut_core::{Error, Result};
use gamut_math::{Vec3, Vec4};
use gamut_models::ChromaticityDiagram;
use serde::{Deserialize, Serialize};

/// RGBA from an RGB triplet and an opacity.
#[inline]
pub(crate) fn rgba(rgb: [f32; 3], opacity: f32) -> Vec4 {
    Vec4::new(rgb[0], rgb[1], rgb[2], opacity)
}

/// RGBA from a colour triplet and an opacity.
#[inline]
pub(crate) fn rgba_vec(rgb: Vec3, opacity: f32) -> Vec4 {
    Vec4::new(rgb.x, rgb.y, rgb.z, opacity)
}

/// Fill appearance of a gamut volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillStyle {
    /// Single colour for every vertex; `None` keeps the RGB identity colours.
    pub uniform_colour: Option<[f32; 3]>,
    /// Alpha applied to every vertex.
    pub opacity: f32,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            uniform_colour: None,
            opacity: 0.5,
        }
    }
}

/// Wireframe appearance of a gamut volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeStyle {
    /// Single colour for every vertex; `None` keeps the RGB identity colours.
    pub uniform_colour: Option<[f32; 3]>,
    /// Alpha applied to every vertex.
    pub opacity: f32,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            uniform_colour: None,
            opacity: 1.0,
        }
    }
}

/// Appearance of lines and point clouds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Single colour; `None` lets the builder pick (per-vertex or a fixed
    /// default, depending on the visual).
    pub uniform_colour: Option<[f32; 3]>,
    /// Alpha applied to every position.
    pub opacity: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            uniform_colour: None,
            opacity: 1.0,
        }
    }
}

impl LineStyle {
    /// Uniform colour, or `fallback` when none is set, with the style opacity.
    pub fn colour_or(&self, fallback: [f32; 3]) -> Vec4 {
        rgba(self.uniform_colour.unwrap_or(fallback), self.opacity)
    }
}

/// Gamut volume resolution with the stepping used by interactive views.
///
/// ```rust
/// use gamut_visuals::VolumeSettings;
///
/// let mut s = VolumeSettings::default();
/// assert_eq!(s.segments, 16);
/// s.increase();
/// assert_eq!(s.segments, 18);
/// s.segments = 100;
/// assert_eq!(s.clamped(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeSettings {
    /// Subdivisions per cube edge.
    pub segments: u32,
    /// Lower bound of `segments`.
    pub min_segments: u32,
    /// Upper bound of `segments`.
    pub max_segments: u32,
    /// Increment used by [`increase`](Self::increase) / [`decrease`](Self::decrease).
    pub step: u32,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            segments: 16,
            min_segments: 2,
            max_segments: 64,
            step: 2,
        }
    }
}

impl VolumeSettings {
    /// Checks the range and step.
    pub fn validate(&self) -> Result<()> {
        if self.min_segments < 1 || self.min_segments > self.max_segments {
            return Err(Error::configuration(format!(
                "invalid segment range [{}, {}]",
                self.min_segments, self.max_segments
            )));
        }
        if self.step < 1 {
            return Err(Error::configuration("segment step must be >= 1"));
        }
        Ok(())
    }

    /// `segments` limited to `[min_segments, max_segments]`.
    pub fn clamped(&self) -> u32 {
        self.segments
            .max(self.min_segments)
            .min(self.max_segments)
    }

    /// Clamps `segments` in place.
    pub fn clamp(&mut self) {
        self.segments = self.clamped();
    }

    /// Steps `segments` up, stopping at `max_segments`.
    pub fn increase(&mut self) -> u32 {
        self.segments = self.segments.saturating_add(self.step);
        self.clamp();
        self.segments
    }

    /// Steps `segments` down, stopping at `min_segments`.
    pub fn decrease(&mut self) -> u32 {
        self.segments = self.segments.saturating_sub(self.step);
        self.clamp();
        self.segments
    }
}

/// How diagram vertex colours are brought into display range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToneMapping {
    /// Divide by the largest channel, then clip to `[0, 1]`.
    #[default]
    NormaliseMaximum,
    /// Clip to `[0, 1]`.
    Clip,
}

impl ToneMapping {
    /// Maps one encoded sRGB colour into `[0, 1]`.
    pub fn apply(self, rgb: Vec3) -> Vec3 {
        match self {
            Self::NormaliseMaximum => {
                let max = rgb.max_element();
                if max > 0.0 && max.is_finite() {
                    (rgb / max).clamp01()
                } else {
                    Vec3::ZERO
                }
            }
            Self::Clip => rgb.zero_non_finite().clamp01(),
        }
    }
}

/// Chromaticity diagram construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    /// Interior grid samples per axis, `2..=`[`MAX_DIAGRAM_SAMPLES`](crate::MAX_DIAGRAM_SAMPLES).
    pub samples: u32,
    /// Diagram projection.
    pub diagram: ChromaticityDiagram,
    /// Vertex colour policy.
    pub tone_mapping: ToneMapping,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            samples: 256,
            diagram: ChromaticityDiagram::Cie1931,
            tone_mapping: ToneMapping::NormaliseMaximum,
        }
    }
}

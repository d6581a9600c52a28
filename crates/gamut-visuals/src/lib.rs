//! # gamut-visuals
//!
//! Builds renderer-agnostic buffers for colour gamut visualisation.
//!
//! - [`build_gamut_volume`] - RGB colourspace volume in a reference model,
//!   fill plus optional wireframe
//! - [`build_gamut_triangle`] - Primaries outline on a chromaticity diagram
//! - [`build_diagram`] - Filled chromaticity diagram bounded by the
//!   spectral locus
//! - [`build_spectral_locus`], [`build_spectral_locus_diagram`] - Locus lines
//! - [`build_rgb_scatter`] - Image pixels as a point cloud
//! - [`build_whitepoint_axis`], [`build_boundary_outline`], [`build_axes`] -
//!   Reference overlays
//! - [`build_pointer_gamut_boundaries`], [`build_pointer_gamut_hull`],
//!   [`build_pointer_gamut_points`] - Pointer's gamut of real surface colours
//! - [`build_diagram_construction`] - XYZ simplex and colour matching
//!   function rays
//! - [`cmfs`] - Analytic CIE 1931 2° colour matching functions
//!
//! Every builder is a pure function: the same arguments give bit-identical
//! buffers, and nothing is cached between calls.
//!
//! # Usage
//!
//! ```rust
//! use gamut_models::ReferenceModel;
//! use gamut_primaries::{ColourspaceDescriptor, REC2020};
//! use gamut_visuals::{build_gamut_volume, FillStyle, WireframeStyle};
//!
//! let cs = ColourspaceDescriptor::from_primaries(&REC2020).unwrap();
//! let volume = build_gamut_volume(
//!     &cs,
//!     ReferenceModel::CieLab,
//!     8,
//!     &FillStyle::default(),
//!     Some(&WireframeStyle::default()),
//! )
//! .unwrap();
//! assert!(volume.fill.indices_in_bounds());
//! assert!(volume.wireframe.is_some());
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Grid sampling and scatter conversion via rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cmfs;
mod construction;
mod diagram;
mod locus;
mod overlays;
mod pointer;
mod scatter;
mod styles;
mod triangle;
mod volume;

pub use construction::{CONSTRUCTION_RAY_SCALE, DiagramConstruction, build_diagram_construction};
pub use diagram::{MAX_DIAGRAM_SAMPLES, build_diagram, build_diagram_with};
pub use locus::{build_spectral_locus, build_spectral_locus_diagram};
pub use overlays::{DEFAULT_BOUNDARY_COLOUR, build_axes, build_boundary_outline, build_whitepoint_axis};
pub use pointer::{
    POINTER_GAMUT_RINGS, PointerGamut, build_pointer_gamut_boundaries, build_pointer_gamut_hull,
    build_pointer_gamut_points, pointer_gamut_illuminant,
};
pub use scatter::{Resampling, build_rgb_scatter};
pub use styles::{DiagramSettings, FillStyle, LineStyle, ToneMapping, VolumeSettings, WireframeStyle};
pub use triangle::{DEFAULT_TRIANGLE_COLOUR, build_gamut_triangle};
pub use volume::{GamutVolume, build_gamut_volume, build_rgb_identity_cube};

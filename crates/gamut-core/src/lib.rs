//! # gamut-core
//!
//! Core types shared by every gamut-rs crate.
//!
//! - [`Error`] / [`Result`] - Configuration and geometry failures
//! - [`Preset`] - Circular cursor over named presets (camera settings, styles)
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other gamut-rs crates
//! depend on `gamut-core`:
//!
//! ```text
//! gamut-core (this crate)
//!    ^
//!    |
//!    +-- gamut-geometry (plane / box meshes)
//!    +-- gamut-primaries (colourspace descriptors)
//!    +-- gamut-models (reference model transforms)
//!    +-- gamut-visuals (volumes, diagrams, loci)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod preset;

pub use error::*;
pub use preset::{Preset, PresetCycle};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::preset::Preset;
}

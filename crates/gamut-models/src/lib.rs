//! # gamut-models
//!
//! Transforms CIE XYZ tristimulus values into the reference colour models
//! gamut volumes are drawn in, and projects them onto chromaticity
//! diagrams.
//!
//! - [`ReferenceModel`] - Closed set of target models (`CIE Lab`, `IPT`, ...)
//! - [`to_reference_model`] - Batch transform with axis reordering
//! - [`ChromaticityDiagram`] - `CIE 1931`, `CIE 1960 UCS`, `CIE 1976 UCS`
//!   projections and their inverses
//! - [`transforms`] - The individual XYZ to model functions
//!
//! # Axis order
//!
//! Models with a lightness axis are reordered so lightness comes **last**
//! and plays the vertical axis in 3D views: `CIE Lab` becomes `(a, b, L)`,
//! `IPT` becomes `(P, T, I)`.
//!
//! # Non-finite values
//!
//! Reciprocal formulas produce NaN at the black point and near coordinate
//! poles. Batch outputs replace every non-finite component with zero so
//! degenerate samples sit at the origin instead of corrupting mesh bounds.
//!
//! # Usage
//!
//! ```rust
//! use gamut_models::{to_reference_model, ReferenceModel};
//! use gamut_math::{Vec2, Vec3};
//!
//! let d65 = Vec2::new(0.3127, 0.3290);
//! let model: ReferenceModel = "CIE Lab".parse().unwrap();
//! let lab = to_reference_model(&[Vec3::new(0.95047, 1.0, 1.08883)], d65, model).unwrap();
//! // Whitepoint: a = b = 0, L = 100 (last)
//! assert!((lab[0].z - 100.0).abs() < 1e-2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod diagram;
mod model;
mod pipeline;
pub mod transforms;

pub use diagram::ChromaticityDiagram;
pub use model::ReferenceModel;
pub use pipeline::{convert, to_reference_model, to_reference_model_2d};

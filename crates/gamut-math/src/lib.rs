//! # gamut-math
//!
//! Math primitives for colour transforms and mesh buffers.
//!
//! - [`Mat3`] - Row-major 3x3 matrices for RGB to XYZ conversions
//! - [`Vec3`] - Tristimulus / RGB triplets and vertex positions
//! - [`Vec2`], [`Vec4`] - Chromaticity coordinates and RGBA colours (from [`glam`])
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! assert!(xyz.is_finite());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

pub use glam::{Vec2, Vec4};

/// Replaces a non-finite scalar with zero.
#[inline]
pub fn zero_non_finite(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// [`Vec2`] with non-finite components replaced by zero.
#[inline]
pub fn zero_non_finite2(v: Vec2) -> Vec2 {
    Vec2::new(zero_non_finite(v.x), zero_non_finite(v.y))
}

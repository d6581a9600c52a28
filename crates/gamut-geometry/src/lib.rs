//! # gamut-geometry
//!
//! Procedural primitive meshes for gamut visualisation.
//!
//! - [`generate_plane`] - Subdivided plane facing one of six axis directions
//! - [`generate_box`] - Subdivided box assembled from up to six planes
//! - [`Mesh`], [`Line`], [`Points`] - Flat buffers handed to the renderer
//!
//! Every mesh carries two index buffers over the same vertices: `faces`
//! (two triangles per grid cell) for fill rendering and `outline` (four
//! edges per grid cell) for wireframe rendering.
//!
//! # Usage
//!
//! ```rust
//! use gamut_geometry::{generate_box, FaceMask};
//!
//! let cube = generate_box(1.0, 1.0, 1.0, 4, 4, 4, FaceMask::ALL).unwrap();
//! assert_eq!(cube.vertices.len(), 6 * 5 * 5);
//! assert_eq!(cube.faces.len(), 6 * 2 * 4 * 4);
//! assert!(cube.indices_in_bounds());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cuboid;
mod direction;
mod mesh;
mod plane;

pub use cuboid::generate_box;
pub use direction::{Direction, FaceMask};
pub use mesh::{Line, LineMode, Mesh, Points, Vertex};
pub use plane::generate_plane;

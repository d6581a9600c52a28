//! Renderer-agnostic output buffers.
//!
//! These are immutable geometry snapshots: the engine builds them, hands
//! them over, and never touches them again. Uploading to a scene graph or
//! GPU is the caller's business.

use gamut_math::{Vec2, Vec3, Vec4};

/// A mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Position, local unit-scale coordinates until a colour transform overwrites it.
    pub position: Vec3,
    /// Surface normal.
    pub normal: Vec3,
    /// Texture coordinate in `[0, 1]²`.
    pub uv: Vec2,
    /// RGBA colour.
    pub colour: Vec4,
}

/// Indexed triangle mesh with a parallel wireframe index buffer.
///
/// Invariant: every index in `faces` and `outline` is `< vertices.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex attributes.
    pub vertices: Vec<Vertex>,
    /// Triangles for fill rendering.
    pub faces: Vec<[u32; 3]>,
    /// Line segments for wireframe rendering, four per grid cell.
    pub outline: Vec<[u32; 2]>,
}

impl Mesh {
    /// Returns `true` when every face and outline index addresses a vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.vertices.len();
        self.faces.iter().flatten().all(|&i| (i as usize) < n)
            && self.outline.iter().flatten().all(|&i| (i as usize) < n)
    }

    /// Iterator over vertex positions.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position = v.position + offset;
        }
    }

    /// Appends `other`, offsetting its indices by the current vertex count.
    pub fn append(&mut self, other: Mesh) {
        // Callers bound the vertex count to u32 before building.
        let offset = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.faces
            .extend(other.faces.into_iter().map(|f| f.map(|i| i + offset)));
        self.outline
            .extend(other.outline.into_iter().map(|e| e.map(|i| i + offset)));
    }

    /// Replaces every vertex colour with `colour`.
    pub fn set_uniform_colour(&mut self, colour: Vec4) {
        for v in &mut self.vertices {
            v.colour = colour;
        }
    }

    /// Replaces the alpha channel of every vertex colour.
    pub fn set_opacity(&mut self, opacity: f32) {
        for v in &mut self.vertices {
            v.colour.w = opacity;
        }
    }

    /// Copy of this mesh drawn as lines: same vertices and outline, no faces.
    pub fn to_wireframe(&self) -> Mesh {
        Mesh {
            vertices: self.vertices.clone(),
            faces: Vec::new(),
            outline: self.outline.clone(),
        }
    }
}

/// How consecutive [`Line`] positions are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Polyline through every position in order.
    #[default]
    Strip,
    /// Independent segments from pairs of positions.
    Segments,
}

/// Coloured polyline or segment list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Line positions.
    pub positions: Vec<Vec3>,
    /// One RGBA colour per position.
    pub colours: Vec<Vec4>,
    /// Connection mode.
    pub mode: LineMode,
}

impl Line {
    /// Polyline with one colour for every position.
    pub fn strip(positions: Vec<Vec3>, colour: Vec4) -> Self {
        let colours = vec![colour; positions.len()];
        Self {
            positions,
            colours,
            mode: LineMode::Strip,
        }
    }

    /// Returns `true` when the polyline ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.positions.len() > 2 && self.positions.first() == self.positions.last()
    }

    /// Number of drawn segments.
    pub fn segment_count(&self) -> usize {
        match self.mode {
            LineMode::Strip => self.positions.len().saturating_sub(1),
            LineMode::Segments => self.positions.len() / 2,
        }
    }
}

/// Coloured point cloud.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Points {
    /// Point positions.
    pub positions: Vec<Vec3>,
    /// One RGBA colour per point.
    pub colours: Vec<Vec4>,
}

impl Points {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` when there are no points.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ]
        .into_iter()
        .map(|position| Vertex {
            position,
            ..Default::default()
        })
        .collect();
        Mesh {
            vertices,
            faces: vec![[0, 1, 3], [1, 2, 3]],
            outline: vec![[0, 1], [1, 2], [2, 3], [3, 0]],
        }
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut a = quad();
        a.append(quad());
        assert_eq!(a.vertices.len(), 8);
        assert_eq!(a.faces[2], [4, 5, 7]);
        assert_eq!(a.outline[7], [7, 4]);
        assert!(a.indices_in_bounds());
    }

    #[test]
    fn test_out_of_bounds_detected() {
        let mut m = quad();
        m.outline.push([3, 4]);
        assert!(!m.indices_in_bounds());
    }

    #[test]
    fn test_wireframe_keeps_vertices() {
        let m = quad();
        let w = m.to_wireframe();
        assert!(w.faces.is_empty());
        assert_eq!(w.outline, m.outline);
        assert_eq!(w.vertices, m.vertices);
    }

    #[test]
    fn test_line_closed() {
        let closed = Line::strip(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ZERO],
            Vec4::ONE,
        );
        assert!(closed.is_closed());
        assert_eq!(closed.segment_count(), 3);
        assert_eq!(closed.colours.len(), 4);
    }
}

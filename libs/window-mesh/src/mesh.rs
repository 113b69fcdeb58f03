//! # Quad Mesh
//!
//! Output mesh representation: deduplicated vertices and planar quad faces.

use glam::DVec3;

/// A quad-face mesh with vertices and indices.
///
/// The window generator only ever emits planar quadrilaterals, so faces are
/// stored as fixed 4-tuples of vertex indices. Winding order encodes each
/// face's normal direction and is preserved exactly as built. Edges are not
/// stored; the consuming mesh system derives them from face boundaries.
///
/// # Example
///
/// ```rust
/// use window_mesh::{build_window, WindowParams};
///
/// let mesh = build_window(&WindowParams::default());
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone)]
pub struct QuadMesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Quad faces (4 indices per face)
    faces: Vec<[u32; 4]>,
}

impl Default for QuadMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh from already-deduplicated vertex and face lists.
    pub fn from_parts(vertices: Vec<DVec3>, faces: Vec<[u32; 4]>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 4]] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> [u32; 4] {
        self.faces[index]
    }

    /// Consumes the mesh, yielding its vertex and face lists.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 4]>) {
        (self.vertices, self.faces)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - No face references the same vertex twice
    ///
    /// Zero-area faces produced by pathological parameter combinations are
    /// not rejected here; they pass through to the host unchanged.
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for face in &self.faces {
            if face.iter().any(|&index| index >= vertex_count) {
                return false;
            }

            for i in 0..4 {
                for j in (i + 1)..4 {
                    if face[i] == face[j] {
                        return false;
                    }
                }
            }
        }

        true
    }
}

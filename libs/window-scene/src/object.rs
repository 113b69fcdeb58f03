//! # Mesh Objects
//!
//! Host-side mesh payloads and the named objects that own them.

use crate::properties::PropertyMap;
use glam::DVec3;
use window_mesh::QuadMesh;

/// Geometry payload of a mesh object.
///
/// Mirrors what a mesh datablock carries: raw vertex/edge/face arrays plus
/// the shading flags that live alongside them. The generator never supplies
/// edges; they stay derivable from face boundaries.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub vertices: Vec<DVec3>,
    /// Explicit edges (unused by the generator, accepted for completeness).
    pub edges: Vec<[u32; 2]>,
    /// Quad faces as vertex index tuples.
    pub faces: Vec<[u32; 4]>,
    /// Angle-based smoothing toggle carried by the mesh datablock.
    pub auto_smooth: bool,
    /// Per-face smooth shading flags.
    pub face_smooth: Vec<bool>,
}

impl MeshData {
    /// Builds mesh data from raw geometry arrays. New faces shade flat.
    pub fn from_geometry(
        vertices: Vec<DVec3>,
        edges: Vec<[u32; 2]>,
        faces: Vec<[u32; 4]>,
    ) -> Self {
        let face_smooth = vec![false; faces.len()];
        Self {
            vertices,
            edges,
            faces,
            auto_smooth: false,
            face_smooth,
        }
    }

    /// Builds mesh data from a generated mesh, with an empty edge list.
    pub fn from_quad_mesh(mesh: QuadMesh) -> Self {
        let (vertices, faces) = mesh.into_parts();
        Self::from_geometry(vertices, Vec::new(), faces)
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

    /// Returns true if the data holds no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends another payload's geometry, re-basing its indices.
    ///
    /// Appended faces keep their flat shading; existing flags are untouched.
    pub fn append(&mut self, other: &MeshData) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for edge in &other.edges {
            self.edges.push([edge[0] + offset, edge[1] + offset]);
        }

        for face in &other.faces {
            self.faces.push([
                face[0] + offset,
                face[1] + offset,
                face[2] + offset,
                face[3] + offset,
            ]);
        }

        self.face_smooth.extend_from_slice(&other.face_smooth);
    }

    /// Sets the smooth shading flag on every face.
    pub fn set_all_smooth(&mut self, smooth: bool) {
        for flag in &mut self.face_smooth {
            *flag = smooth;
        }
    }
}

/// A named object in the scene graph.
#[derive(Debug, Clone)]
pub struct MeshObject {
    /// Display name.
    pub name: String,
    /// Geometry payload.
    pub data: MeshData,
    /// Custom properties persisted on the object.
    pub props: PropertyMap,
    /// Material slot names, kept across geometry replacement.
    pub materials: Vec<String>,
    /// Vertex group names.
    pub vertex_groups: Vec<String>,
}

impl MeshObject {
    /// Creates an object owning the given geometry.
    pub fn new(name: impl Into<String>, data: MeshData) -> Self {
        Self {
            name: name.into(),
            data,
            props: PropertyMap::new(),
            materials: Vec::new(),
            vertex_groups: Vec::new(),
        }
    }

    /// Replaces the geometry while leaving name, materials, and properties
    /// in place.
    pub fn replace_geometry(&mut self, data: MeshData) {
        self.data = data;
    }
}

// =============================================================================
// TESTS
// =============================================================================

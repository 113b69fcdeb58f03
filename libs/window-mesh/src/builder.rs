//! # Frame Builder
//!
//! Builds the window-frame solid from parameters.
//!
//! ## Example
//!
//! ```rust
//! use window_mesh::{build_window, WindowParams};
//!
//! let mesh = build_window(&WindowParams::new(1.0, 1.0, 0.1, 0.1));
//! assert_eq!(mesh.face_count(), 16);
//! ```

use crate::mesh::QuadMesh;
use crate::params::WindowParams;
use crate::pool::VertexPool;
use glam::DVec3;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Outcome of submitting one quad to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadStatus {
    /// The face was appended to the face list.
    Added,
    /// A face over the same vertex set already exists; the quad was dropped.
    Duplicate,
}

/// Accumulates deduplicated vertices and quad faces for one build.
///
/// The builder owns one [`VertexPool`] and one face list for its lifetime.
/// Faces are compared as unordered index sets: a quad whose four indices
/// match an existing face in any order is dropped without error.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    pool: VertexPool,
    faces: Vec<[u32; 4]>,
}

impl FrameBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            pool: VertexPool::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            pool: VertexPool::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Interns the four corners in winding order and appends the face.
    ///
    /// Corners equal to an already-pooled point reuse its index. The face is
    /// dropped when its index set duplicates an existing face, regardless of
    /// winding.
    pub fn add_quad(&mut self, corners: [DVec3; 4]) -> QuadStatus {
        let face = corners.map(|corner| self.pool.intern(corner));

        if self.contains_face(face) {
            return QuadStatus::Duplicate;
        }

        self.faces.push(face);
        QuadStatus::Added
    }

    /// Returns the number of unique vertices accumulated so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pool.len()
    }

    /// Returns the number of faces accumulated so far.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Consumes the builder, producing the finished mesh.
    pub fn finish(self) -> QuadMesh {
        QuadMesh::from_parts(self.pool.into_points(), self.faces)
    }

    /// Order-independent duplicate check: sorted index tuples, linear scan,
    /// first match wins.
    fn contains_face(&self, face: [u32; 4]) -> bool {
        let mut key = face;
        key.sort_unstable();

        self.faces.iter().any(|existing| {
            let mut existing_key = *existing;
            existing_key.sort_unstable();
            existing_key == key
        })
    }
}

/// Builds the complete window-frame mesh for `params`.
///
/// Local coordinate convention: x ∈ [0, width] is the horizontal extent,
/// z ∈ [0, height] the vertical extent, and y ∈ [0, depth] the depth axis,
/// with the front face at y = 0 and the back face at y = depth.
///
/// The solid is a fixed script of 16 quads: four rim quads forming the front
/// picture-frame border, four for the back, four depth walls around the
/// outer perimeter, and four reveal walls around the inner opening. The
/// frame width is clamped against width and height before any corner is
/// computed.
///
/// Pathological parameter combinations are not rejected; callers enforce
/// positive dimensions before building.
///
/// # Example
///
/// ```rust
/// use window_mesh::{build_window, WindowParams};
///
/// let mesh = build_window(&WindowParams::default());
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 16);
/// ```
pub fn build_window(params: &WindowParams) -> QuadMesh {
    let w = params.width;
    let h = params.height;
    let d = params.depth;
    let f = params.clamped_frame_width();

    let mut builder = FrameBuilder::with_capacity(16, 16);

    // Front rim (y = 0), outward normal -Y

    // bottom
    builder.add_quad([
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(w, 0.0, 0.0),
        DVec3::new(w - f, 0.0, f),
        DVec3::new(f, 0.0, f),
    ]);
    // right
    builder.add_quad([
        DVec3::new(w, 0.0, 0.0),
        DVec3::new(w, 0.0, h),
        DVec3::new(w - f, 0.0, h - f),
        DVec3::new(w - f, 0.0, f),
    ]);
    // top
    builder.add_quad([
        DVec3::new(w, 0.0, h),
        DVec3::new(0.0, 0.0, h),
        DVec3::new(f, 0.0, h - f),
        DVec3::new(w - f, 0.0, h - f),
    ]);
    // left
    builder.add_quad([
        DVec3::new(0.0, 0.0, h),
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(f, 0.0, f),
        DVec3::new(f, 0.0, h - f),
    ]);

    // Back rim (y = depth), outward normal +Y

    // bottom
    builder.add_quad([
        DVec3::new(w, d, 0.0),
        DVec3::new(0.0, d, 0.0),
        DVec3::new(f, d, f),
        DVec3::new(w - f, d, f),
    ]);
    // right
    builder.add_quad([
        DVec3::new(w, d, h),
        DVec3::new(w, d, 0.0),
        DVec3::new(w - f, d, f),
        DVec3::new(w - f, d, h - f),
    ]);
    // top
    builder.add_quad([
        DVec3::new(0.0, d, h),
        DVec3::new(w, d, h),
        DVec3::new(w - f, d, h - f),
        DVec3::new(f, d, h - f),
    ]);
    // left
    builder.add_quad([
        DVec3::new(0.0, d, 0.0),
        DVec3::new(0.0, d, h),
        DVec3::new(f, d, h - f),
        DVec3::new(f, d, f),
    ]);

    // Outer depth walls connecting the front perimeter to the back

    // bottom (z = 0), outward normal -Z
    builder.add_quad([
        DVec3::new(w, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, d, 0.0),
        DVec3::new(w, d, 0.0),
    ]);
    // top (z = height), outward normal +Z
    builder.add_quad([
        DVec3::new(0.0, 0.0, h),
        DVec3::new(w, 0.0, h),
        DVec3::new(w, d, h),
        DVec3::new(0.0, d, h),
    ]);
    // left (x = 0), outward normal -X
    builder.add_quad([
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, h),
        DVec3::new(0.0, d, h),
        DVec3::new(0.0, d, 0.0),
    ]);
    // right (x = width), outward normal +X
    builder.add_quad([
        DVec3::new(w, 0.0, h),
        DVec3::new(w, 0.0, 0.0),
        DVec3::new(w, d, 0.0),
        DVec3::new(w, d, h),
    ]);

    // Inner reveal walls around the opening, normals facing the opening

    // bottom (z = frame), normal +Z
    builder.add_quad([
        DVec3::new(f, 0.0, f),
        DVec3::new(w - f, 0.0, f),
        DVec3::new(w - f, d, f),
        DVec3::new(f, d, f),
    ]);
    // top (z = height - frame), normal -Z
    builder.add_quad([
        DVec3::new(w - f, 0.0, h - f),
        DVec3::new(f, 0.0, h - f),
        DVec3::new(f, d, h - f),
        DVec3::new(w - f, d, h - f),
    ]);
    // left (x = frame), normal +X
    builder.add_quad([
        DVec3::new(f, 0.0, h - f),
        DVec3::new(f, 0.0, f),
        DVec3::new(f, d, f),
        DVec3::new(f, d, h - f),
    ]);
    // right (x = width - frame), normal -X
    builder.add_quad([
        DVec3::new(w - f, 0.0, f),
        DVec3::new(w - f, 0.0, h - f),
        DVec3::new(w - f, d, h - f),
        DVec3::new(w - f, d, f),
    ]);

    builder.finish()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::FRAME_CLAMP_EPSILON;

    #[test]
    fn test_baseline_counts() {
        // Outer rectangle corners x2 (front/back) plus inner corners x2.
        let mesh = build_window(&WindowParams::new(1.0, 1.0, 0.1, 0.1));
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.face_count(), 16);
    }

    #[test]
    fn test_build_is_deterministic() {
        let params = WindowParams::new(2.0, 1.5, 0.25, 0.2);
        let first = build_window(&params);
        let second = build_window(&params);
        assert_eq!(first.vertices(), second.vertices());
        assert_eq!(first.faces(), second.faces());
    }

    #[test]
    fn test_rebuild_matches_initial_build() {
        // Regeneration is a pure function of the parameters, not of any
        // prior mesh state.
        let params = WindowParams::new(1.0, 1.0, 0.1, 0.1);
        let initial = build_window(&params);
        let _other = build_window(&WindowParams::new(3.0, 2.0, 0.5, 0.4));
        let rebuilt = build_window(&params);
        assert_eq!(initial.vertices(), rebuilt.vertices());
        assert_eq!(initial.faces(), rebuilt.faces());
    }

    #[test]
    fn test_no_duplicate_vertices() {
        let mesh = build_window(&WindowParams::new(1.0, 1.0, 0.1, 0.1));
        let vertices = mesh.vertices();
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                assert_ne!(vertices[i], vertices[j], "vertices {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_no_duplicate_faces() {
        let mesh = build_window(&WindowParams::new(1.0, 1.0, 0.1, 0.1));
        let keys: Vec<[u32; 4]> = mesh
            .faces()
            .iter()
            .map(|face| {
                let mut key = *face;
                key.sort_unstable();
                key
            })
            .collect();
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i], keys[j], "faces {i} and {j} share a vertex set");
            }
        }
    }

    #[test]
    fn test_all_faces_reference_valid_vertices() {
        let mesh = build_window(&WindowParams::new(2.0, 1.0, 0.3, 0.25));
        assert!(mesh.validate());
    }

    #[test]
    fn test_oversized_frame_is_clamped() {
        // 2 * 0.6 exceeds both width and height; the build must still
        // produce the full frame using the clamped value.
        let params = WindowParams::new(1.0, 1.0, 0.1, 0.6);
        let mesh = build_window(&params);
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.face_count(), 16);

        let frame = params.clamped_frame_width();
        assert_eq!(frame, 1.0 / 2.0 - FRAME_CLAMP_EPSILON);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 0.1, 1.0));
    }

    #[test]
    fn test_flat_window_builds_full_topology() {
        // Height-dominated clamp: the width reduction overshoots the height
        // check, so the height clamp re-reduces the frame.
        let params = WindowParams::new(1.0, 0.01, 0.1, 0.6);
        let mesh = build_window(&params);
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.face_count(), 16);
        assert!(mesh.validate());
    }

    #[test]
    fn test_bounding_box_spans_parameters() {
        let mesh = build_window(&WindowParams::new(2.0, 3.0, 0.5, 0.2));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(2.0, 0.5, 3.0));
    }

    #[test]
    fn test_first_face_uses_first_vertices() {
        // The first quad interns four fresh points, in winding order.
        let mesh = build_window(&WindowParams::default());
        assert_eq!(mesh.face(0), [0, 1, 2, 3]);
        assert_eq!(mesh.vertex(0), DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(1), DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_add_quad_reuses_interned_vertices() {
        let mut builder = FrameBuilder::new();
        let status = builder.add_quad([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ]);
        assert_eq!(status, QuadStatus::Added);

        let status = builder.add_quad([
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
        ]);
        assert_eq!(status, QuadStatus::Added);
        // The shared edge contributes no new vertices.
        assert_eq!(builder.vertex_count(), 6);
        assert_eq!(builder.face_count(), 2);
    }

    #[test]
    fn test_add_quad_rejects_rewound_duplicate() {
        let corners = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ];
        let mut builder = FrameBuilder::new();
        assert_eq!(builder.add_quad(corners), QuadStatus::Added);

        // Same vertex set, reversed winding.
        let reversed = [corners[3], corners[2], corners[1], corners[0]];
        assert_eq!(builder.add_quad(reversed), QuadStatus::Duplicate);
        assert_eq!(builder.face_count(), 1);

        let mesh = builder.finish();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0), [0, 1, 2, 3]);
    }
}

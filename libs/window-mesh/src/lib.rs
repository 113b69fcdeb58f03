//! # Window Mesh
//!
//! Parametric window-frame mesh generation.
//! Builds a closed frame solid from four scalar parameters: a front and a
//! back border rim, the depth walls around the outer perimeter, and the
//! reveal walls around the inner opening.
//!
//! ## Architecture
//!
//! ```text
//! WindowParams → FrameBuilder (VertexPool + face list) → QuadMesh
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use window_mesh::{build_window, WindowParams};
//!
//! let mesh = build_window(&WindowParams::default());
//! assert_eq!(mesh.vertex_count(), 16);
//! assert_eq!(mesh.face_count(), 16);
//! ```

pub mod builder;
pub mod mesh;
pub mod params;
pub mod pool;

pub use builder::{build_window, FrameBuilder, QuadStatus};
pub use mesh::QuadMesh;
pub use params::WindowParams;
pub use pool::VertexPool;

//! # Window Scene
//!
//! Host adapter for the window mesh generator. Models the scene-graph
//! surface the generator plugs into: named mesh objects with custom
//! properties, an active selection, and object/edit interaction modes.
//!
//! ## Architecture
//!
//! ```text
//! WindowOperator → window-mesh (build_window) → Scene (MeshObject)
//! ```
//!
//! The core builder stays free of host types; all object mutation, parameter
//! persistence, and mode handling happens here.
//!
//! ## Usage
//!
//! ```rust
//! use window_mesh::WindowParams;
//! use window_scene::{Scene, WindowOperator};
//!
//! let mut scene = Scene::new();
//! let operator = WindowOperator::new(WindowParams::default());
//! let index = operator.execute(&mut scene).unwrap();
//! assert_eq!(scene.object(index).unwrap().data.faces.len(), 16);
//! ```

pub mod error;
pub mod object;
pub mod operator;
pub mod properties;
pub mod scene;

pub use error::SceneError;
pub use object::{MeshData, MeshObject};
pub use operator::{is_window_object, window_params_from_object, WindowOperator};
pub use properties::{PropertyMap, PropertyValue};
pub use scene::{EditorMode, Scene};

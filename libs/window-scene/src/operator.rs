//! # Window Operator
//!
//! The two invocation modes of the generator over a scene: create or replace
//! a whole object, and inject geometry into an object being edited. Both
//! call the identical mesh build; only the destination differs.

use crate::error::SceneError;
use crate::object::{MeshData, MeshObject};
use crate::properties::{
    PropertyMap, PropertyValue, CHANGE_KEY, DEPTH_KEY, FRAME_WIDTH_KEY, HEIGHT_KEY,
    WIDTH_KEY, WINDOW_MARKER_KEY,
};
use crate::scene::{EditorMode, Scene};
use log::warn;
use window_mesh::{build_window, WindowParams};

/// Name given to newly created window objects.
const WINDOW_OBJECT_NAME: &str = "House Window";

// =============================================================================
// OPERATOR
// =============================================================================

/// One invocation of the window generator against a scene.
///
/// # Example
///
/// ```rust
/// use window_mesh::WindowParams;
/// use window_scene::{Scene, WindowOperator};
///
/// let mut scene = Scene::new();
/// let index = WindowOperator::new(WindowParams::default())
///     .execute(&mut scene)
///     .unwrap();
/// assert!(window_scene::is_window_object(scene.object(index).unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowOperator {
    /// Parameters for the build.
    pub params: WindowParams,
    /// Apply to the active window object instead of creating a new one.
    pub change: bool,
}

impl WindowOperator {
    /// Creates an operator that adds a new window object.
    pub fn new(params: WindowParams) -> Self {
        Self {
            params,
            change: false,
        }
    }

    /// Creates an operator that regenerates the active window object.
    pub fn for_change(params: WindowParams) -> Self {
        Self {
            params,
            change: true,
        }
    }

    /// Runs the operator. Returns the index of the affected object.
    ///
    /// In object mode the result is a new object, or the active object
    /// regenerated in place when it carries the window marker and `change`
    /// is set. In edit mode the generated geometry is appended to the
    /// object being edited and no properties are written.
    pub fn execute(&self, scene: &mut Scene) -> Result<usize, SceneError> {
        match scene.mode() {
            EditorMode::Object => self.execute_object_mode(scene),
            EditorMode::EditMesh => self.execute_edit_mode(scene),
        }
    }

    fn execute_object_mode(&self, scene: &mut Scene) -> Result<usize, SceneError> {
        let params = self.params.sanitize();
        let data = MeshData::from_quad_mesh(build_window(&params));

        let target = if self.change {
            scene
                .active_index()
                .filter(|&index| scene.object(index).is_some_and(is_window_object))
        } else {
            None
        };

        let index = match target {
            Some(index) => {
                let object = scene
                    .object_mut(index)
                    .ok_or(SceneError::InvalidObject(index))?;

                // Capture shading choices; replacement geometry shades flat.
                let auto_smooth = object.data.auto_smooth;
                let smooth = object.data.face_smooth.first().copied().unwrap_or(false);

                object.replace_geometry(data);
                object.data.auto_smooth = auto_smooth;
                if smooth {
                    object.data.set_all_smooth(true);
                }

                // Groups referencing the previous geometry no longer apply.
                // Cleanup is best-effort.
                if let Err(err) = scene.remove_all_vertex_groups() {
                    warn!("Vertex group cleanup failed: {err}");
                }

                index
            }
            None => scene.add_object(MeshObject::new(WINDOW_OBJECT_NAME, data)),
        };

        let object = scene
            .object_mut(index)
            .ok_or(SceneError::InvalidObject(index))?;
        object
            .props
            .insert(WINDOW_MARKER_KEY.to_string(), PropertyValue::Bool(true));
        object
            .props
            .insert(CHANGE_KEY.to_string(), PropertyValue::Bool(false));
        write_window_params(&mut object.props, &params);

        Ok(index)
    }

    fn execute_edit_mode(&self, scene: &mut Scene) -> Result<usize, SceneError> {
        let params = self.params.sanitize();
        let data = MeshData::from_quad_mesh(build_window(&params));

        let index = scene.active_index().ok_or(SceneError::NoActiveObject)?;
        let object = scene
            .object_mut(index)
            .ok_or(SceneError::InvalidObject(index))?;
        object.data.append(&data);

        Ok(index)
    }
}

// =============================================================================
// PARAMETER PERSISTENCE
// =============================================================================

/// True when the object carries the window marker property.
pub fn is_window_object(object: &MeshObject) -> bool {
    object
        .props
        .get(WINDOW_MARKER_KEY)
        .and_then(PropertyValue::as_bool)
        .unwrap_or(false)
}

/// Reads the persisted parameters back from an object.
///
/// A change invocation uses these as its defaults, so regeneration starts
/// from the dimensions the object was last built with.
pub fn window_params_from_object(object: &MeshObject) -> Result<WindowParams, SceneError> {
    Ok(WindowParams::new(
        read_float(&object.props, WIDTH_KEY)?,
        read_float(&object.props, HEIGHT_KEY)?,
        read_float(&object.props, DEPTH_KEY)?,
        read_float(&object.props, FRAME_WIDTH_KEY)?,
    ))
}

fn write_window_params(props: &mut PropertyMap, params: &WindowParams) {
    props.insert(WIDTH_KEY.to_string(), PropertyValue::Float(params.width));
    props.insert(HEIGHT_KEY.to_string(), PropertyValue::Float(params.height));
    props.insert(DEPTH_KEY.to_string(), PropertyValue::Float(params.depth));
    props.insert(
        FRAME_WIDTH_KEY.to_string(),
        PropertyValue::Float(params.frame_width),
    );
}

fn read_float(props: &PropertyMap, key: &str) -> Result<f64, SceneError> {
    match props.get(key) {
        Some(value) => value
            .as_float()
            .ok_or_else(|| SceneError::PropertyType(key.to_string())),
        None => Err(SceneError::MissingParameter(key.to_string())),
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Scene
//!
//! Minimal scene graph: an object list, an active selection, and the editor
//! interaction mode.

use crate::error::SceneError;
use crate::object::MeshObject;

/// Editor interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Whole objects are selected and replaced.
    #[default]
    Object,
    /// One object's mesh data is being edited in place.
    EditMesh,
}

/// Scene holding mesh objects.
///
/// # Example
///
/// ```rust
/// use window_scene::{MeshData, MeshObject, Scene};
///
/// let mut scene = Scene::new();
/// let index = scene.add_object(MeshObject::new("Window", MeshData::default()));
/// assert_eq!(scene.active_index(), Some(index));
/// ```
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<MeshObject>,
    active: Option<usize>,
    mode: EditorMode,
}

impl Scene {
    /// Creates an empty scene in object mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current interaction mode.
    #[inline]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches the interaction mode.
    ///
    /// Entering edit mode requires an active object to edit.
    pub fn set_mode(&mut self, mode: EditorMode) -> Result<(), SceneError> {
        if mode == EditorMode::EditMesh && self.active.is_none() {
            return Err(SceneError::NoActiveObject);
        }
        self.mode = mode;
        Ok(())
    }

    /// Appends an object and makes it active. Returns its index.
    pub fn add_object(&mut self, object: MeshObject) -> usize {
        let index = self.objects.len();
        self.objects.push(object);
        self.active = Some(index);
        index
    }

    /// Returns the number of objects in the scene.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns the object at `index`, if it exists.
    pub fn object(&self, index: usize) -> Option<&MeshObject> {
        self.objects.get(index)
    }

    /// Returns the object at `index` mutably, if it exists.
    pub fn object_mut(&mut self, index: usize) -> Option<&mut MeshObject> {
        self.objects.get_mut(index)
    }

    /// Returns the index of the active object.
    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Returns the active object, if any.
    pub fn active_object(&self) -> Option<&MeshObject> {
        self.active.and_then(|index| self.objects.get(index))
    }

    /// Returns the active object mutably, if any.
    pub fn active_object_mut(&mut self) -> Option<&mut MeshObject> {
        match self.active {
            Some(index) => self.objects.get_mut(index),
            None => None,
        }
    }

    /// Makes the object at `index` active.
    pub fn set_active(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.objects.len() {
            return Err(SceneError::InvalidObject(index));
        }
        self.active = Some(index);
        Ok(())
    }

    /// Removes every vertex group from the active object.
    ///
    /// Only available in object mode with an active object. Returns the
    /// number of groups removed.
    pub fn remove_all_vertex_groups(&mut self) -> Result<usize, SceneError> {
        if self.mode != EditorMode::Object {
            return Err(SceneError::WrongMode("object"));
        }
        let object = self
            .active_object_mut()
            .ok_or(SceneError::NoActiveObject)?;
        let removed = object.vertex_groups.len();
        object.vertex_groups.clear();
        Ok(removed)
    }
}

// =============================================================================
// TESTS
// =============================================================================

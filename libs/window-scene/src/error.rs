//! # Scene Errors
//!
//! Error types for the host-adapter layer.

use thiserror::Error;

/// Errors that can occur while operating on a scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// No object is active in the scene.
    #[error("No active object")]
    NoActiveObject,

    /// The scene is in the wrong interaction mode for the operation.
    #[error("Operation requires {0} mode")]
    WrongMode(&'static str),

    /// No object exists at the given index.
    #[error("No object at index {0}")]
    InvalidObject(usize),

    /// A persisted parameter is missing from the property store.
    #[error("Missing parameter property: {0}")]
    MissingParameter(String),

    /// A property exists but holds a value of the wrong type.
    #[error("Property has wrong type: {0}")]
    PropertyType(String),
}

// =============================================================================
// TESTS
// =============================================================================

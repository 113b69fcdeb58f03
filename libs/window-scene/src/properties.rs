//! # Object Properties
//!
//! Explicit key-value storage for custom object properties. The generator
//! persists its parameters through this store so that a later invocation can
//! read them back as defaults and regenerate in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker property identifying an object as a generated window.
pub const WINDOW_MARKER_KEY: &str = "house_window";

/// Property signalling a pending parameter change.
pub const CHANGE_KEY: &str = "change";

/// Persisted window width.
pub const WIDTH_KEY: &str = "width";

/// Persisted window height.
pub const HEIGHT_KEY: &str = "height";

/// Persisted window depth.
pub const DEPTH_KEY: &str = "depth";

/// Persisted frame width.
pub const FRAME_WIDTH_KEY: &str = "frame_width";

/// A single custom-property value.
///
/// The generator only ever stores booleans (markers, flags) and floats
/// (dimensions), so the value space is kept deliberately small.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Boolean flag.
    Bool(bool),
    /// Scalar dimension in modeling units.
    Float(f64),
}

impl PropertyValue {
    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(value) => Some(*value),
            PropertyValue::Float(_) => None,
        }
    }

    /// Returns the float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(value) => Some(*value),
            PropertyValue::Bool(_) => None,
        }
    }
}

/// Property store attached to a scene object.
///
/// Ordered map so that property iteration is deterministic.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

// =============================================================================
// TESTS
// =============================================================================

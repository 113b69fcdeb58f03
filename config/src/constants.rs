//! # Configuration Constants
//!
//! Centralized constants for the window mesh pipeline. Parameter minimums,
//! clamping tolerances, and default window dimensions are defined here.
//!
//! ## Categories
//!
//! - **Clamping**: Tolerances applied when reducing out-of-range parameters
//! - **Limits**: Minimum values accepted at the parameter level
//! - **Defaults**: Initial window dimensions offered to the user

// =============================================================================
// CLAMPING CONSTANTS
// =============================================================================

/// Margin subtracted when the frame width is reduced to fit a panel
/// dimension.
///
/// A frame width of exactly half the panel dimension would collapse the
/// inner opening to a line, so the clamp stops short by this amount.
///
/// # Example
///
/// ```rust
/// use config::constants::FRAME_CLAMP_EPSILON;
///
/// let width = 1.0;
/// let clamped = width / 2.0 - FRAME_CLAMP_EPSILON;
/// assert!(2.0 * clamped < width);
/// ```
pub const FRAME_CLAMP_EPSILON: f64 = 0.0001;

// =============================================================================
// PARAMETER LIMITS
// =============================================================================

/// Smallest accepted value for window width, height, and depth.
///
/// Enforced at the parameter level, before geometry construction.
pub const MIN_PANEL_DIMENSION: f64 = 0.001;

/// Smallest accepted value for the frame width.
///
/// Enforced at the parameter level, before geometry construction.
pub const MIN_FRAME_WIDTH: f64 = 0.0001;

// =============================================================================
// DEFAULT DIMENSIONS
// =============================================================================

/// Default window width in modeling units.
pub const DEFAULT_WINDOW_WIDTH: f64 = 1.0;

/// Default window height in modeling units.
pub const DEFAULT_WINDOW_HEIGHT: f64 = 1.0;

/// Default window depth in modeling units.
pub const DEFAULT_WINDOW_DEPTH: f64 = 0.1;

/// Default frame width in modeling units.
pub const DEFAULT_FRAME_WIDTH: f64 = 0.1;

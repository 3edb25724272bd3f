//! # PinchView Core
//!
//! View transform model (zoom scale + pan offset) and the pure arithmetic that
//! turns pinch, pan and tap gestures into the next transform, with
//! focal-point anchoring and zoom bounds.
//!
//! Nothing in this crate touches threads or surfaces; see `pinchview-surface`.

pub mod geometry;
pub mod gesture;
pub mod state;
pub mod transform;
pub mod updater;

pub use geometry::{Point2D, Rect2D};
pub use gesture::{GestureError, GestureEvent, GestureKind};
pub use state::ViewTransformState;
pub use transform::{ViewTransform, MAX_ZOOM, MIN_ZOOM};
pub use updater::{apply_gesture, apply_pan, apply_pinch, apply_tap, GestureOutcome};

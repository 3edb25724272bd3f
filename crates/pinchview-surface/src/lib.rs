//! # PinchView Surface
//!
//! The narrow contract between gesture handling and a rendering surface:
//! redraw requests, optional transform push, and pause/resume notifications.
//!
//! [`GestureController`] owns the view transform on the control thread and
//! publishes every change through a [`SharedTransform`] that render threads
//! read as copies.

pub mod controller;
pub mod settings;
pub mod snapshot;
pub mod surface;

pub use controller::GestureController;
pub use settings::{SettingsError, SurfaceSettings};
pub use snapshot::{SharedTransform, TransformSnapshot};
pub use surface::{RenderSurface, SurfaceLifecycle};

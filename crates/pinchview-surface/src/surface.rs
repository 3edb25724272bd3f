use pinchview_core::ViewTransform;
use serde::{Deserialize, Serialize};

/// The rendering surface as seen from the control thread.
///
/// Implementations must not block: `request_render` is a hint, and the actual
/// draw happens on the surface's own thread or loop.
pub trait RenderSurface {
    /// Ask the surface to redraw with the latest transform.
    fn request_render(&mut self);
    /// Host lifecycle: the application went to the background.
    fn on_pause(&mut self);
    /// Host lifecycle: the application came back to the foreground.
    fn on_resume(&mut self);
    /// Hand the new transform to surfaces that cache it instead of reading the
    /// shared snapshot. Pull-based surfaces can ignore it.
    fn push_transform(&mut self, _transform: ViewTransform) {}
}

/// Whether the surface is currently drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceLifecycle {
    #[default]
    Running,
    Paused,
}

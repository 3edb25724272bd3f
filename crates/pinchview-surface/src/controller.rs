use pinchview_core::{GestureError, GestureEvent, ViewTransform, ViewTransformState};

use crate::settings::SurfaceSettings;
use crate::snapshot::SharedTransform;
use crate::surface::{RenderSurface, SurfaceLifecycle};

/// Glue between the host's gesture callbacks and a [`RenderSurface`].
///
/// Owns the authoritative [`ViewTransformState`] and must be driven from a
/// single control thread. Render threads read the transform through
/// [`GestureController::shared_transform`].
#[derive(Debug)]
pub struct GestureController<S: RenderSurface> {
    state: ViewTransformState,
    shared: SharedTransform,
    surface: S,
    settings: SurfaceSettings,
    lifecycle: SurfaceLifecycle,
    /// A render was requested while paused and not yet issued.
    pending_render: bool,
}

impl<S: RenderSurface> GestureController<S> {
    pub fn new(surface: S, settings: SurfaceSettings) -> Self {
        Self::with_shared_transform(surface, settings, SharedTransform::new())
    }

    /// Use a fresh snapshot handle created up front, e.g. one already given to
    /// the render thread that backs `surface`.
    pub fn with_shared_transform(
        surface: S,
        settings: SurfaceSettings,
        shared: SharedTransform,
    ) -> Self {
        Self {
            state: ViewTransformState::new(),
            shared,
            surface,
            settings,
            lifecycle: SurfaceLifecycle::Running,
            pending_render: false,
        }
    }

    // ── Gestures ─────────────────────────────────────────────────────

    /// Apply one gesture, publish the result and ask for a redraw.
    /// A rejected gesture changes nothing and requests nothing.
    pub fn handle(&mut self, event: GestureEvent) -> Result<ViewTransform, GestureError> {
        let outcome = match self.state.apply(&event) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Rejected {} gesture: {}", event.kind(), e);
                return Err(e);
            }
        };

        let transform = outcome.transform;
        let revision = self.shared.publish(transform);
        log::debug!(
            "{} -> scale {:.4}, offset ({:.2}, {:.2}) [rev {}]",
            event.kind(),
            transform.scale,
            transform.offset.x,
            transform.offset.y,
            revision
        );

        if self.settings.push_transform {
            self.surface.push_transform(transform);
        }
        if outcome.redraw {
            self.request_render();
        }
        Ok(transform)
    }

    /// Scale-detector callback: `factor` since the last callback, focus in
    /// screen pixels.
    pub fn on_scale(
        &mut self,
        factor: f64,
        focus_x: f64,
        focus_y: f64,
    ) -> Result<ViewTransform, GestureError> {
        self.handle(GestureEvent::pinch(factor, focus_x, focus_y))
    }

    /// Scroll callback: distance the finger travelled since the last callback.
    pub fn on_scroll(
        &mut self,
        distance_x: f64,
        distance_y: f64,
    ) -> Result<ViewTransform, GestureError> {
        self.handle(GestureEvent::pan(distance_x, distance_y))
    }

    pub fn on_single_tap_up(&mut self, x: f64, y: f64) -> Result<ViewTransform, GestureError> {
        self.handle(GestureEvent::tap(x, y))
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    pub fn on_pause(&mut self) {
        log::debug!("Surface paused (was {:?})", self.lifecycle);
        self.lifecycle = SurfaceLifecycle::Paused;
        self.surface.on_pause();
    }

    pub fn on_resume(&mut self) {
        log::debug!("Surface resumed (was {:?})", self.lifecycle);
        self.lifecycle = SurfaceLifecycle::Running;
        self.surface.on_resume();
        if std::mem::take(&mut self.pending_render) {
            log::trace!("Issuing render deferred during pause");
            self.surface.request_render();
        }
    }

    fn request_render(&mut self) {
        if self.lifecycle == SurfaceLifecycle::Paused && self.settings.defer_render_while_paused {
            log::trace!("Render deferred until resume");
            self.pending_render = true;
        } else {
            log::trace!("Render requested");
            self.surface.request_render();
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn transform(&self) -> ViewTransform {
        self.state.get()
    }

    /// Handle for render threads; clones share the same snapshot slot.
    pub fn shared_transform(&self) -> SharedTransform {
        self.shared.clone()
    }

    pub fn lifecycle(&self) -> SurfaceLifecycle {
        self.lifecycle
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending_render
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

//! Gesture-to-transform arithmetic.
//!
//! Every function here is pure: it takes the current transform and one gesture
//! and returns the next transform. Storing the result is the caller's job.

use crate::geometry::Point2D;
use crate::gesture::{GestureError, GestureEvent, GestureKind};
use crate::transform::{ViewTransform, MAX_ZOOM, MIN_ZOOM};

/// Result of applying one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOutcome {
    pub transform: ViewTransform,
    /// Whether the surface should redraw. Every accepted gesture asks for one.
    pub redraw: bool,
}

/// Zoom by `factor` around the screen point `focal`.
///
/// The new scale is clamped to `[MIN_ZOOM, MAX_ZOOM]` and the offset is
/// recomputed with the clamped ratio `s1 / s0`, so at a clamp boundary the
/// focal point drifts instead of the offset freezing.
pub fn apply_pinch(
    current: &ViewTransform,
    factor: f64,
    focal: Point2D,
) -> Result<ViewTransform, GestureError> {
    GestureEvent::Pinch { factor, focal }.validate()?;

    let s0 = current.scale;
    let o0 = current.offset;
    let s1 = (s0 * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    if s1 != s0 * factor {
        log::trace!("Pinch scale {} clamped to {}", s0 * factor, s1);
    }

    // Same scale means ratio 1: keep the offset bit-for-bit instead of
    // round-tripping it through the focal point.
    if s1 == s0 {
        return Ok(*current);
    }

    let ratio = s1 / s0;
    let next = ViewTransform {
        scale: s1,
        offset: Point2D::new(
            focal.x - (focal.x - o0.x) * ratio,
            focal.y - (focal.y - o0.y) * ratio,
        ),
    };
    ensure_finite(GestureKind::Pinch, next)
}

/// Drag the content by a scroll distance. The content moves opposite to the
/// reported distance, following the finger. Offset is unbounded.
pub fn apply_pan(
    current: &ViewTransform,
    delta_x: f64,
    delta_y: f64,
) -> Result<ViewTransform, GestureError> {
    GestureEvent::Pan { delta_x, delta_y }.validate()?;

    let next = ViewTransform {
        scale: current.scale,
        offset: current.offset.translate(-delta_x, -delta_y),
    };
    ensure_finite(GestureKind::Pan, next)
}

/// A tap never changes the transform; it only triggers a redraw.
pub fn apply_tap(current: &ViewTransform, _point: Point2D) -> ViewTransform {
    *current
}

/// Single entry point dispatching on the gesture variant.
pub fn apply_gesture(
    current: &ViewTransform,
    event: &GestureEvent,
) -> Result<GestureOutcome, GestureError> {
    let transform = match *event {
        GestureEvent::Pinch { factor, focal } => apply_pinch(current, factor, focal)?,
        GestureEvent::Pan { delta_x, delta_y } => apply_pan(current, delta_x, delta_y)?,
        GestureEvent::Tap { point } => {
            event.validate()?;
            apply_tap(current, point)
        }
    };
    Ok(GestureOutcome {
        transform,
        redraw: true,
    })
}

fn ensure_finite(kind: GestureKind, next: ViewTransform) -> Result<ViewTransform, GestureError> {
    if next.scale.is_finite() && next.offset.is_finite() {
        Ok(next)
    } else {
        Err(GestureError::NonFiniteResult { kind })
    }
}

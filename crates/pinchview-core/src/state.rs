use crate::gesture::{GestureError, GestureEvent};
use crate::transform::ViewTransform;
use crate::updater::{self, GestureOutcome};

/// Owner of the authoritative view transform.
///
/// Lives on the control thread; the render side only ever sees copies.
#[derive(Debug, Clone, Default)]
pub struct ViewTransformState {
    current: ViewTransform,
}

impl ViewTransformState {
    pub fn new() -> Self {
        Self {
            current: ViewTransform::identity(),
        }
    }

    pub fn get(&self) -> ViewTransform {
        self.current
    }

    /// Replace the stored transform. A NaN or infinite component, or a scale
    /// outside `[MIN_ZOOM, MAX_ZOOM]`, is rejected and the old value kept.
    pub fn set(&mut self, next: ViewTransform) -> Result<(), GestureError> {
        if !next.is_valid() {
            log::warn!("Refusing to store invalid transform {:?}", next);
            return Err(GestureError::InvalidTransform {
                scale: next.scale,
                x: next.offset.x,
                y: next.offset.y,
            });
        }
        self.current = next;
        Ok(())
    }

    /// Run `event` through the updater and store the result. On error the
    /// stored transform is left as it was.
    pub fn apply(&mut self, event: &GestureEvent) -> Result<GestureOutcome, GestureError> {
        let outcome = updater::apply_gesture(&self.current, event)?;
        self.set(outcome.transform)?;
        Ok(outcome)
    }
}

use std::sync::{Arc, PoisonError, RwLock};

use pinchview_core::ViewTransform;
use serde::{Deserialize, Serialize};

/// Copy of the transform handed to the render side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformSnapshot {
    pub transform: ViewTransform,
    /// Bumped on every publish; 0 means nothing has been published yet.
    pub revision: u64,
}

impl TransformSnapshot {
    pub fn initial() -> Self {
        Self {
            transform: ViewTransform::identity(),
            revision: 0,
        }
    }
}

/// Single-writer, many-reader handle around the latest [`TransformSnapshot`].
///
/// The control thread publishes; render threads take copies. Clones share the
/// same slot.
#[derive(Debug, Clone)]
pub struct SharedTransform {
    slot: Arc<RwLock<TransformSnapshot>>,
}

impl Default for SharedTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedTransform {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(TransformSnapshot::initial())),
        }
    }

    /// Replace the shared transform and return the new revision.
    pub fn publish(&self, transform: ViewTransform) -> u64 {
        // The snapshot is Copy and written in one assignment, so a poisoned
        // lock still holds a consistent value.
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.transform = transform;
        slot.revision += 1;
        slot.revision
    }

    pub fn snapshot(&self) -> TransformSnapshot {
        *self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn revision(&self) -> u64 {
        self.snapshot().revision
    }
}

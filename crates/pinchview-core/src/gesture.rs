use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point2D;

/// A high-level gesture reported by the host's gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Two-finger pinch: scale multiplier since the previous callback, and
    /// the screen-space point between the fingers.
    Pinch { factor: f64, focal: Point2D },
    /// Single-finger drag distance since the previous callback.
    Pan { delta_x: f64, delta_y: f64 },
    /// Single tap.
    Tap { point: Point2D },
}

impl GestureEvent {
    pub fn pinch(factor: f64, focal_x: f64, focal_y: f64) -> Self {
        GestureEvent::Pinch {
            factor,
            focal: Point2D::new(focal_x, focal_y),
        }
    }

    pub fn pan(delta_x: f64, delta_y: f64) -> Self {
        GestureEvent::Pan { delta_x, delta_y }
    }

    pub fn tap(x: f64, y: f64) -> Self {
        GestureEvent::Tap {
            point: Point2D::new(x, y),
        }
    }

    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::Pinch { .. } => GestureKind::Pinch,
            GestureEvent::Pan { .. } => GestureKind::Pan,
            GestureEvent::Tap { .. } => GestureKind::Tap,
        }
    }

    /// Check the event against the gesture layer's contract.
    pub fn validate(&self) -> Result<(), GestureError> {
        match *self {
            GestureEvent::Pinch { factor, focal } => {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(GestureError::InvalidScaleFactor(factor));
                }
                check_point(GestureKind::Pinch, focal)
            }
            GestureEvent::Pan { delta_x, delta_y } => {
                check_point(GestureKind::Pan, Point2D::new(delta_x, delta_y))
            }
            GestureEvent::Tap { point } => check_point(GestureKind::Tap, point),
        }
    }
}

fn check_point(kind: GestureKind, point: Point2D) -> Result<(), GestureError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(GestureError::NonFiniteCoordinate {
            kind,
            x: point.x,
            y: point.y,
        })
    }
}

/// Discriminant of [`GestureEvent`], used in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    Pinch,
    Pan,
    Tap,
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GestureKind::Pinch => "pinch",
            GestureKind::Pan => "pan",
            GestureKind::Tap => "tap",
        };
        f.write_str(name)
    }
}

/// Contract violations by the gesture layer. A rejected gesture leaves the
/// stored transform untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GestureError {
    #[error("Pinch scale factor must be finite and > 0, got {0}")]
    InvalidScaleFactor(f64),

    #[error("Non-finite coordinate in {kind} gesture: ({x}, {y})")]
    NonFiniteCoordinate { kind: GestureKind, x: f64, y: f64 },

    #[error("{kind} gesture would produce a non-finite transform")]
    NonFiniteResult { kind: GestureKind },

    #[error("Transform out of range: scale {scale}, offset ({x}, {y})")]
    InvalidTransform { scale: f64, x: f64, y: f64 },
}

use serde::{Deserialize, Serialize};

/// A 2D point in screen space (or content space, depending on context).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle, used for the visible region of the content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Rect2D {
    pub fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_translate() {
        let p = Point2D::new(3.0, 4.0).translate(-1.0, 2.5);
        assert_eq!(p, Point2D::new(2.0, 6.5));
    }

    #[test]
    fn test_point_finite() {
        assert!(Point2D::new(1.0, -2.0).is_finite());
        assert!(!Point2D::new(f64::NAN, 0.0).is_finite());
        assert!(!Point2D::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_rect_dimensions() {
        let r = Rect2D::new(Point2D::new(-10.0, 0.0), Point2D::new(30.0, 20.0));
        assert!((r.width() - 40.0).abs() < 1e-10);
        assert!((r.height() - 20.0).abs() < 1e-10);
        assert_eq!(r.center(), Point2D::new(10.0, 10.0));
    }
}

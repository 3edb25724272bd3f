use serde::{Deserialize, Serialize};

use crate::geometry::{Point2D, Rect2D};

/// Smallest zoom factor a transform may reach. Strictly positive so the
/// anchoring ratio `s1 / s0` is always defined.
pub const MIN_ZOOM: f64 = 0.001;

/// Largest zoom factor a transform may reach.
pub const MAX_ZOOM: f64 = 1000.0;

/// Uniform zoom plus pan offset mapping content space onto screen space.
///
/// `screen = content * scale + offset`, so `offset` is the screen position of
/// the content origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Zoom factor (screen pixels per content unit).
    pub scale: f64,
    /// Screen-space position of content origin (0, 0).
    pub offset: Point2D,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    pub fn new(scale: f64, offset: Point2D) -> Self {
        Self { scale, offset }
    }

    /// Initial transform of a freshly created surface.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Point2D::ORIGIN,
        }
    }

    /// Finite offset and a scale inside `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite()
            && (MIN_ZOOM..=MAX_ZOOM).contains(&self.scale)
            && self.offset.is_finite()
    }

    /// Convert a screen-space point to content space.
    pub fn screen_to_content(&self, screen: Point2D) -> Point2D {
        Point2D::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Convert a content-space point to screen space.
    pub fn content_to_screen(&self, content: Point2D) -> Point2D {
        Point2D::new(
            content.x * self.scale + self.offset.x,
            content.y * self.scale + self.offset.y,
        )
    }

    /// Content-space rectangle visible on a surface of `width` x `height` pixels.
    pub fn visible_content_bounds(&self, width: f64, height: f64) -> Rect2D {
        Rect2D::new(
            self.screen_to_content(Point2D::ORIGIN),
            self.screen_to_content(Point2D::new(width, height)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_default() {
        let t = ViewTransform::default();
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.offset, Point2D::ORIGIN);
        assert!(t.is_valid());
    }

    #[test]
    fn test_screen_content_roundtrip() {
        let t = ViewTransform::new(2.5, Point2D::new(-40.0, 12.0));
        let screen = Point2D::new(310.0, -7.5);
        let back = t.content_to_screen(t.screen_to_content(screen));
        assert!((back.x - screen.x).abs() < 1e-9);
        assert!((back.y - screen.y).abs() < 1e-9);
    }

    #[test]
    fn test_offset_is_screen_position_of_origin() {
        let t = ViewTransform::new(4.0, Point2D::new(25.0, -3.0));
        assert_eq!(t.content_to_screen(Point2D::ORIGIN), t.offset);
    }

    #[test]
    fn test_visible_bounds() {
        let t = ViewTransform::new(2.0, Point2D::new(-100.0, -100.0));
        let bounds = t.visible_content_bounds(800.0, 600.0);
        assert_eq!(bounds.min, Point2D::new(50.0, 50.0));
        assert_eq!(bounds.max, Point2D::new(450.0, 350.0));
        assert_eq!(bounds.width(), 400.0);
        assert_eq!(bounds.height(), 300.0);
    }

    #[test]
    fn test_is_valid_rejects_out_of_range() {
        assert!(!ViewTransform::new(0.0, Point2D::ORIGIN).is_valid());
        assert!(!ViewTransform::new(MAX_ZOOM * 2.0, Point2D::ORIGIN).is_valid());
        assert!(!ViewTransform::new(1.0, Point2D::new(f64::NAN, 0.0)).is_valid());
        assert!(ViewTransform::new(MIN_ZOOM, Point2D::ORIGIN).is_valid());
        assert!(ViewTransform::new(MAX_ZOOM, Point2D::ORIGIN).is_valid());
    }

    #[test]
    fn test_serde_shape() {
        let t = ViewTransform::new(2.0, Point2D::new(-100.0, -100.0));
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json["scale"], 2.0);
        assert_eq!(json["offset"]["x"], -100.0);
    }
}

//! Collision detection for the ball against paddles
//!
//! Paddles are axis-aligned rectangles and the ball is a circle, so a hit is
//! decided by the nearest point of the rectangle to the circle center.

use glam::DVec2;

use crate::clamp;

/// Axis-aligned rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(w, h),
        }
    }

    /// Point of the rectangle closest to `p` (p itself when inside)
    #[inline]
    pub fn nearest_point(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            clamp(p.x, self.pos.x, self.pos.x + self.size.x),
            clamp(p.y, self.pos.y, self.pos.y + self.size.y),
        )
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Compares squared distances, so touching counts as a hit.
#[inline]
pub fn circle_rect_collision(center: DVec2, radius: f64, rect: &Rect) -> bool {
    let d = center - rect.nearest_point(center);
    d.length_squared() <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Rect {
        Rect::new(24.0, 250.0, 12.0, 100.0)
    }

    #[test]
    fn test_circle_inside_rect() {
        assert!(circle_rect_collision(DVec2::new(30.0, 300.0), 8.0, &paddle()));
    }

    #[test]
    fn test_circle_touching_edge() {
        // Exactly one radius away from the right edge
        assert!(circle_rect_collision(DVec2::new(44.0, 300.0), 8.0, &paddle()));
        assert!(!circle_rect_collision(DVec2::new(44.01, 300.0), 8.0, &paddle()));
    }

    #[test]
    fn test_corner_uses_euclidean_distance() {
        // dx = dy = 6 from the top-right corner: distance ~8.49 > 8
        assert!(!circle_rect_collision(DVec2::new(42.0, 244.0), 8.0, &paddle()));
        // dx = dy = 5: distance ~7.07 < 8
        assert!(circle_rect_collision(DVec2::new(41.0, 245.0), 8.0, &paddle()));
    }

    #[test]
    fn test_miss_far_away() {
        assert!(!circle_rect_collision(DVec2::new(400.0, 300.0), 8.0, &paddle()));
    }

    #[test]
    fn test_nearest_point() {
        let r = paddle();
        assert_eq!(r.nearest_point(DVec2::new(0.0, 0.0)), DVec2::new(24.0, 250.0));
        assert_eq!(r.nearest_point(DVec2::new(30.0, 300.0)), DVec2::new(30.0, 300.0));
    }
}

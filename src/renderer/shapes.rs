//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in playfield coordinates.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;

/// Same color with its alpha scaled
#[inline]
pub fn fade(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}

/// Component-wise blend of two colors (`t` = 0 gives `a`)
#[inline]
pub fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Generate vertices for a quad with a top-to-bottom color gradient
pub fn vertical_gradient_rect(pos: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vertical_gradient_rect(pos, size, color, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Quarter-circle fan used for rounded corners
fn corner(center: Vec2, radius: f32, start: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let a1 = start + FRAC_PI_2 * (i as f32 / segments as f32);
        let a2 = start + FRAC_PI_2 * ((i + 1) as f32 / segments as f32);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(center.x + radius * a1.cos(), center.y + radius * a1.sin(), color));
        vertices.push(Vertex::new(center.x + radius * a2.cos(), center.y + radius * a2.sin(), color));
    }
    vertices
}

/// Generate vertices for a rectangle with rounded corners
///
/// The radius is limited to half the shorter side.
pub fn rounded_rect(pos: Vec2, size: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let r = radius.min(size.x.min(size.y) / 2.0).max(0.0);
    if r <= 0.0 {
        return rect(pos, size, color);
    }

    let mut vertices = Vec::with_capacity(18 + 4 * 18);
    // Center column, then the two side strips between the corners
    vertices.extend(rect(Vec2::new(pos.x + r, pos.y), Vec2::new(size.x - 2.0 * r, size.y), color));
    vertices.extend(rect(Vec2::new(pos.x, pos.y + r), Vec2::new(r, size.y - 2.0 * r), color));
    vertices.extend(rect(
        Vec2::new(pos.x + size.x - r, pos.y + r),
        Vec2::new(r, size.y - 2.0 * r),
        color,
    ));

    let segments = 6;
    let (l, t) = (pos.x + r, pos.y + r);
    let (rt, b) = (pos.x + size.x - r, pos.y + size.y - r);
    // y grows downward: angle 0 points right, π/2 points down
    vertices.extend(corner(Vec2::new(rt, b), r, 0.0, color, segments));
    vertices.extend(corner(Vec2::new(l, b), r, FRAC_PI_2, color, segments));
    vertices.extend(corner(Vec2::new(l, t), r, PI, color, segments));
    vertices.extend(corner(Vec2::new(rt, t), r, PI + FRAC_PI_2, color, segments));
    vertices
}

/// Soft halo around a rounded rectangle: `layers` expanding, fading copies
pub fn rect_glow(pos: Vec2, size: Vec2, radius: f32, color: [f32; 4], spread: f32, layers: u32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for i in (1..=layers).rev() {
        let t = i as f32 / layers as f32;
        let grow = spread * t;
        vertices.extend(rounded_rect(
            pos - Vec2::splat(grow),
            size + Vec2::splat(2.0 * grow),
            radius + grow,
            fade(color, (1.0 - t) * 0.5 + 0.1),
        ));
    }
    vertices
}

/// Soft halo around a circle
pub fn circle_glow(center: Vec2, radius: f32, color: [f32; 4], spread: f32, layers: u32, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for i in (1..=layers).rev() {
        let t = i as f32 / layers as f32;
        vertices.extend(circle(
            center,
            radius + spread * t,
            fade(color, (1.0 - t) * 0.5 + 0.1),
            segments,
        ));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for v in vertices {
            let p = Vec2::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(bounds(&v), (Vec2::new(10.0, 20.0), Vec2::new(40.0, 60.0)));
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let pos = Vec2::new(24.0, 250.0);
        let size = Vec2::new(12.0, 100.0);
        let v = rounded_rect(pos, size, 8.0, [1.0; 4]);
        assert_eq!(v.len() % 3, 0);
        let (min, max) = bounds(&v);
        assert!(min.x >= pos.x - 1e-4 && min.y >= pos.y - 1e-4);
        assert!(max.x <= pos.x + size.x + 1e-4 && max.y <= pos.y + size.y + 1e-4);
    }

    #[test]
    fn test_circle_extent() {
        let v = circle(Vec2::new(400.0, 300.0), 8.0, [1.0; 4], 32);
        assert_eq!(v.len(), 96);
        let (min, max) = bounds(&v);
        assert!((min.x - 392.0).abs() < 1e-3 && (max.x - 408.0).abs() < 1e-3);
    }

    #[test]
    fn test_glow_layers() {
        assert!(circle_glow(Vec2::ZERO, 8.0, [1.0; 4], 10.0, 0, 16).is_empty());
        let v = circle_glow(Vec2::ZERO, 8.0, [1.0; 4], 10.0, 3, 16);
        assert_eq!(v.len(), 3 * 16 * 3);
    }

    #[test]
    fn test_mix_and_fade() {
        assert_eq!(mix([0.0; 4], [1.0; 4], 0.5), [0.5; 4]);
        assert_eq!(fade([1.0, 1.0, 1.0, 0.8], 0.5), [1.0, 1.0, 1.0, 0.4]);
    }
}

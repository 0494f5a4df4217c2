//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in logical screen pixels
//! (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;
use crate::palette::Rgba;
use crate::sim::Rect;

/// Push a quad given corners in order (top-left, top-right, bottom-right, bottom-left)
pub fn push_quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: Rgba) {
    push_quad_colors(out, corners, [color; 4]);
}

/// Push a quad with a color per corner
pub fn push_quad_colors(out: &mut Vec<Vertex>, corners: [Vec2; 4], colors: [Rgba; 4]) {
    let [a, b, c, d] = corners;
    out.push(Vertex::at(a, colors[0]));
    out.push(Vertex::at(b, colors[1]));
    out.push(Vertex::at(c, colors[2]));

    out.push(Vertex::at(a, colors[0]));
    out.push(Vertex::at(c, colors[2]));
    out.push(Vertex::at(d, colors[3]));
}

fn corners(rect: Rect) -> [Vec2; 4] {
    [
        Vec2::new(rect.left(), rect.top()),
        Vec2::new(rect.right(), rect.top()),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.left(), rect.bottom()),
    ]
}

/// Push a filled axis-aligned rectangle
pub fn push_rect(out: &mut Vec<Vertex>, rect: Rect, color: Rgba) {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return;
    }
    push_quad(out, corners(rect), color);
}

/// Generate vertices for a filled rectangle
pub fn rect(rect: Rect, color: Rgba) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_rect(&mut vertices, rect, color);
    vertices
}

/// Rectangle border drawn inside `rect`
pub fn rect_outline(rect: Rect, thickness: f32, color: Rgba) -> Vec<Vertex> {
    let t = thickness.min(rect.w / 2.0).min(rect.h / 2.0);
    let mut vertices = Vec::with_capacity(24);
    push_rect(&mut vertices, Rect::new(rect.x, rect.y, rect.w, t), color);
    push_rect(
        &mut vertices,
        Rect::new(rect.x, rect.bottom() - t, rect.w, t),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.x, rect.y + t, t, rect.h - 2.0 * t),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.right() - t, rect.y + t, t, rect.h - 2.0 * t),
        color,
    );
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32) -> Vec<Vertex> {
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

/// Quarter-circle fan starting at angle `start` (radians, y down)
fn push_corner(out: &mut Vec<Vertex>, center: Vec2, radius: f32, start: f32, color: Rgba) {
    const STEPS: u32 = 6;
    for i in 0..STEPS {
        let t1 = start + FRAC_PI_2 * i as f32 / STEPS as f32;
        let t2 = start + FRAC_PI_2 * (i + 1) as f32 / STEPS as f32;
        out.push(Vertex::at(center, color));
        out.push(Vertex::at(center + Vec2::from_angle(t1) * radius, color));
        out.push(Vertex::at(center + Vec2::from_angle(t2) * radius, color));
    }
}

/// Band between two radii over a quarter turn starting at `start`
fn push_corner_band(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner: f32,
    outer: f32,
    start: f32,
    color: Rgba,
) {
    const STEPS: u32 = 6;
    for i in 0..STEPS {
        let d1 = Vec2::from_angle(start + FRAC_PI_2 * i as f32 / STEPS as f32);
        let d2 = Vec2::from_angle(start + FRAC_PI_2 * (i + 1) as f32 / STEPS as f32);
        push_quad(
            out,
            [
                center + d1 * outer,
                center + d2 * outer,
                center + d2 * inner,
                center + d1 * inner,
            ],
            color,
        );
    }
}

/// The four corner centres of a rounded rect, clockwise from top-left,
/// each paired with the start angle of its quarter arc
fn corner_arcs(rect: Rect, r: f32) -> [(Vec2, f32); 4] {
    [
        (Vec2::new(rect.left() + r, rect.top() + r), PI),
        (Vec2::new(rect.right() - r, rect.top() + r), -FRAC_PI_2),
        (Vec2::new(rect.right() - r, rect.bottom() - r), 0.0),
        (Vec2::new(rect.left() + r, rect.bottom() - r), FRAC_PI_2),
    ]
}

/// Filled rectangle with rounded corners
pub fn rounded_rect(rect: Rect, radius: f32, color: Rgba) -> Vec<Vertex> {
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let mut vertices = Vec::with_capacity(6 * 3 + 4 * 18);

    // Centre column plus the two side strips between the corners
    push_rect(
        &mut vertices,
        Rect::new(rect.x + r, rect.y, rect.w - 2.0 * r, rect.h),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.x, rect.y + r, r, rect.h - 2.0 * r),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.right() - r, rect.y + r, r, rect.h - 2.0 * r),
        color,
    );

    if r > 0.0 {
        for (center, start) in corner_arcs(rect, r) {
            push_corner(&mut vertices, center, r, start, color);
        }
    }
    vertices
}

/// Border of a rounded rectangle, drawn inside `rect`
pub fn rounded_rect_outline(rect: Rect, radius: f32, thickness: f32, color: Rgba) -> Vec<Vertex> {
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let t = thickness.min(rect.w / 2.0).min(rect.h / 2.0);
    let mut vertices = Vec::new();

    push_rect(
        &mut vertices,
        Rect::new(rect.x + r, rect.y, rect.w - 2.0 * r, t),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.x + r, rect.bottom() - t, rect.w - 2.0 * r, t),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.x, rect.y + r, t, rect.h - 2.0 * r),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.right() - t, rect.y + r, t, rect.h - 2.0 * r),
        color,
    );

    if r > 0.0 {
        for (center, start) in corner_arcs(rect, r) {
            push_corner_band(&mut vertices, center, (r - t).max(0.0), r, start, color);
        }
    }
    vertices
}

/// Top-to-bottom color ramp
pub fn vertical_gradient(rect: Rect, top: Rgba, bottom: Rgba) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad_colors(&mut vertices, corners(rect), [top, top, bottom, bottom]);
    vertices
}

/// Left-to-right color ramp
pub fn horizontal_gradient(rect: Rect, left: Rgba, right: Rgba) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad_colors(&mut vertices, corners(rect), [left, right, right, left]);
    vertices
}

/// Thick line segment
pub fn line(a: Vec2, b: Vec2, thickness: f32, color: Rgba) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, [a + perp, b + perp, b - perp, a - perp], color);
    vertices
}

/// Rotate vertices about `pivot` (counter-clockwise on screen for positive
/// `degrees`) and then shift them by `offset`
pub fn rotate_about(vertices: &mut [Vertex], pivot: Vec2, degrees: f32, offset: Vec2) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    for v in vertices.iter_mut() {
        let d = v.pos() - pivot;
        // y grows downward, so a visual CCW turn uses the transposed matrix
        let rotated = Vec2::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos);
        let p = pivot + rotated + offset;
        v.position = [p.x, p.y];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| (lo.min(v.pos()), hi.max(v.pos())),
        )
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(Rect::new(10.0, 20.0, 30.0, 40.0), palette::WHITE);
        assert_eq!(v.len(), 6);
        let (lo, hi) = bounds(&v);
        assert_eq!(lo, Vec2::new(10.0, 20.0));
        assert_eq!(hi, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        assert!(rect(Rect::new(0.0, 0.0, 0.0, 10.0), palette::WHITE).is_empty());
    }

    #[test]
    fn test_rounded_rect_stays_in_bounds() {
        let r = Rect::new(100.0, 100.0, 200.0, 50.0);
        for v in [
            rounded_rect(r, 8.0, palette::GREEN),
            rounded_rect_outline(r, 8.0, 2.0, palette::WHITE),
        ] {
            assert_eq!(v.len() % 3, 0);
            let (lo, hi) = bounds(&v);
            assert!(lo.x >= r.left() - 1e-3 && lo.y >= r.top() - 1e-3);
            assert!(hi.x <= r.right() + 1e-3 && hi.y <= r.bottom() + 1e-3);
        }
    }

    #[test]
    fn test_circle_segments() {
        let v = circle(Vec2::ZERO, 5.0, palette::RED, 12);
        assert_eq!(v.len(), 36);
        let (lo, hi) = bounds(&v);
        assert!((hi.x - 5.0).abs() < 1e-4 && (lo.x + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut v = vec![Vertex::new(10.0, 0.0, palette::WHITE)];
        rotate_about(&mut v, Vec2::ZERO, 90.0, Vec2::new(1.0, 0.0));
        // A point to the right ends up above the pivot (smaller y)
        assert!((v[0].position[0] - 1.0).abs() < 1e-4);
        assert!((v[0].position[1] + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_gradient_corner_colors() {
        let v = vertical_gradient(Rect::new(0.0, 0.0, 10.0, 10.0), palette::WHITE, palette::BLACK);
        assert_eq!(v[0].color, palette::WHITE);
        assert_eq!(v[2].color, palette::BLACK);
    }
}

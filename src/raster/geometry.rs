//! Distance and transform helpers shared by the shape rasterizers.

/// A point in surface pixel coordinates.
pub type Point = (f32, f32);

/// Euclidean distance between two points.
#[inline]
pub fn dist(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    let dx = x - cx;
    let dy = y - cy;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from a point to a line segment.
///
/// Returns the shortest distance from point (px, py) to the line segment
/// defined by endpoints (x1, y1) and (x2, y2).
pub fn dist_to_segment(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-10 {
        // Degenerate segment (point)
        return dist(px, py, x1, y1);
    }

    // Project point onto line, clamping to segment
    let t = ((px - x1) * dx + (py - y1) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    dist(px, py, x1 + t * dx, y1 + t * dy)
}

/// Rotate a point around the origin (angle in degrees, clockwise on a
/// y-down surface).
#[inline]
pub fn rotate_deg(x: f32, y: f32, angle_deg: f32) -> Point {
    let a = angle_deg.to_radians();
    let (sin_a, cos_a) = a.sin_cos();
    (x * cos_a - y * sin_a, x * sin_a + y * cos_a)
}

/// Point on an axis-aligned ellipse at `angle_deg`, measured clockwise from
/// three o'clock.
#[inline]
pub fn ellipse_point(cx: f32, cy: f32, rx: f32, ry: f32, angle_deg: f32) -> Point {
    let a = angle_deg.to_radians();
    (cx + rx * a.cos(), cy + ry * a.sin())
}

/// Signed distance from a point to a rounded rectangle.
///
/// Negative inside, positive outside. The rectangle spans
/// `[x, x + w] × [y, y + h]` with corner radius `r`.
pub fn rounded_rect_sdf(px: f32, py: f32, x: f32, y: f32, w: f32, h: f32, r: f32) -> f32 {
    let half_w = w / 2.0;
    let half_h = h / 2.0;
    let r = r.min(half_w).min(half_h);
    let qx = (px - (x + half_w)).abs() - (half_w - r);
    let qy = (py - (y + half_h)).abs() - (half_h - r);
    let outside = dist(qx.max(0.0), qy.max(0.0), 0.0, 0.0);
    outside + qx.max(qy).min(0.0) - r
}

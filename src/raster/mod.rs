//! # Shape Rasterizer
//!
//! Primitive shape drawing over any pixel [`Surface`]. Shapes are drawn with
//! hard (binary) edges; smooth results come from drawing on an oversized
//! surface and downscaling it (see [`crate::icons::supersample`]). The one
//! exception is [`fill_rounded_rect`], which computes edge coverage from a
//! signed distance so badge corners look clean at 1×.
//!
//! Coordinates follow the image crate: `(0, 0)` is the top-left pixel, `y`
//! grows downward, and integer coordinates address pixel positions. Angles are
//! in degrees, measured clockwise from three o'clock.
//!
//! ## Primitives
//!
//! | Function | Shape |
//! |----------|-------|
//! | [`fill_rect`] / [`stroke_rect`] | Axis-aligned rectangle (inclusive corners) |
//! | [`fill_polygon`] | Even-odd polygon fill |
//! | [`stroke_polyline`] | Connected segments with round joints |
//! | [`arc`] / [`chord`] | Elliptic arc, optionally closed by its chord |
//! | [`fill_ellipse`] / [`stroke_ellipse`] | Ellipse inscribed in a box |
//! | [`fill_rounded_rect`] / [`stroke_rounded_rect`] | Anti-aliased badge shape |

pub mod geometry;

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::color::Color;
use geometry::{Point, dist_to_segment, ellipse_point, rounded_rect_sdf};

/// A pixel target shapes can be drawn onto.
pub trait Surface {
    fn dimensions(&self) -> (u32, u32);

    /// Composite `color` over the pixel at `(x, y)` with the given coverage
    /// in `[0, 1]`. Out-of-bounds writes are ignored.
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32);
}

#[inline]
fn mix(dst: u8, src: u8, t: f32) -> u8 {
    (dst as f32 + (src as f32 - dst as f32) * t).round().clamp(0.0, 255.0) as u8
}

impl Surface for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let t = coverage.clamp(0.0, 1.0);
        if t <= 0.0 {
            return;
        }
        let Rgb([r, g, b]) = *self.get_pixel(x as u32, y as u32);
        self.put_pixel(
            x as u32,
            y as u32,
            Rgb([mix(r, color.r, t), mix(g, color.g, t), mix(b, color.b, t)]),
        );
    }
}

impl Surface for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let src_a = coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let Rgba([r, g, b, a]) = *self.get_pixel(x as u32, y as u32);
        let dst_a = a as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let channel = |dst: u8, src: u8| {
            let v = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        self.put_pixel(
            x as u32,
            y as u32,
            Rgba([
                channel(r, color.r),
                channel(g, color.g),
                channel(b, color.b),
                (out_a * 255.0).round() as u8,
            ]),
        );
    }
}

/// Clamp a float range to pixel indices within `0..limit`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> std::ops::RangeInclusive<i32> {
    let lo = (lo.floor() as i32).max(0);
    let hi = (hi.ceil() as i32).min(limit as i32 - 1);
    lo..=hi
}

/// Fill the rectangle with corners `(x0, y0)` and `(x1, y1)`, both inclusive.
pub fn fill_rect<S: Surface>(s: &mut S, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
    let (xa, xb) = (x0.min(x1).round() as i32, x0.max(x1).round() as i32);
    let (ya, yb) = (y0.min(y1).round() as i32, y0.max(y1).round() as i32);
    for y in ya..=yb {
        for x in xa..=xb {
            s.blend(x, y, color, 1.0);
        }
    }
}

/// Outline a rectangle; the stroke grows inward from the bounds.
pub fn stroke_rect<S: Surface>(
    s: &mut S,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    width: f32,
    color: Color,
) {
    let w = (width.round() - 1.0).max(0.0);
    fill_rect(s, x0, y0, x1, y0 + w, color);
    fill_rect(s, x0, y1 - w, x1, y1, color);
    fill_rect(s, x0, y0, x0 + w, y1, color);
    fill_rect(s, x1 - w, y0, x1, y1, color);
}

/// Fill a polygon using the even-odd rule.
pub fn fill_polygon<S: Surface>(s: &mut S, points: &[Point], color: Color) {
    if points.len() < 3 {
        return;
    }
    let (w, h) = s.dimensions();
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

    let mut crossings = Vec::with_capacity(points.len());
    for y in pixel_span(min_y, max_y, h) {
        let sy = y as f32;
        crossings.clear();
        for i in 0..points.len() {
            let (ax, ay) = points[i];
            let (bx, by) = points[(i + 1) % points.len()];
            // Half-open test so shared vertices are counted once
            if (ay <= sy && by > sy) || (by <= sy && ay > sy) {
                crossings.push(ax + (sy - ay) / (by - ay) * (bx - ax));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            for x in pixel_span(pair[0], pair[1], w) {
                let sx = x as f32;
                if sx >= pair[0] && sx <= pair[1] {
                    s.blend(x, y, color, 1.0);
                }
            }
        }
    }
}

/// Stamp one thick segment. Ends are round, so consecutive segments join
/// with a curved joint.
fn stamp_segment<S: Surface>(s: &mut S, a: Point, b: Point, width: f32, color: Color) {
    let (w, h) = s.dimensions();
    let half = (width / 2.0).max(0.5);
    let xs = pixel_span(a.0.min(b.0) - half, a.0.max(b.0) + half, w);
    for y in pixel_span(a.1.min(b.1) - half, a.1.max(b.1) + half, h) {
        for x in xs.clone() {
            if dist_to_segment(x as f32, y as f32, a.0, a.1, b.0, b.1) <= half {
                s.blend(x, y, color, 1.0);
            }
        }
    }
}

/// Stroke connected segments through `points` with round joints.
pub fn stroke_polyline<S: Surface>(s: &mut S, points: &[Point], width: f32, color: Color) {
    match points {
        [] => {}
        [p] => stamp_segment(s, *p, *p, width, color),
        _ => {
            for pair in points.windows(2) {
                stamp_segment(s, pair[0], pair[1], width, color);
            }
        }
    }
}

/// Stroke a single straight line.
pub fn line<S: Surface>(s: &mut S, a: Point, b: Point, width: f32, color: Color) {
    stamp_segment(s, a, b, width, color);
}

/// Centerline points of an arc whose stroke sits inside the bounding box.
fn arc_points(bbox: [f32; 4], start: f32, end: f32, width: f32) -> Vec<Point> {
    let [x0, y0, x1, y1] = bbox;
    let inset = width / 2.0;
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let rx = ((x1 - x0) / 2.0 - inset).max(0.0);
    let ry = ((y1 - y0) / 2.0 - inset).max(0.0);

    let mut end = end;
    while end < start {
        end += 360.0;
    }
    let span = end - start;
    let steps = ((span / 2.0).ceil() as usize).max(8);
    (0..=steps)
        .map(|i| ellipse_point(cx, cy, rx, ry, start + span * i as f32 / steps as f32))
        .collect()
}

/// Stroke an elliptic arc inscribed in `bbox = [x0, y0, x1, y1]` from
/// `start` to `end` degrees. An `end` below `start` wraps past 360.
pub fn arc<S: Surface>(s: &mut S, bbox: [f32; 4], start: f32, end: f32, width: f32, color: Color) {
    stroke_polyline(s, &arc_points(bbox, start, end, width), width, color);
}

/// Stroke an arc and the straight chord joining its endpoints.
pub fn chord<S: Surface>(
    s: &mut S,
    bbox: [f32; 4],
    start: f32,
    end: f32,
    width: f32,
    color: Color,
) {
    let points = arc_points(bbox, start, end, width);
    stroke_polyline(s, &points, width, color);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        line(s, *last, *first, width, color);
    }
}

/// Fill the ellipse inscribed in `bbox`.
pub fn fill_ellipse<S: Surface>(s: &mut S, bbox: [f32; 4], color: Color) {
    let [x0, y0, x1, y1] = bbox;
    let (w, h) = s.dimensions();
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let rx = ((x1 - x0) / 2.0).max(0.5);
    let ry = ((y1 - y0) / 2.0).max(0.5);
    for y in pixel_span(y0, y1, h) {
        for x in pixel_span(x0, x1, w) {
            let nx = (x as f32 - cx) / rx;
            let ny = (y as f32 - cy) / ry;
            if nx * nx + ny * ny <= 1.0 {
                s.blend(x, y, color, 1.0);
            }
        }
    }
}

/// Outline the ellipse inscribed in `bbox`; the stroke grows inward.
pub fn stroke_ellipse<S: Surface>(s: &mut S, bbox: [f32; 4], width: f32, color: Color) {
    let [x0, y0, x1, y1] = bbox;
    let (w, h) = s.dimensions();
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let rx = ((x1 - x0) / 2.0).max(0.5);
    let ry = ((y1 - y0) / 2.0).max(0.5);
    let (irx, iry) = ((rx - width).max(0.0), (ry - width).max(0.0));
    for y in pixel_span(y0, y1, h) {
        for x in pixel_span(x0, x1, w) {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let outer = (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0;
            let inner = irx > 0.0 && iry > 0.0 && (dx / irx).powi(2) + (dy / iry).powi(2) < 1.0;
            if outer && !inner {
                s.blend(x, y, color, 1.0);
            }
        }
    }
}

/// Coverage of pixel `(px, py)` by a rounded rectangle, in `[0, 1]`.
///
/// Samples the pixel center, so interior pixels are exactly `1.0`.
#[inline]
pub fn rounded_rect_coverage(px: i32, py: i32, x: f32, y: f32, w: f32, h: f32, r: f32) -> f32 {
    let d = rounded_rect_sdf(px as f32 + 0.5, py as f32 + 0.5, x, y, w, h, r);
    (0.5 - d).clamp(0.0, 1.0)
}

/// Fill a rounded rectangle with anti-aliased corners.
pub fn fill_rounded_rect<S: Surface>(
    s: &mut S,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    r: f32,
    color: Color,
) {
    let (sw, sh) = s.dimensions();
    for py in pixel_span(y - 1.0, y + h + 1.0, sh) {
        for px in pixel_span(x - 1.0, x + w + 1.0, sw) {
            let c = rounded_rect_coverage(px, py, x, y, w, h, r);
            if c > 0.0 {
                s.blend(px, py, color, c);
            }
        }
    }
}

/// Outline a rounded rectangle; the stroke grows inward.
#[allow(clippy::too_many_arguments)]
pub fn stroke_rounded_rect<S: Surface>(
    s: &mut S,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    r: f32,
    width: f32,
    color: Color,
) {
    let (sw, sh) = s.dimensions();
    for py in pixel_span(y - 1.0, y + h + 1.0, sh) {
        for px in pixel_span(x - 1.0, x + w + 1.0, sw) {
            let d = rounded_rect_sdf(px as f32 + 0.5, py as f32 + 0.5, x, y, w, h, r);
            let c = (0.5 - d).clamp(0.0, 1.0) - (0.5 - d - width).clamp(0.0, 1.0);
            if c > 0.0 {
                s.blend(px, py, color, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    fn white(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255]))
    }

    fn is_red(img: &RgbImage, x: u32, y: u32) -> bool {
        img.get_pixel(x, y) == &Rgb([255, 0, 0])
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut img = white(10, 10);
        fill_rect(&mut img, 2.0, 2.0, 4.0, 4.0, RED);
        assert!(is_red(&img, 2, 2));
        assert!(is_red(&img, 4, 4));
        assert!(!is_red(&img, 5, 5));
        assert!(!is_red(&img, 1, 2));
    }

    #[test]
    fn test_stroke_rect_leaves_center() {
        let mut img = white(20, 20);
        stroke_rect(&mut img, 2.0, 2.0, 17.0, 17.0, 2.0, RED);
        assert!(is_red(&img, 2, 10));
        assert!(is_red(&img, 3, 10));
        assert!(!is_red(&img, 4, 10));
        assert!(!is_red(&img, 10, 10));
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut img = white(20, 20);
        fill_polygon(&mut img, &[(0.0, 0.0), (19.0, 0.0), (0.0, 19.0)], RED);
        assert!(is_red(&img, 2, 2));
        assert!(!is_red(&img, 17, 17));
    }

    #[test]
    fn test_polyline_round_joint() {
        let mut img = white(30, 30);
        stroke_polyline(&mut img, &[(5.0, 5.0), (20.0, 5.0), (20.0, 20.0)], 3.0, RED);
        assert!(is_red(&img, 12, 5));
        assert!(is_red(&img, 20, 12));
        assert!(is_red(&img, 20, 5));
        assert!(!is_red(&img, 12, 12));
    }

    #[test]
    fn test_arc_quarter() {
        let mut img = white(41, 41);
        // Bottom-right quarter of a circle
        arc(&mut img, [0.0, 0.0, 40.0, 40.0], 0.0, 90.0, 2.0, RED);
        assert!(is_red(&img, 39, 20));
        assert!(is_red(&img, 20, 39));
        assert!(!is_red(&img, 1, 20));
    }

    #[test]
    fn test_stroke_ellipse_hollow() {
        let mut img = white(41, 41);
        stroke_ellipse(&mut img, [0.0, 0.0, 40.0, 40.0], 3.0, RED);
        assert!(is_red(&img, 20, 1));
        assert!(!is_red(&img, 20, 20));
    }

    #[test]
    fn test_fill_ellipse() {
        let mut img = white(21, 21);
        fill_ellipse(&mut img, [0.0, 0.0, 20.0, 20.0], RED);
        assert!(is_red(&img, 10, 10));
        assert!(!is_red(&img, 0, 0));
    }

    #[test]
    fn test_rounded_rect_corners_are_cut() {
        let mut img = white(40, 40);
        fill_rounded_rect(&mut img, 0.0, 0.0, 40.0, 40.0, 12.0, RED);
        assert!(is_red(&img, 20, 20));
        assert!(is_red(&img, 20, 0));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_rgba_blend_over_transparent() {
        let mut img = RgbaImage::new(2, 2);
        img.blend(0, 0, RED, 1.0);
        img.blend(1, 1, RED, 0.5);
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(1, 1)[3], 128);
        assert_eq!(img.get_pixel(1, 1)[0], 255);
        // Out of bounds is a no-op
        img.blend(5, 5, RED, 1.0);
    }
}

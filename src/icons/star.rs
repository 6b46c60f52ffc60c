//! CRI star: 12 points alternating between two radii.

use image::RgbaImage;

use super::supersample;
use crate::config::Palette;
use crate::raster::geometry::Point;

const OUTER_RADIUS: f32 = 56.0;
const INNER_RADIUS: f32 = 38.0;
const POINTS: usize = 12;

/// Star vertices around `(cx, cy)`, starting straight up.
pub fn star_points(cx: f32, cy: f32, outer: f32, inner: f32, points: usize) -> Vec<Point> {
    let step = 180.0 / points as f32;
    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = (i as f32 * step - 90.0).to_radians();
            (cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

pub fn cri_star(size: u32, palette: &Palette) -> RgbaImage {
    supersample(size, 4, |s| {
        let mut outline = star_points(60.0, 60.0, OUTER_RADIUS, INNER_RADIUS, POINTS);
        s.fill_polygon(&outline, palette.star_fill);
        if let Some(first) = outline.first().copied() {
            outline.push(first);
        }
        s.polyline(&outline, 2.0, palette.star_outline);
    })
}

//! Finned aluminum profile cross-section.
//!
//! The whole housing is one closed polyline: three cooling ribs down the
//! left wall, a base fin, the flat bottom, the mirrored right side, then the
//! U-shaped channel the strip sits in. Round joints on the polyline give the
//! contour its soft corners. Drawn at 8× because the ribs are only a few
//! units apart.

use image::RgbaImage;

use super::{Sketch, supersample};
use crate::color::Color;
use crate::config::Palette;
use crate::raster::geometry::{Point, rotate_deg};

/// Profile dimensions in badge units.
#[derive(Debug, Clone, Copy)]
struct Housing {
    cx: f32,
    /// Bottom of the channel
    base_y: f32,
    inner_width: f32,
    wall_height: f32,
    wall_thick: f32,
    fin_len: f32,
    fin_h: f32,
    rib_step: f32,
    line_w: f32,
}

impl Housing {
    const STANDARD: Housing = Housing {
        cx: 60.0,
        base_y: 76.0,
        inner_width: 70.0,
        wall_height: 31.0,
        wall_thick: 4.0,
        fin_len: 8.0,
        fin_h: 4.0,
        rib_step: 9.0,
        line_w: 1.0,
    };

    fn top_y(&self) -> f32 {
        self.base_y - self.wall_height
    }

    fn wall_offset(&self) -> f32 {
        self.inner_width / 2.0 + self.line_w / 2.0 + self.wall_thick
    }

    /// The closed outer-and-inner contour.
    fn contour(&self) -> Vec<Point> {
        let top = self.top_y();
        let base = self.base_y;
        let wall_l = self.cx - self.wall_offset();
        let wall_r = self.cx + self.wall_offset();
        let fin_l = wall_l - self.fin_len;
        let fin_r = wall_r + self.fin_len;
        let inner_l = self.cx - self.inner_width / 2.0;
        let inner_r = self.cx + self.inner_width / 2.0;

        let mut pts = Vec::with_capacity(40);
        for i in 0..3 {
            let ry = top + i as f32 * self.rib_step;
            pts.extend([
                (fin_l, ry),
                (fin_l, ry + self.fin_h),
                (wall_l, ry + self.fin_h),
                (wall_l, ry + self.rib_step),
            ]);
        }
        pts.extend([
            (fin_l, base - self.fin_h),
            (fin_l, base + self.fin_h),
            (wall_l, base + self.wall_thick),
            (wall_r, base + self.wall_thick),
            (fin_r, base + self.fin_h),
            (fin_r, base - self.fin_h),
            (wall_r, base - self.wall_thick),
        ]);
        for i in (0..3).rev() {
            let ry = top + i as f32 * self.rib_step;
            pts.extend([
                (wall_r, ry + self.rib_step),
                (wall_r, ry + self.fin_h),
                (fin_r, ry + self.fin_h),
                (fin_r, ry),
            ]);
        }
        pts.extend([
            (wall_r, top),
            (inner_r, top),
            (inner_r, base - self.line_w),
            (inner_l, base - self.line_w),
            (inner_l, top),
            (wall_l, top),
            (fin_l, top),
        ]);
        pts
    }
}

/// An S-shaped heat arrow starting at `(ax, ay)`, its head turned by
/// `angle` degrees.
fn wavy_arrow(s: &mut Sketch, ax: f32, ay: f32, angle: f32) {
    s.arc([ax, ay - 6.5, ax + 10.0, ay + 11.0], 330.0, 66.0, 1.0, Color::BLACK);
    s.arc([ax + 0.5, ay + 10.0, ax + 12.25, ay + 30.0], 120.0, 273.0, 1.0, Color::BLACK);

    let tip = (ax - 1.0, ay + 25.25);
    let head: Vec<Point> = [(0.0, 0.0), (-3.25, -5.0), (3.25, -5.0)]
        .iter()
        .map(|&(x, y)| {
            let (rx, ry) = rotate_deg(x, y, angle);
            (rx + tip.0, ry + tip.1)
        })
        .collect();
    s.fill_polygon(&head, Color::BLACK);
}

pub fn al_profile(size: u32, palette: &Palette) -> RgbaImage {
    supersample(size, 8, |s| {
        let h = Housing::STANDARD;
        s.polyline(&h.contour(), h.line_w, Color::BLACK);

        let (cx, base) = (h.cx, h.base_y);
        s.boxed(
            [cx - 32.0, base - 9.0, cx + 32.0, base - 3.0],
            Some(palette.board),
            1.0,
            Color::BLACK,
        );
        s.boxed([cx - 8.0, base - 18.0, cx + 8.0, base - 8.0], None, 1.0, Color::BLACK);

        for dx in [-20.0, -5.0, 10.0] {
            wavy_arrow(s, cx + dx, base + 8.0, 100.0);
        }
    })
}

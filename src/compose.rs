//! # Composition
//!
//! Everything that touches the main RGB canvas goes through [`CellPainter`]:
//! badge backgrounds and outlines, tiles pasted through the rounded badge
//! mask, alpha-composited pictograms, and measured text.
//!
//! Coordinates passed to painter methods are relative to the badge's top-left
//! corner, so cell renderers read like fixed badge layouts.

use image::{RgbImage, RgbaImage};

use crate::color::Color;
use crate::fonts::{FontRole, Fonts, TextSize};
use crate::raster::{self, Surface};

/// Paste `tile` at `(x, y)`, weighting each pixel by its alpha.
pub fn paste_alpha(canvas: &mut RgbImage, tile: &RgbaImage, x: i32, y: i32) {
    for (tx, ty, px) in tile.enumerate_pixels() {
        let a = px[3];
        if a == 0 {
            continue;
        }
        let color = Color::rgb(px[0], px[1], px[2]);
        canvas.blend(x + tx as i32, y + ty as i32, color, a as f32 / 255.0);
    }
}

/// Paste `tile` at `(x, y)` clipped to a rounded rectangle covering the tile.
pub fn paste_masked(canvas: &mut RgbImage, tile: &RgbaImage, x: i32, y: i32, radius: f32) {
    let (w, h) = (tile.width() as f32, tile.height() as f32);
    for (tx, ty, px) in tile.enumerate_pixels() {
        let mask = raster::rounded_rect_coverage(tx as i32, ty as i32, 0.0, 0.0, w, h, radius);
        let coverage = mask * px[3] as f32 / 255.0;
        if coverage <= 0.0 {
            continue;
        }
        let color = Color::rgb(px[0], px[1], px[2]);
        canvas.blend(x + tx as i32, y + ty as i32, color, coverage);
    }
}

/// Drawing context for one badge on the main canvas.
pub struct CellPainter<'a> {
    canvas: &'a mut RgbImage,
    fonts: &'a Fonts,
    x: f32,
    y: f32,
    size: f32,
    radius: f32,
}

impl<'a> CellPainter<'a> {
    pub fn new(
        canvas: &'a mut RgbImage,
        fonts: &'a Fonts,
        origin: (u32, u32),
        size: u32,
        radius: u32,
    ) -> Self {
        Self {
            canvas,
            fonts,
            x: origin.0 as f32,
            y: origin.1 as f32,
            size: size as f32,
            radius: radius as f32,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Absolute canvas origin of the badge.
    pub fn origin(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// Fill the badge shape.
    pub fn background(&mut self, color: Color) {
        raster::fill_rounded_rect(
            self.canvas,
            self.x,
            self.y,
            self.size,
            self.size,
            self.radius,
            color,
        );
    }

    /// 1-px rounded outline around the badge.
    pub fn outline(&mut self, color: Color) {
        raster::stroke_rounded_rect(
            self.canvas,
            self.x,
            self.y,
            self.size,
            self.size,
            self.radius,
            1.0,
            color,
        );
    }

    /// Paste a badge-sized tile through the rounded mask.
    pub fn paste_masked(&mut self, tile: &RgbaImage) {
        let (x, y) = self.origin();
        paste_masked(self.canvas, tile, x, y, self.radius);
    }

    /// Alpha-composite a tile at an offset inside the badge.
    pub fn paste_alpha(&mut self, tile: &RgbaImage, dx: i32, dy: i32) {
        let (x, y) = self.origin();
        paste_alpha(self.canvas, tile, x + dx, y + dy);
    }

    pub fn measure(&self, role: FontRole, px: f32, text: &str) -> TextSize {
        self.fonts.measure(role, px, text)
    }

    /// Draw text with its top-left corner at `(dx, dy)` inside the badge.
    pub fn text(&mut self, role: FontRole, px: f32, dx: f32, dy: f32, text: &str, color: Color) {
        self.fonts
            .draw(self.canvas, role, px, self.x + dx, self.y + dy, text, color);
    }

    /// Draw text horizontally centered in the badge at row `dy`.
    pub fn text_centered(&mut self, role: FontRole, px: f32, dy: f32, text: &str, color: Color) {
        let width = self.measure(role, px, text).width;
        self.text(role, px, (self.size - width) / 2.0, dy, text, color);
    }

    /// Straight line between two badge-relative points.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        raster::line(
            self.canvas,
            (self.x + from.0, self.y + from.1),
            (self.x + to.0, self.y + to.1),
            width,
            color,
        );
    }

    /// Horizontal ruler with end ticks, optionally with arrowheads.
    pub fn ruler(&mut self, x0: f32, x1: f32, y: f32, tick: f32, arrow: Option<f32>) {
        let black = Color::BLACK;
        self.line((x0, y), (x1, y), 1.0, black);
        self.line((x0, y - tick), (x0, y + tick), 1.0, black);
        self.line((x1, y - tick), (x1, y + tick), 1.0, black);
        if let Some(len) = arrow {
            self.line((x0, y), (x0 + len, y - 3.0), 1.0, black);
            self.line((x0, y), (x0 + len, y + 3.0), 1.0, black);
            self.line((x1, y), (x1 - len, y - 3.0), 1.0, black);
            self.line((x1, y), (x1 - len, y + 3.0), 1.0, black);
        }
    }
}

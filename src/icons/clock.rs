//! Lifetime clock face.

use image::RgbaImage;

use super::supersample;
use crate::color::Color;

pub fn clock(size: u32) -> RgbaImage {
    supersample(size, 4, |s| {
        s.stroke_ellipse([5.0, 5.0, 115.0, 115.0], 2.0, Color::BLACK);
        let hub = (65.0, 60.0);
        s.line(hub, (105.0, 60.0), 2.0, Color::BLACK);
        s.line(hub, (65.0, 105.0), 2.0, Color::BLACK);
    })
}

//! Digital SPI strip glyph: a strip outline with connector ticks at both
//! ends and three colored LED packages.

use image::RgbaImage;

use super::supersample;
use crate::color::Color;
use crate::config::Palette;

pub fn spi_strip(size: u32, palette: &Palette) -> RgbaImage {
    supersample(size, 4, |s| {
        let top = 75.0;
        s.stroke_rect([15.0, top, 105.0, top + 25.0], 1.0, Color::BLACK);

        for tick_y in [82.0, 92.0] {
            for tick_x in [16.0, 103.0] {
                s.line((tick_x, tick_y - 2.0), (tick_x, tick_y + 2.0), 4.0, Color::BLACK);
            }
        }

        for (i, led) in palette.spi_leds.iter().enumerate() {
            let x = 27.0 + i as f32 * 28.0;
            s.boxed([x, top + 7.0, x + 10.0, top + 17.0], Some(*led), 1.0, Color::BLACK);
        }
    })
}

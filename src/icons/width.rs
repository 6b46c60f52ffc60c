//! Strip cross-sections, one per enclosure type.

use image::RgbaImage;

use super::{Sketch, supersample};
use crate::color::Color;
use crate::config::Palette;

/// Enclosure variant shown in the width badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileVariant {
    /// Bare board with an SMD chip
    Ip20,
    /// Bare board with a domed COB line
    Ip20Cob,
    /// Coated board, drawn like IP20
    Ip54,
    /// Half-round sleeve used by the damp-room models
    Ip54Vlhke,
    /// Half-round silicone sleeve
    Ip67,
    /// Digital SPI strip, drawn as a bare board
    Ip67Digital,
    /// Board potted in a rectangular channel
    Ip68,
}

impl ProfileVariant {
    pub const ALL: [ProfileVariant; 7] = [
        ProfileVariant::Ip20,
        ProfileVariant::Ip20Cob,
        ProfileVariant::Ip54,
        ProfileVariant::Ip54Vlhke,
        ProfileVariant::Ip67,
        ProfileVariant::Ip67Digital,
        ProfileVariant::Ip68,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProfileVariant::Ip20 => "ip20",
            ProfileVariant::Ip20Cob => "ip20_cob",
            ProfileVariant::Ip54 => "ip54",
            ProfileVariant::Ip54Vlhke => "ip54_vlhke",
            ProfileVariant::Ip67 => "ip67",
            ProfileVariant::Ip67Digital => "ip67_digital",
            ProfileVariant::Ip68 => "ip68",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.key() == key)
    }
}

impl std::fmt::Display for ProfileVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

const CX: f32 = 60.0;
/// Board line
const BASE: f32 = 45.0;
const HALF_W: f32 = 30.0;
const STROKE: f32 = 2.0;

fn board(s: &mut Sketch, half: f32, fill: Option<Color>) {
    s.boxed([CX - half, BASE - 2.0, CX + half, BASE + 3.0], fill, STROKE, Color::BLACK);
}

fn chip(s: &mut Sketch, height: f32) {
    s.boxed([CX - 10.0, BASE - height, CX + 10.0, BASE], None, STROKE, Color::BLACK);
}

/// Draw the cross-section for `variant` in the top part of the badge,
/// leaving room for the ruler and value below.
pub fn width_profile(size: u32, variant: ProfileVariant, palette: &Palette) -> RgbaImage {
    supersample(size, 4, |s| {
        let black = Color::BLACK;
        match variant {
            ProfileVariant::Ip20 | ProfileVariant::Ip54 | ProfileVariant::Ip67Digital => {
                board(s, 34.0, Some(palette.board));
                chip(s, 8.0);
            }
            ProfileVariant::Ip20Cob => {
                board(s, 34.0, None);
                s.chord([CX - 13.0, BASE - 8.0, CX + 13.0, BASE + 8.0], 180.0, 360.0, STROKE, black);
            }
            ProfileVariant::Ip67 | ProfileVariant::Ip54Vlhke => {
                s.chord([CX - 34.0, BASE - 20.0, CX + 34.0, BASE + 28.0], 180.0, 360.0, STROKE, black);
                s.chord([CX - 30.0, BASE - 16.0, CX + 30.0, BASE + 20.0], 180.0, 360.0, STROKE, black);
                board(s, HALF_W, Some(palette.board));
                chip(s, 10.0);
            }
            ProfileVariant::Ip68 => {
                s.stroke_rect([CX - 34.0, BASE - 18.0, CX + 34.0, BASE + 6.0], STROKE, black);
                s.stroke_rect([CX - HALF_W, BASE - 14.0, CX + HALF_W, BASE + 3.0], STROKE, black);
                board(s, HALF_W, Some(palette.board));
                chip(s, 10.0);
            }
        }
    })
}

//! Strip circuit diagram for the maximum-length badges.
//!
//! A strip segment with six solder pads, wired through elbowed leads to a
//! pair of terminal dots on either side of the voltage label. Single-feed
//! strips are wired on the right only; double-feed strips on both ends.

use image::RgbaImage;

use super::{BADGE_UNITS, Sketch, supersample};
use crate::color::Color;

/// Which ends of the strip are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitMode {
    Single,
    Double,
}

/// Where the voltage label sits, in badge units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub left: f32,
    pub right: f32,
    pub center_y: f32,
}

const STRIP_TOP: f32 = 50.0;
const STRIP_BOTTOM: f32 = 65.0;
const STRIP_INSET: f32 = 20.0;
const DOT_R: f32 = 3.0;
/// Horizontal gap between the label and each terminal dot
const DOT_GAP: f32 = 12.0;
/// Vertical offset of the two terminals from the label's center line
const DOT_SPREAD: f32 = 8.0;

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn wire(s: &mut Sketch, side: Side, label: LabelBox) {
    let black = Color::BLACK;
    let (start, outer, inner, dot_x) = match side {
        Side::Right => {
            let x = BADGE_UNITS - STRIP_INSET;
            (x, x + 15.0, x + 8.0, label.right + DOT_GAP)
        }
        Side::Left => {
            let x = STRIP_INSET;
            (x, x - 15.0, x - 8.0, label.left - DOT_GAP)
        }
    };
    let low = label.center_y + DOT_SPREAD;
    let high = label.center_y - DOT_SPREAD;

    s.polyline(
        &[(start, STRIP_TOP + 4.0), (outer, STRIP_TOP + 4.0), (outer, low), (dot_x, low)],
        1.0,
        black,
    );
    s.polyline(
        &[(start, STRIP_BOTTOM - 4.0), (inner, STRIP_BOTTOM - 4.0), (inner, high), (dot_x, high)],
        1.0,
        black,
    );
    for y in [low, high] {
        s.fill_ellipse([dot_x - DOT_R, y - DOT_R, dot_x + DOT_R, y + DOT_R], black);
    }
}

pub fn circuit(size: u32, mode: CircuitMode, label: LabelBox) -> RgbaImage {
    supersample(size, 4, |s| {
        let right = BADGE_UNITS - STRIP_INSET;
        s.stroke_rect([STRIP_INSET, STRIP_TOP, right, STRIP_BOTTOM], 2.0, Color::BLACK);
        for i in 0..6 {
            let x = STRIP_INSET + 5.0 + i as f32 * 13.0;
            s.fill_rect([x, STRIP_TOP + 4.0, x + 4.0, STRIP_TOP + 8.0], Color::BLACK);
        }

        wire(s, Side::Right, label);
        if mode == CircuitMode::Double {
            wire(s, Side::Left, label);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: LabelBox = LabelBox {
        left: 40.0,
        right: 80.0,
        center_y: 94.0,
    };

    #[test]
    fn test_single_is_wired_on_the_right_only() {
        let tile = circuit(120, CircuitMode::Single, LABEL);
        // Outer right elbow runs down at x = 115
        assert!(tile.get_pixel(115, 80)[3] > 60);
        assert_eq!(tile.get_pixel(5, 80)[3], 0);
    }

    #[test]
    fn test_double_is_wired_on_both_sides() {
        let tile = circuit(120, CircuitMode::Double, LABEL);
        assert!(tile.get_pixel(115, 80)[3] > 60);
        assert!(tile.get_pixel(5, 80)[3] > 60);
    }

    #[test]
    fn test_terminal_dots_flank_the_label() {
        let tile = circuit(120, CircuitMode::Double, LABEL);
        // Lower terminals sit DOT_GAP outside the label edges
        assert!(tile.get_pixel(92, 102)[3] > 150);
        assert!(tile.get_pixel(28, 102)[3] > 150);
        // The label area itself stays clear
        assert_eq!(tile.get_pixel(60, 94)[3], 0);
    }
}

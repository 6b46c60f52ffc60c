//! Beam-angle wedge: two radial lines and the arc that bounds them.

use image::RgbaImage;

use super::supersample;
use crate::color::Color;

/// Half the opening angle, measured from vertical.
const SPREAD_DEG: f32 = 40.0;
const RAY_LENGTH: f32 = 70.0;
const ARC_RADIUS: f32 = 45.0;

pub fn angle_wedge(size: u32) -> RgbaImage {
    supersample(size, 4, |s| {
        let (cx, cy) = (60.0, 100.0);
        let (sin, cos) = SPREAD_DEG.to_radians().sin_cos();
        let left = (cx - RAY_LENGTH * sin, cy - RAY_LENGTH * cos);
        let right = (cx + RAY_LENGTH * sin, cy - RAY_LENGTH * cos);
        s.line((cx, cy), left, 2.0, Color::BLACK);
        s.line((cx, cy), right, 2.0, Color::BLACK);

        let bbox = [
            cx - ARC_RADIUS,
            cy - ARC_RADIUS,
            cx + ARC_RADIUS,
            cy + ARC_RADIUS,
        ];
        s.arc(bbox, 270.0 - 35.0, 270.0 + 35.0, 2.0, Color::BLACK);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_rays_are_drawn() {
        let tile = angle_wedge(120);
        // 30 units along the left ray
        assert!(tile.get_pixel(40, 76)[3] > 100);
        // Between the rays, below the arc, nothing is drawn
        assert_eq!(tile.get_pixel(60, 75)[3], 0);
    }
}

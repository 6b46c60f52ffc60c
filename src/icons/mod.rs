//! # Pictograms
//!
//! Hand-built technical pictograms drawn from primitive shapes. Every
//! pictogram is drawn on a transparent surface `upscale` times larger than
//! the badge, then downsampled with a Lanczos filter. The hard-edged
//! primitives in [`crate::raster`] come out anti-aliased this way; fine rib
//! contours use 8×, everything else 4×.
//!
//! Pictogram code is written in badge units (a 120-unit badge has its center
//! at `(60, 60)`); [`Sketch`] applies the upscale factor.
//!
//! ## Catalog
//!
//! | Key | Pictogram |
//! |-----|-----------|
//! | `cri-star` | 12-point star for the CRI badge |
//! | `angle-wedge` | Beam-angle wedge with bounding arc |
//! | `al-profile` | Finned aluminum profile with embedded strip and heat arrows |
//! | `clock` | Lifetime clock face |
//! | `spi-strip` | Digital strip connector glyph |
//! | `width/<variant>` | Strip cross-section per enclosure type |
//!
//! ```
//! use stripsheet::config::Palette;
//! use stripsheet::icons;
//!
//! let star = icons::by_key("cri-star").unwrap();
//! let tile = star.render(120, &Palette::default());
//! assert_eq!(tile.dimensions(), (120, 120));
//! ```

pub mod angle;
pub mod circuit;
pub mod clock;
pub mod profile;
pub mod spi;
pub mod star;
pub mod width;

pub use circuit::{CircuitMode, LabelBox};
pub use width::ProfileVariant;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::color::Color;
use crate::config::Palette;
use crate::raster::{self, geometry::Point};

/// Reference badge edge length that pictogram coordinates are written for.
pub const BADGE_UNITS: f32 = 120.0;

/// An oversized transparent drawing surface addressed in badge units.
pub struct Sketch {
    img: RgbaImage,
    /// Surface pixels per badge unit
    k: f32,
}

impl Sketch {
    fn new(size: u32, upscale: u32) -> Self {
        let px = size * upscale;
        Self {
            img: RgbaImage::new(px, px),
            k: px as f32 / BADGE_UNITS,
        }
    }

    fn pt(&self, p: Point) -> Point {
        (p.0 * self.k, p.1 * self.k)
    }

    fn bbox(&self, b: [f32; 4]) -> [f32; 4] {
        [b[0] * self.k, b[1] * self.k, b[2] * self.k, b[3] * self.k]
    }

    /// Filled rectangle with inclusive corners.
    pub fn fill_rect(&mut self, b: [f32; 4], color: Color) {
        let [x0, y0, x1, y1] = self.bbox(b);
        raster::fill_rect(&mut self.img, x0, y0, x1, y1, color);
    }

    /// Rectangle outline; `width` in badge units, growing inward.
    pub fn stroke_rect(&mut self, b: [f32; 4], width: f32, color: Color) {
        let [x0, y0, x1, y1] = self.bbox(b);
        raster::stroke_rect(&mut self.img, x0, y0, x1, y1, width * self.k, color);
    }

    /// Filled rectangle with an outline on top.
    pub fn boxed(&mut self, b: [f32; 4], fill: Option<Color>, width: f32, outline: Color) {
        if let Some(fill) = fill {
            self.fill_rect(b, fill);
        }
        self.stroke_rect(b, width, outline);
    }

    pub fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let scaled: Vec<Point> = points.iter().map(|p| self.pt(*p)).collect();
        raster::fill_polygon(&mut self.img, &scaled, color);
    }

    /// Connected segments with round joints.
    pub fn polyline(&mut self, points: &[Point], width: f32, color: Color) {
        let scaled: Vec<Point> = points.iter().map(|p| self.pt(*p)).collect();
        raster::stroke_polyline(&mut self.img, &scaled, width * self.k, color);
    }

    pub fn line(&mut self, a: Point, b: Point, width: f32, color: Color) {
        self.polyline(&[a, b], width, color);
    }

    pub fn arc(&mut self, b: [f32; 4], start: f32, end: f32, width: f32, color: Color) {
        let bbox = self.bbox(b);
        raster::arc(&mut self.img, bbox, start, end, width * self.k, color);
    }

    pub fn chord(&mut self, b: [f32; 4], start: f32, end: f32, width: f32, color: Color) {
        let bbox = self.bbox(b);
        raster::chord(&mut self.img, bbox, start, end, width * self.k, color);
    }

    pub fn fill_ellipse(&mut self, b: [f32; 4], color: Color) {
        let bbox = self.bbox(b);
        raster::fill_ellipse(&mut self.img, bbox, color);
    }

    pub fn stroke_ellipse(&mut self, b: [f32; 4], width: f32, color: Color) {
        let bbox = self.bbox(b);
        raster::stroke_ellipse(&mut self.img, bbox, width * self.k, color);
    }

    fn finish(self, size: u32) -> RgbaImage {
        imageops::resize(&self.img, size, size, FilterType::Lanczos3)
    }
}

/// Draw at `size × upscale` and downsample to `size × size`.
pub fn supersample(size: u32, upscale: u32, draw: impl FnOnce(&mut Sketch)) -> RgbaImage {
    let mut sketch = Sketch::new(size, upscale.max(1));
    draw(&mut sketch);
    sketch.finish(size)
}

/// A self-contained pictogram from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pictogram {
    CriStar,
    AngleWedge,
    AlProfile,
    Clock,
    SpiStrip,
    Width(ProfileVariant),
}

impl Pictogram {
    pub fn key(&self) -> String {
        match self {
            Pictogram::CriStar => "cri-star".to_string(),
            Pictogram::AngleWedge => "angle-wedge".to_string(),
            Pictogram::AlProfile => "al-profile".to_string(),
            Pictogram::Clock => "clock".to_string(),
            Pictogram::SpiStrip => "spi-strip".to_string(),
            Pictogram::Width(variant) => format!("width/{}", variant.key()),
        }
    }

    /// Render at `size × size` with a transparent background.
    pub fn render(&self, size: u32, palette: &Palette) -> RgbaImage {
        match self {
            Pictogram::CriStar => star::cri_star(size, palette),
            Pictogram::AngleWedge => angle::angle_wedge(size),
            Pictogram::AlProfile => profile::al_profile(size, palette),
            Pictogram::Clock => clock::clock(size),
            Pictogram::SpiStrip => spi::spi_strip(size, palette),
            Pictogram::Width(variant) => width::width_profile(size, *variant, palette),
        }
    }
}

/// Every catalog entry.
pub fn all() -> Vec<Pictogram> {
    let mut list = vec![
        Pictogram::CriStar,
        Pictogram::AngleWedge,
        Pictogram::AlProfile,
        Pictogram::Clock,
        Pictogram::SpiStrip,
    ];
    list.extend(ProfileVariant::ALL.iter().map(|v| Pictogram::Width(*v)));
    list
}

/// Look up a pictogram by key.
pub fn by_key(key: &str) -> Option<Pictogram> {
    all().into_iter().find(|p| p.key() == key)
}

/// List all catalog keys.
pub fn list_keys() -> Vec<String> {
    all().iter().map(|p| p.key()).collect()
}

//! # Sheet Renderer
//!
//! Top-level orchestration:
//!
//! 1. size the canvas with [`Layout::for_record`]
//! 2. draw every grid slot through [`cells::render_field`]
//! 3. append the active optional badges in the extra row
//! 4. optionally hand the result to the [`footer`] compositor
//!
//! A renderer is built once (fonts loaded, config fixed) and can then render
//! any number of records; each call creates a fresh canvas and shares no
//! mutable state, so one renderer may be used from several threads.
//!
//! ```
//! use stripsheet::record::AttributeRecord;
//! use stripsheet::sheet::SheetRenderer;
//!
//! let renderer = SheetRenderer::with_defaults();
//! let record = AttributeRecord::new().with("color", "NW").with("ip", "20");
//! let image = renderer.render(&record);
//! assert_eq!(image.dimensions(), (1000, 320));
//! ```

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use crate::assets::AssetDir;
use crate::cells::{self, CellContext};
use crate::compose::CellPainter;
use crate::config::Config;
use crate::error::SheetError;
use crate::fonts::Fonts;
use crate::footer::{self, FooterOutcome};
use crate::layout::{GridSpec, Layout};
use crate::record::AttributeRecord;
use crate::rules;

/// Renders attribute records into data-sheet images.
#[derive(Debug, Clone)]
pub struct SheetRenderer {
    config: Config,
    grid: GridSpec,
    fonts: Arc<Fonts>,
    assets: AssetDir,
}

impl SheetRenderer {
    pub fn new(config: Config, fonts: Arc<Fonts>, assets: AssetDir) -> Self {
        let grid = GridSpec::from_config(&config.sheet);
        Self {
            config,
            grid,
            fonts,
            assets,
        }
    }

    /// Default config, built-in bitmap font, no asset folder.
    pub fn with_defaults() -> Self {
        Self::new(Config::default(), Fonts::shared_builtin(), AssetDir::empty())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self, record: &AttributeRecord) -> Layout {
        Layout::for_record(&self.config.sheet, &self.grid, record)
    }

    /// Render the badge grid.
    pub fn render(&self, record: &AttributeRecord) -> RgbImage {
        let sheet = &self.config.sheet;
        let palette = &self.config.palette;
        let layout = self.layout(record);
        let mut canvas = RgbImage::from_pixel(layout.width, layout.height, Rgb([255, 255, 255]));

        let ctx = CellContext {
            record,
            palette,
            assets: &self.assets,
        };
        for (row, col, field) in self.grid.slots() {
            let origin = layout.cell_origin(row, col);
            let mut painter =
                CellPainter::new(&mut canvas, &self.fonts, origin, sheet.cell_size, sheet.radius);
            cells::render_field(&mut painter, &ctx, field);
        }

        for (i, badge) in rules::extra_badges(record, sheet).into_iter().enumerate() {
            let origin = layout.extra_origin(i);
            let mut painter =
                CellPainter::new(&mut canvas, &self.fonts, origin, sheet.cell_size, sheet.radius);
            cells::extras::draw(&mut painter, badge, record, palette);
        }

        canvas
    }

    /// Render the grid and compose it onto the footer canvas.
    pub fn render_with_footer(&self, record: &AttributeRecord) -> (RgbImage, FooterOutcome) {
        let grid = self.render(record);
        footer::compose(
            &grid,
            record,
            &self.config.sheet,
            &self.config.palette,
            &self.assets,
        )
    }
}

/// Write `image` as a baseline JPEG.
pub fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<(), SheetError> {
    let file = File::create(path)?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality.clamp(1, 100));
    encoder
        .encode_image(image)
        .map_err(|e| SheetError::Image(format!("{}: {}", path.display(), e)))
}

/// Write `image` as PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), SheetError> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SheetError::Image(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_jpeg_round_trip_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out_30.jpg");
        let img = SheetRenderer::with_defaults().render(&AttributeRecord::new().with("leds", "60"));
        save_jpeg(&img, &path, 95).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1000, 320));
    }

    #[test]
    fn test_save_jpeg_to_missing_dir_fails() {
        let img = RgbImage::new(2, 2);
        let err = save_jpeg(&img, Path::new("/nonexistent/dir/x.jpg"), 95).unwrap_err();
        assert!(matches!(err, SheetError::Io(_)));
    }

    #[test]
    fn test_extra_row_is_drawn_only_when_active() {
        let renderer = SheetRenderer::with_defaults();
        let with_cri = renderer.render(&AttributeRecord::new().with("cri", "90"));
        assert_eq!(with_cri.height(), 470);
        let layout = renderer.layout(&AttributeRecord::new().with("cri", "90"));
        let (x, y) = layout.extra_origin(0);
        // Star center is yellow
        let p = with_cri.get_pixel(x + 60, y + 60);
        assert!(p[0] > 240 && p[2] < 40, "{:?}", p);
    }
}

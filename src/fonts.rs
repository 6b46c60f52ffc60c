//! # Fonts
//!
//! Two logical roles, [`FontRole::Bold`] and [`FontRole::Regular`], drawn at
//! whatever pixel size a badge asks for.
//!
//! ## Fallback policy
//!
//! [`Fonts::load`] tries the configured TrueType files through
//! [`load_font`]. If either file is missing or unreadable, *both* roles switch
//! to the built-in Spleen 12×24 bitmap face (scaled to the requested size) so
//! the sheet never mixes two unrelated typefaces. The fallback is logged at
//! debug level only.
//!
//! Font handles are loaded once when a renderer is built and are immutable
//! afterwards; the bitmap glyph table is decoded lazily on first use.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use log::debug;
use spleen_font::{FONT_12X24, PSF2Font};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::color::Color;
use crate::config::FontPaths;
use crate::error::FontLoadError;
use crate::raster::Surface;

/// Logical typeface used by a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Bold,
    Regular,
}

/// A loaded typeface.
#[derive(Clone)]
pub enum Face {
    /// TrueType/OpenType outlines rendered with coverage anti-aliasing
    Outline(FontArc),
    /// Built-in Spleen bitmap font, nearest-neighbor scaled
    Bitmap,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Outline(_) => f.write_str("Face::Outline"),
            Face::Bitmap => f.write_str("Face::Bitmap"),
        }
    }
}

/// Measured extent of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Load a TrueType/OpenType font file.
pub fn load_font(path: &Path) -> Result<Face, FontLoadError> {
    let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FontArc::try_from_vec(bytes)
        .map(Face::Outline)
        .map_err(|_| FontLoadError::Invalid {
            path: path.to_path_buf(),
        })
}

/// Font handles for both roles.
#[derive(Debug, Clone)]
pub struct Fonts {
    bold: Face,
    regular: Face,
}

impl Default for Fonts {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Fonts {
    /// Both roles on the built-in bitmap face.
    pub fn builtin() -> Self {
        Self {
            bold: Face::Bitmap,
            regular: Face::Bitmap,
        }
    }

    /// Process-wide shared built-in font set.
    pub fn shared_builtin() -> Arc<Fonts> {
        static SHARED: OnceLock<Arc<Fonts>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Fonts::builtin())).clone()
    }

    /// Load the configured fonts, resolving relative paths against `dir`.
    ///
    /// Never fails; see the module docs for the fallback policy.
    pub fn load(dir: Option<&Path>, paths: &FontPaths) -> Self {
        let resolve = |p: &PathBuf| match dir {
            Some(d) if p.is_relative() => d.join(p),
            _ => p.clone(),
        };

        match (load_font(&resolve(&paths.bold)), load_font(&resolve(&paths.regular))) {
            (Ok(bold), Ok(regular)) => Self { bold, regular },
            (bold, regular) => {
                for err in [bold.err(), regular.err()].into_iter().flatten() {
                    debug!("{}; using built-in bitmap font", err);
                }
                Self::builtin()
            }
        }
    }

    pub fn face(&self, role: FontRole) -> &Face {
        match role {
            FontRole::Bold => &self.bold,
            FontRole::Regular => &self.regular,
        }
    }

    /// True when both roles use the built-in bitmap face.
    pub fn is_builtin(&self) -> bool {
        matches!((&self.bold, &self.regular), (Face::Bitmap, Face::Bitmap))
    }

    /// Measure `text` at `px` pixels per em.
    pub fn measure(&self, role: FontRole, px: f32, text: &str) -> TextSize {
        match self.face(role) {
            Face::Outline(font) => {
                let scaled = font.as_scaled(outline_scale(font, px));
                let mut width = 0.0f32;
                let mut prev = None;
                for ch in text.chars() {
                    let id = font.glyph_id(ch);
                    if let Some(p) = prev {
                        width += scaled.kern(p, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                TextSize {
                    width,
                    height: scaled.ascent() - scaled.descent(),
                }
            }
            Face::Bitmap => {
                let scale = px / BITMAP_CELL_H as f32;
                TextSize {
                    width: text.chars().count() as f32 * BITMAP_CELL_W as f32 * scale,
                    height: px,
                }
            }
        }
    }

    /// Draw `text` with its line box's top-left corner at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw<S: Surface>(
        &self,
        s: &mut S,
        role: FontRole,
        px: f32,
        x: f32,
        y: f32,
        text: &str,
        color: Color,
    ) {
        match self.face(role) {
            Face::Outline(font) => draw_outline(s, font, px, x, y, text, color),
            Face::Bitmap => draw_bitmap(s, px, x, y, text, color),
        }
    }
}

/// ab_glyph scales by line height; convert an em size to that scale.
fn outline_scale(font: &FontArc, px: f32) -> PxScale {
    let upem = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(px * font.height_unscaled() / upem)
}

fn draw_outline<S: Surface>(
    s: &mut S,
    font: &FontArc,
    px: f32,
    x: f32,
    y: f32,
    text: &str,
    color: Color,
) {
    let scale = outline_scale(font, px);
    let scaled = font.as_scaled(scale);
    let baseline = y + scaled.ascent();

    let mut caret = x;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, baseline));
        caret += scaled.h_advance(id);
        prev = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let tx = gx as i32 + bounds.min.x as i32;
                let ty = gy as i32 + bounds.min.y as i32;
                s.blend(tx, ty, color, coverage);
            });
        }
    }
}

const BITMAP_CELL_W: usize = 12;
const BITMAP_CELL_H: usize = 24;

/// Decoded Spleen glyphs: one `BITMAP_CELL_W × BITMAP_CELL_H` mask per char.
fn bitmap_glyphs() -> &'static BTreeMap<char, Vec<bool>> {
    static GLYPHS: OnceLock<BTreeMap<char, Vec<bool>>> = OnceLock::new();
    GLYPHS.get_or_init(|| {
        let mut table = BTreeMap::new();
        let Ok(mut spleen) = PSF2Font::new(FONT_12X24) else {
            return table;
        };
        let extra = ['≤', '°', '±'];
        for ch in (' '..='~').chain(extra) {
            let utf8 = ch.to_string();
            if let Some(glyph) = spleen.glyph_for_utf8(utf8.as_bytes()) {
                let mut mask = vec![false; BITMAP_CELL_W * BITMAP_CELL_H];
                for (row_y, row) in glyph.enumerate() {
                    for (col_x, on) in row.enumerate() {
                        let idx = row_y * BITMAP_CELL_W + col_x;
                        if col_x < BITMAP_CELL_W && idx < mask.len() {
                            mask[idx] = on;
                        }
                    }
                }
                table.insert(ch, mask);
            }
        }
        table
    })
}

fn draw_bitmap<S: Surface>(s: &mut S, px: f32, x: f32, y: f32, text: &str, color: Color) {
    let scale = px / BITMAP_CELL_H as f32;
    let advance = BITMAP_CELL_W as f32 * scale;
    let glyphs = bitmap_glyphs();

    for (i, ch) in text.chars().enumerate() {
        let Some(mask) = glyphs.get(&ch) else {
            continue;
        };
        let gx = x + i as f32 * advance;
        for row in 0..BITMAP_CELL_H {
            let ty0 = (y + row as f32 * scale).round() as i32;
            let ty1 = (y + (row + 1) as f32 * scale).round() as i32;
            for col in 0..BITMAP_CELL_W {
                if !mask[row * BITMAP_CELL_W + col] {
                    continue;
                }
                let tx0 = (gx + col as f32 * scale).round() as i32;
                let tx1 = (gx + (col + 1) as f32 * scale).round() as i32;
                for ty in ty0..ty1.max(ty0 + 1) {
                    for tx in tx0..tx1.max(tx0 + 1) {
                        s.blend(tx, ty, color, 1.0);
                    }
                }
            }
        }
    }
}

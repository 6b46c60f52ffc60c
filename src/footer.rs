//! # Footer Compositor
//!
//! Places the finished grid at the top-left of a larger fixed canvas and
//! fills the bottom with a reference strip chosen by a lookup code:
//!
//! ```text
//! {model}{voltage}{suffix}      e.g. 12A24Y
//! {model}{voltage}              fallback, e.g. 12A24
//! ```
//!
//! `model` is the first two-digits-plus-letter token, `voltage` the digits of
//! the voltage field, and the suffix comes from the [`ColorFamily`] of the
//! color value. A color matching both keyword sets is [`ColorFamily::Ambiguous`]
//! and goes straight to the unsuffixed code. When nothing matches, the footer
//! area stays white and a warning is logged.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::{debug, warn};
use regex::Regex;
use std::sync::OnceLock;

use crate::assets::AssetDir;
use crate::compose::paste_alpha;
use crate::config::{Palette, SheetConfig};
use crate::record::{AttributeRecord, digits};

/// Color family of a product, as far as footer lookup cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFamily {
    /// Saturated or product-category color, suffix `Y`
    Saturated,
    /// White-family color, suffix `W`
    White,
    /// Matches neither keyword set
    None,
    /// Matches both keyword sets
    Ambiguous,
}

impl ColorFamily {
    pub fn classify(color: &str, palette: &Palette) -> Self {
        let upper = color.to_uppercase();
        let hit = |keys: &[String]| keys.iter().any(|k| upper.contains(&k.to_uppercase()));
        match (hit(&palette.footer_saturated), hit(&palette.footer_white)) {
            (true, true) => ColorFamily::Ambiguous,
            (true, false) => ColorFamily::Saturated,
            (false, true) => ColorFamily::White,
            (false, false) => ColorFamily::None,
        }
    }

    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            ColorFamily::Saturated => Some("Y"),
            ColorFamily::White => Some("W"),
            ColorFamily::None | ColorFamily::Ambiguous => None,
        }
    }
}

fn model_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{2}[A-Z]\b").expect("valid model token pattern"))
}

/// Ingredients of the footer asset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterCode {
    pub model: String,
    pub voltage: String,
    pub family: ColorFamily,
}

impl FooterCode {
    /// Derive the code from a record. `None` when no model token exists.
    ///
    /// The `model` field is searched first, then every other value.
    pub fn derive(record: &AttributeRecord, palette: &Palette) -> Option<Self> {
        let find = |text: &str| {
            model_token_regex()
                .find(&text.to_uppercase())
                .map(|m| m.as_str().to_string())
        };
        let model = find(record.get("model"))
            .or_else(|| record.iter().find_map(|(_, value)| find(value)))?;

        Some(Self {
            model,
            voltage: digits(record.get("voltage")),
            family: ColorFamily::classify(record.get("color"), palette),
        })
    }

    /// Asset names to try, in order.
    pub fn candidates(&self) -> Vec<String> {
        let base = format!("{}{}", self.model, self.voltage);
        match self.family.suffix() {
            Some(suffix) => vec![format!("{}{}", base, suffix), base],
            None => vec![base],
        }
    }
}

/// What happened to the footer area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterOutcome {
    /// Asset found and placed
    Placed { asset: String },
    /// Every candidate missed; the footer is blank
    Missing { tried: Vec<String> },
    /// No model token in the record; the footer is blank
    NoModel,
}

/// Put `grid` on the footer canvas and append the matching footer strip.
pub fn compose(
    grid: &RgbImage,
    record: &AttributeRecord,
    sheet: &SheetConfig,
    palette: &Palette,
    assets: &AssetDir,
) -> (RgbImage, FooterOutcome) {
    let (width, height) = (sheet.footer_width, sheet.footer_height);
    let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    imageops::replace(&mut canvas, grid, 0, 0);

    let Some(code) = FooterCode::derive(record, palette) else {
        warn!("no model token in record; footer left blank");
        return (canvas, FooterOutcome::NoModel);
    };
    if code.family == ColorFamily::Ambiguous {
        debug!(
            "color '{}' matches both footer families; skipping suffix",
            record.get("color")
        );
    }

    let tried = code.candidates();
    let Some((name, strip)) = tried
        .iter()
        .find_map(|name| assets.probe(name).map(|img| (name.clone(), img)))
    else {
        warn!("no footer asset for {}; footer left blank", tried.join(" / "));
        return (canvas, FooterOutcome::Missing { tried });
    };

    let strip = strip.to_rgba8();
    let scaled_h = ((strip.height() as u64 * width as u64) / strip.width().max(1) as u64).max(1) as u32;
    let scaled = imageops::resize(&strip, width, scaled_h, FilterType::Lanczos3);
    paste_alpha(&mut canvas, &scaled, 0, height as i32 - scaled_h as i32);

    (canvas, FooterOutcome::Placed { asset: name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    fn record(model: &str, voltage: &str, color: &str) -> AttributeRecord {
        AttributeRecord::new()
            .with("model", model)
            .with("voltage", voltage)
            .with("color", color)
    }

    #[test]
    fn test_color_family() {
        let p = Palette::default();
        assert_eq!(ColorFamily::classify("R", &p), ColorFamily::Saturated);
        assert_eq!(ColorFamily::classify("nw", &p), ColorFamily::White);
        assert_eq!(ColorFamily::classify("RGB+CW", &p), ColorFamily::Ambiguous);
        assert_eq!(ColorFamily::classify("", &p), ColorFamily::None);
        assert_eq!(ColorFamily::classify("UWW", &p), ColorFamily::White);
    }

    #[test]
    fn test_candidates_order() {
        let p = Palette::default();
        let code = FooterCode::derive(&record("12A", "24", "R"), &p).unwrap();
        assert_eq!(code.candidates(), vec!["12A24Y".to_string(), "12A24".to_string()]);

        let white = FooterCode::derive(&record("12a", "24 V", "CW"), &p).unwrap();
        assert_eq!(white.candidates(), vec!["12A24W".to_string(), "12A24".to_string()]);

        let ambiguous = FooterCode::derive(&record("12A", "24", "RGB+WW"), &p).unwrap();
        assert_eq!(ambiguous.candidates(), vec!["12A24".to_string()]);
    }

    #[test]
    fn test_model_token_scanned_from_record() {
        let p = Palette::default();
        let r = AttributeRecord::new()
            .with("title", "LED pásek 81B")
            .with("voltage", "12");
        let code = FooterCode::derive(&r, &p).unwrap();
        assert_eq!(code.model, "81B");
        assert!(FooterCode::derive(&AttributeRecord::new(), &p).is_none());
    }

    #[test]
    fn test_missing_footer_stays_blank() {
        let grid = RgbImage::from_pixel(100, 50, Rgb([0, 0, 0]));
        let (canvas, outcome) = compose(
            &grid,
            &record("12A", "24", "R"),
            &SheetConfig::default(),
            &Palette::default(),
            &AssetDir::empty(),
        );
        assert_eq!(
            outcome,
            FooterOutcome::Missing {
                tried: vec!["12A24Y".to_string(), "12A24".to_string()]
            }
        );
        assert_eq!(canvas.dimensions(), (1000, 1000));
        assert_eq!(canvas.get_pixel(10, 10), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(500, 990), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_unit_suffixes_are_not_model_tokens() {
        let p = Palette::default();
        let kelvin = AttributeRecord::new()
            .with("color", "NW")
            .with("kelvin", "3000K")
            .with("voltage", "24");
        assert_eq!(FooterCode::derive(&kelvin, &p), None);

        let units = AttributeRecord::new()
            .with("cut", "50mm")
            .with("voltage", "12")
            .with("life", "50000h");
        assert_eq!(FooterCode::derive(&units, &p), None);

        let with_title = units.with("title", "Strip 12A, 24 V");
        assert_eq!(FooterCode::derive(&with_title, &p).unwrap().model, "12A");
    }

    #[test]
    fn test_fallback_asset_is_bottom_aligned() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(500, 100, Rgba([0, 0, 255, 255]))
            .save(dir.path().join("12a24.png"))
            .unwrap();
        let assets = AssetDir::open(dir.path()).unwrap();
        let grid = RgbImage::from_pixel(100, 50, Rgb([0, 0, 0]));
        let (canvas, outcome) = compose(
            &grid,
            &record("12A", "24", "R"),
            &SheetConfig::default(),
            &Palette::default(),
            &assets,
        );
        assert_eq!(
            outcome,
            FooterOutcome::Placed {
                asset: "12A24".to_string()
            }
        );
        // 500×100 scales to 1000×200 at the bottom
        assert_eq!(canvas.get_pixel(500, 900), &Rgb([0, 0, 255]));
        assert_eq!(canvas.get_pixel(500, 790), &Rgb([255, 255, 255]));
    }
}

//! The `color` badge.
//!
//! A color value is classified once into a [`ColorClass`]; the match order
//! in [`ColorClass::classify`] is the priority order and must not be
//! shuffled:
//!
//! 1. product-category keyword → pre-supplied icon
//! 2. bare white-family code without kelvin → large label
//! 3. contains `SPI` → Digital SPI pictogram
//! 4. contains `UV` → purple UV badge
//! 5. contains `+` or `RGB` → composite split badge
//! 6. anything else → tinted label with optional kelvin lines

use image::{Rgba, RgbaImage};
use log::warn;

use super::{Cell, CellContext, CellStyle, outline_if_neutral, sizes};
use crate::color::Color;
use crate::compose::CellPainter;
use crate::config::Palette;
use crate::fonts::FontRole;
use crate::icons;

/// Color temperature attached to a plain code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kelvin {
    None,
    Single(String),
    /// `"3000-3500"` → `("3000", "3500")`
    Range(String, String),
}

impl Kelvin {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Kelvin::None;
        }
        match text.split_once('-') {
            Some((lo, hi)) => Kelvin::Range(lo.trim().to_string(), hi.trim().to_string()),
            None => Kelvin::Single(text.to_string()),
        }
    }
}

/// Split badges built from several color regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositeMode {
    /// Three vertical thirds R, G, B
    Rgb,
    /// R, G, B thirds on top, one white-family part below
    RgbWhite { white: String },
    /// Two white-family halves
    DualWhite { top: String, bottom: String },
}

/// What the `color` badge shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorClass {
    ProductIcon { asset: String },
    PlainWhite { code: String },
    DigitalSpi,
    Uv,
    Composite(CompositeMode),
    Plain {
        code: String,
        kelvin: Kelvin,
        /// Saturated code without kelvin: one large white label
        large: bool,
    },
}

impl ColorClass {
    pub fn classify(value: &str, kelvin: &str, palette: &Palette) -> Self {
        let code = value.trim().to_uppercase();
        let kelvin = Kelvin::parse(kelvin);

        if let Some(icon) = palette
            .product_icons
            .iter()
            .find(|icon| code.contains(&icon.keyword.to_uppercase()))
        {
            return ColorClass::ProductIcon {
                asset: icon.asset.clone(),
            };
        }
        if kelvin == Kelvin::None && palette.white_codes.contains(&code) {
            return ColorClass::PlainWhite { code };
        }
        if code.contains("SPI") {
            return ColorClass::DigitalSpi;
        }
        if code.contains("UV") {
            return ColorClass::Uv;
        }
        if code.contains('+') || code.contains("RGB") {
            return ColorClass::Composite(composite_mode(&code));
        }

        let large = kelvin == Kelvin::None && palette.saturated_codes.contains(&code);
        ColorClass::Plain {
            code,
            kelvin,
            large,
        }
    }
}

fn composite_mode(code: &str) -> CompositeMode {
    let has_plus = code.contains('+');
    if code.contains("RGB") && !has_plus {
        return CompositeMode::Rgb;
    }
    if code.contains("RGB") {
        let white = code.split('+').nth(1).unwrap_or_default().trim().to_string();
        return CompositeMode::RgbWhite { white };
    }
    let parts: Vec<&str> = code.split('+').map(str::trim).collect();
    match parts.as_slice() {
        [top, bottom] => CompositeMode::DualWhite {
            top: top.to_string(),
            bottom: bottom.to_string(),
        },
        _ => CompositeMode::DualWhite {
            top: "NW".to_string(),
            bottom: "NW".to_string(),
        },
    }
}

pub fn draw(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    let palette = ctx.palette;
    let class = ColorClass::classify(cell.value, ctx.record.get("kelvin"), palette);
    match class {
        ColorClass::ProductIcon { asset } => match ctx.assets.load(&asset) {
            Some(img) => {
                let size = painter.size() as u32;
                let tile = image::imageops::resize(
                    &img.to_rgba8(),
                    size,
                    size,
                    image::imageops::FilterType::Lanczos3,
                );
                painter.background(palette.neutral);
                painter.paste_masked(&tile);
                painter.outline(palette.outline);
            }
            None => {
                painter.background(palette.neutral);
                painter.text_centered(FontRole::Bold, sizes::VALUE, 45.0, cell.value, Color::BLACK);
                painter.outline(palette.outline);
            }
        },
        ColorClass::PlainWhite { code } => {
            painter.background(palette.neutral);
            large_label(painter, &code, Color::BLACK);
            painter.outline(palette.outline);
        }
        ColorClass::DigitalSpi => digital_spi(painter, palette),
        ColorClass::Uv => {
            painter.background(palette.uv_background);
            painter.text_centered(FontRole::Bold, sizes::RGB_BIG, 35.0, "UV", Color::WHITE);
        }
        ColorClass::Composite(mode) => {
            let tile = composite_tile(painter.size() as u32, &mode, palette);
            painter.paste_masked(&tile);
            composite_labels(painter, &mode);
            painter.outline(palette.outline);
        }
        ColorClass::Plain {
            code,
            kelvin,
            large,
        } => {
            painter.background(style.background);
            if large {
                large_label(painter, &code, Color::WHITE);
            } else {
                plain_label(painter, &code, &kelvin);
            }
            outline_if_neutral(painter, style, palette);
        }
    }
}

/// One big label centered in both directions.
fn large_label(painter: &mut CellPainter<'_>, text: &str, color: Color) {
    let h = painter.measure(FontRole::Bold, sizes::RGB_BIG, text).height;
    let dy = (painter.size() - h) / 2.0 - 5.0;
    painter.text_centered(FontRole::Bold, sizes::RGB_BIG, dy, text, color);
}

fn plain_label(painter: &mut CellPainter<'_>, code: &str, kelvin: &Kelvin) {
    let black = Color::BLACK;
    painter.text_centered(FontRole::Bold, sizes::VALUE, 15.0, code, black);
    match kelvin {
        Kelvin::Range(lo, hi) => {
            painter.text_centered(FontRole::Regular, sizes::MID, 50.0, &format!("{} -", lo), black);
            painter.text_centered(FontRole::Regular, sizes::MID, 75.0, &format!("{}K", hi), black);
        }
        Kelvin::Single(k) => {
            painter.text_centered(FontRole::Regular, sizes::MID, 60.0, k, black);
        }
        Kelvin::None => {}
    }
}

fn digital_spi(painter: &mut CellPainter<'_>, palette: &Palette) {
    painter.background(palette.neutral);
    let letters = [('D', 12.0), ('I', 45.0), ('G', 58.0), ('I', 95.0)];
    for (i, (letter, dx)) in letters.iter().enumerate() {
        let color = palette
            .spi_letters
            .get(i % palette.spi_letters.len().max(1))
            .copied()
            .unwrap_or(Color::BLACK);
        painter.text(FontRole::Bold, sizes::RGB_BIG, *dx, 15.0, &letter.to_string(), color);
    }
    let strip = icons::spi::spi_strip(painter.size() as u32, palette);
    painter.paste_alpha(&strip, 0, 0);
    painter.outline(palette.outline);
}

/// Fill a badge-sized tile with the composite's color regions.
pub fn composite_tile(size: u32, mode: &CompositeMode, palette: &Palette) -> RgbaImage {
    let rgb = |key: &str| palette.rgb.get(key).copied().unwrap_or(Color::BLACK);
    let thirds = [rgb("R"), rgb("G"), rgb("B")];
    let half = size / 2;

    RgbaImage::from_fn(size, size, |x, y| {
        let third = thirds[((x * 3) / size.max(1)).min(2) as usize];
        let c = match mode {
            CompositeMode::Rgb => third,
            CompositeMode::RgbWhite { white } => {
                if y < half {
                    third
                } else {
                    palette.raw_color(white, Color::WHITE)
                }
            }
            CompositeMode::DualWhite { top, bottom } => {
                let part = if y < half { top } else { bottom };
                palette.raw_color(part, palette.neutral)
            }
        };
        Rgba([c.r, c.g, c.b, 255])
    })
}

fn composite_labels(painter: &mut CellPainter<'_>, mode: &CompositeMode) {
    let size = painter.size();
    let third = size / 3.0;
    let half = size / 2.0;
    match mode {
        CompositeMode::Rgb => {
            for (i, letter) in ["R", "G", "B"].iter().enumerate() {
                let dx = i as f32 * third + 2.0;
                painter.text(FontRole::Bold, sizes::RGB_BIG, dx, 35.0, letter, Color::WHITE);
            }
        }
        CompositeMode::RgbWhite { white } => {
            for (i, letter) in ["R", "G", "B"].iter().enumerate() {
                let dx = i as f32 * third + 6.0;
                painter.text(FontRole::Bold, sizes::RGB_SMALL, dx, 5.0, letter, Color::WHITE);
            }
            painter.text_centered(FontRole::Bold, sizes::RGB_BIG, half + 5.0, white, Color::BLACK);
        }
        CompositeMode::DualWhite { top, bottom } => {
            painter.text_centered(FontRole::Bold, sizes::DUAL, 10.0, top, Color::BLACK);
            painter.text_centered(FontRole::Bold, sizes::DUAL, half + 10.0, bottom, Color::BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetDir;
    use crate::cells::{FieldKind, resolve_style};
    use crate::fonts::Fonts;
    use crate::record::AttributeRecord;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    fn classify(value: &str, kelvin: &str) -> ColorClass {
        ColorClass::classify(value, kelvin, &Palette::default())
    }

    fn render(value: &str, assets: &AssetDir) -> RgbImage {
        let palette = Palette::default();
        let fonts = Fonts::builtin();
        let record = AttributeRecord::new().with("color", value);
        let ctx = CellContext {
            record: &record,
            palette: &palette,
            assets,
        };
        let style = resolve_style(FieldKind::Color, value, &palette);
        let mut img = RgbImage::from_pixel(120, 120, Rgb([255, 255, 255]));
        let mut painter = CellPainter::new(&mut img, &fonts, (0, 0), 120, 12);
        draw(&mut painter, &ctx, &Cell { field: "color", value }, &style);
        img
    }

    /// Pixels of exactly `color` away from the rounded corners.
    fn count(img: &RgbImage, color: Color) -> usize {
        img.enumerate_pixels()
            .filter(|(x, y, _)| (12..108).contains(x) && (12..108).contains(y))
            .filter(|(_, _, p)| **p == color.to_rgb())
            .count()
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            classify("Ovoce o zelenina", ""),
            ColorClass::ProductIcon {
                asset: "ovoce_o".into()
            }
        );
        assert_eq!(classify("NW", ""), ColorClass::PlainWhite { code: "NW".into() });
        assert_eq!(classify("DIGITAL SPI", ""), ColorClass::DigitalSpi);
        assert_eq!(classify("UVA", ""), ColorClass::Uv);
        assert_eq!(classify("RGB", ""), ColorClass::Composite(CompositeMode::Rgb));
    }

    #[test]
    fn test_white_code_with_kelvin_is_plain() {
        assert_eq!(
            classify("nw", "4000-4500"),
            ColorClass::Plain {
                code: "NW".into(),
                kelvin: Kelvin::Range("4000".into(), "4500".into()),
                large: false,
            }
        );
    }

    #[test]
    fn test_saturated_codes_render_large() {
        assert_eq!(
            classify("R", ""),
            ColorClass::Plain {
                code: "R".into(),
                kelvin: Kelvin::None,
                large: true,
            }
        );
        let with_kelvin = classify("Y", "2200");
        assert!(matches!(with_kelvin, ColorClass::Plain { large: false, .. }));
    }

    #[test]
    fn test_composite_modes() {
        assert_eq!(
            classify("RGB+CW", ""),
            ColorClass::Composite(CompositeMode::RgbWhite { white: "CW".into() })
        );
        assert_eq!(
            classify("EWW+CW", ""),
            ColorClass::Composite(CompositeMode::DualWhite {
                top: "EWW".into(),
                bottom: "CW".into()
            })
        );
        assert_eq!(
            classify("WW+NW+CW", ""),
            ColorClass::Composite(CompositeMode::DualWhite {
                top: "NW".into(),
                bottom: "NW".into()
            })
        );
    }

    #[test]
    fn test_kelvin_parse() {
        assert_eq!(Kelvin::parse(""), Kelvin::None);
        assert_eq!(Kelvin::parse(" 3000 "), Kelvin::Single("3000".into()));
        assert_eq!(
            Kelvin::parse("2700 - 3000"),
            Kelvin::Range("2700".into(), "3000".into())
        );
    }

    #[test]
    fn test_rgb_white_tile_regions() {
        let palette = Palette::default();
        let mode = CompositeMode::RgbWhite { white: "CW".into() };
        let tile = composite_tile(120, &mode, &palette);
        assert_eq!(tile.get_pixel(10, 10), &Rgba([0xED, 0x1C, 0x24, 255]));
        assert_eq!(tile.get_pixel(60, 10), &Rgba([0x39, 0xB5, 0x4A, 255]));
        assert_eq!(tile.get_pixel(110, 59), &Rgba([0x00, 0x71, 0xBC, 255]));
        assert_eq!(tile.get_pixel(0, 60), &Rgba([0xEA, 0xF6, 0xFE, 255]));
        assert_eq!(tile.get_pixel(119, 119), &Rgba([0xEA, 0xF6, 0xFE, 255]));
    }

    #[test]
    fn test_thirds_are_equal() {
        let tile = composite_tile(120, &CompositeMode::Rgb, &Palette::default());
        let boundaries: Vec<u32> = (1..120)
            .filter(|&x| tile.get_pixel(x, 0) != tile.get_pixel(x - 1, 0))
            .collect();
        assert_eq!(boundaries, vec![40, 80]);
    }

    #[test]
    fn test_product_icon_asset_has_no_text() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(50, 50, Rgba([0, 200, 0, 255]))
            .save(dir.path().join("Ovoce_O.png"))
            .unwrap();
        let assets = AssetDir::open(dir.path()).unwrap();
        let img = render("Ovoce o zelenina", &assets);
        assert_eq!(img.get_pixel(60, 60), &Rgb([0, 200, 0]));
        assert_eq!(count(&img, Color::BLACK), 0);
    }

    #[test]
    fn test_product_icon_miss_draws_value_text() {
        let img = render("Maso", &AssetDir::empty());
        let palette = Palette::default();
        assert_eq!(img.get_pixel(60, 110), &palette.neutral.to_rgb());
        assert!(count(&img, Color::BLACK) > 50);
        let edge = img.get_pixel(60, 0);
        assert!(edge[0] < 0xEE, "missing outline: {:?}", edge);
    }

    #[test]
    fn test_uv_badge() {
        let img = render("UV", &AssetDir::empty());
        assert_eq!(img.get_pixel(60, 110), &Color::hex("#531E54").to_rgb());
        assert!(count(&img, Color::WHITE) > 50);
    }

    #[test]
    fn test_digital_spi_letters_and_strip() {
        let img = render("DIGITAL SPI", &AssetDir::empty());
        let palette = Palette::default();
        for letter in &palette.spi_letters[..3] {
            assert!(count(&img, *letter) > 20, "letter color {:?} missing", letter);
        }
        let dark_strip = img
            .enumerate_pixels()
            .filter(|(_, y, p)| (75..101).contains(y) && p[0] < 80 && p[1] < 80)
            .count();
        assert!(dark_strip > 20);
    }

    #[test]
    fn test_dual_white_halves() {
        let img = render("EWW+CW", &AssetDir::empty());
        assert_eq!(img.get_pixel(10, 40), &Rgb([0xFA, 0xF3, 0x9D]));
        assert_eq!(img.get_pixel(10, 90), &Rgb([0xEA, 0xF6, 0xFE]));
        assert!(count(&img, Color::BLACK) > 50);
    }
}

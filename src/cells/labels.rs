//! Text-only badges: chip, voltage, IP rating and the generic value + unit
//! badge.

use image::imageops::{self, FilterType};

use super::{Cell, CellContext, CellStyle, outline_if_neutral, sizes};
use crate::compose::CellPainter;
use crate::fonts::FontRole;
use crate::record::digits;

/// `SMD2835` → `SMD` over `2835`. Anything else, COB chips included, is one
/// centered line.
pub fn chip(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    painter.background(style.background);
    let upper = cell.value.trim().to_uppercase();
    match upper.strip_prefix("SMD") {
        Some(number) if !upper.contains("COB") => {
            painter.text_centered(FontRole::Bold, sizes::VALUE, 20.0, "SMD", style.text);
            let number = number.trim_start_matches([' ', '-']);
            if !number.is_empty() {
                painter.text_centered(FontRole::Bold, sizes::VALUE, 60.0, number, style.text);
            }
        }
        _ => painter.text_centered(FontRole::Bold, sizes::VALUE, 40.0, &upper, style.text),
    }
    outline_if_neutral(painter, style, ctx.palette);
}

/// `"24 V"` → `24V` over `DC`.
pub fn voltage(painter: &mut CellPainter<'_>, _ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    painter.background(style.background);
    let volts = format!("{}V", digits(cell.value));
    painter.text(FontRole::Bold, sizes::VALUE, 35.0, 20.0, &volts, style.text);
    painter.text(FontRole::Bold, sizes::VALUE, 40.0, 65.0, "DC", style.text);
}

/// IP plate from the asset folder, or `IP` over the rating.
pub fn ip(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    painter.background(style.background);
    match ctx.assets.load(&format!("IP_{}", cell.value)) {
        Some(plate) => {
            let size = painter.size() as u32;
            let tile = imageops::resize(&plate.to_rgba8(), size, size, FilterType::Lanczos3);
            painter.paste_masked(&tile);
        }
        None => {
            painter.text(FontRole::Bold, sizes::VALUE, 45.0, 20.0, "IP", style.text);
            painter.text(FontRole::Bold, sizes::VALUE, 40.0, 65.0, cell.value, style.text);
        }
    }
    outline_if_neutral(painter, style, ctx.palette);
}

/// Centered value with its unit underneath (`leds`, `power`, `lumen`, ...).
pub fn plain(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    painter.background(style.background);
    painter.text_centered(FontRole::Bold, sizes::VALUE, 20.0, cell.value, style.text);
    let unit = ctx.palette.sub_text(cell.field);
    if !unit.is_empty() {
        painter.text_centered(FontRole::Regular, sizes::MID, 65.0, unit, style.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetDir;
    use crate::cells::{FieldKind, resolve_style};
    use crate::color::Color;
    use crate::config::Palette;
    use crate::fonts::Fonts;
    use crate::record::AttributeRecord;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn draw_field(field: &str, value: &str, assets: &AssetDir) -> RgbImage {
        let palette = Palette::default();
        let fonts = Fonts::builtin();
        let record = AttributeRecord::new().with(field, value);
        let ctx = CellContext {
            record: &record,
            palette: &palette,
            assets,
        };
        let kind = FieldKind::from_field(field);
        let style = resolve_style(kind, value, &palette);
        let mut img = RgbImage::from_pixel(120, 120, Rgb([255, 255, 255]));
        let mut painter = CellPainter::new(&mut img, &fonts, (0, 0), 120, 12);
        let cell = Cell { field, value };
        (kind.renderer())(&mut painter, &ctx, &cell, &style);
        img
    }

    /// Pixels of `color` away from the rounded corners.
    fn count(img: &RgbImage, color: Color) -> usize {
        img.enumerate_pixels()
            .filter(|(x, y, _)| (12..108).contains(x) && (12..108).contains(y))
            .filter(|(_, _, p)| **p == color.to_rgb())
            .count()
    }

    /// Distinct rows holding `color` away from the rounded corners.
    fn ink_rows(img: &RgbImage, color: Color) -> Vec<u32> {
        let mut rows: Vec<u32> = img
            .enumerate_pixels()
            .filter(|(x, y, p)| (12..108).contains(x) && (12..108).contains(y) && **p == color.to_rgb())
            .map(|(_, y, _)| y)
            .collect();
        rows.dedup();
        rows
    }

    #[test]
    fn test_chip_text_is_white_on_table_color() {
        let img = draw_field("chip", "SMD2835", &AssetDir::empty());
        assert_eq!(img.get_pixel(60, 110), &Color::hex("#AFCB08").to_rgb());
        assert!(count(&img, Color::WHITE) > 50);
    }

    #[test]
    fn test_chip_splits_smd_prefix() {
        let img = draw_field("chip", "SMD2835", &AssetDir::empty());
        let rows = ink_rows(&img, Color::WHITE);
        assert!(rows.iter().any(|y| *y < 50), "missing SMD line");
        assert!(rows.iter().any(|y| *y >= 60), "missing number line");
    }

    #[test]
    fn test_cob_chip_is_one_centered_line() {
        let img = draw_field("chip", "COB 8mm", &AssetDir::empty());
        assert_eq!(img.get_pixel(60, 110), &Color::hex("#A5C846").to_rgb());

        let rows = ink_rows(&img, Color::WHITE);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|y| (40..70).contains(y)), "{:?}", rows);

        let xs: Vec<u32> = img
            .enumerate_pixels()
            .filter(|(_, y, p)| (30..80).contains(y) && **p == Color::WHITE.to_rgb())
            .map(|(x, _, _)| x)
            .collect();
        let (min, max) = (xs.iter().min().unwrap(), xs.iter().max().unwrap());
        assert!((*min as i32 + *max as i32 - 120).abs() <= 6, "{}..{}", min, max);
    }

    #[test]
    fn test_voltage_text_uses_table_color() {
        let img = draw_field("voltage", "12", &AssetDir::empty());
        assert!(count(&img, Color::hex("#004F9F")) > 50);
    }

    #[test]
    fn test_ip_falls_back_to_text() {
        let img = draw_field("ip", "67", &AssetDir::empty());
        assert!(count(&img, Color::hex("#774495")) > 50);
        // Neutral lookup badge gets the gray outline on its top edge
        let edge = img.get_pixel(60, 0);
        assert!(edge[0] < 0xEE, "{:?}", edge);
    }

    #[test]
    fn test_ip_plate_from_assets() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(30, 30, Rgba([200, 0, 0, 255]))
            .save(dir.path().join("ip_68.png"))
            .unwrap();
        let assets = AssetDir::open(dir.path()).unwrap();
        let img = draw_field("ip", "68", &assets);
        assert_eq!(img.get_pixel(60, 60), &Rgb([200, 0, 0]));
        assert_eq!(count(&img, Color::hex("#774495")), 0);
    }

    #[test]
    fn test_plain_has_unit_line() {
        let with_unit = draw_field("leds", "120", &AssetDir::empty());
        let without = draw_field("lumen_total", "120", &AssetDir::empty());
        assert!(count(&with_unit, Color::BLACK) > count(&without, Color::BLACK));
    }
}

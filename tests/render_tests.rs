//! End-to-end rendering tests.
//!
//! Every test uses the built-in bitmap font so results don't depend on fonts
//! installed on the machine.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::Arc;

use stripsheet::assets::AssetDir;
use stripsheet::config::{Config, Palette};
use stripsheet::fonts::Fonts;
use stripsheet::footer::FooterOutcome;
use stripsheet::record::AttributeRecord;
use stripsheet::rules::{self, ProfileInputs, ProfileVariant};
use stripsheet::sheet::{SheetRenderer, save_jpeg};

/// Top-left corner of the default grid (x_start 102, top margin 20).
const GRID_X: u32 = 102;
const GRID_Y: u32 = 20;
const STEP: u32 = 135;

fn sample_record() -> AttributeRecord {
    AttributeRecord::new()
        .with("color", "RGB+CW")
        .with("chip", "SMD5050")
        .with("leds", "60")
        .with("power", "14.4")
        .with("lumen", "1200")
        .with("width", "10")
        .with("ip", "20")
        .with("voltage", "24")
        .with("cut", "50")
        .with("max_single", "5")
        .with("max_double", "10")
        .with("life", "30000")
        .with("title", "Strip 12A, cut every 3 LED")
}

fn renderer_with_assets(dir: &Path) -> SheetRenderer {
    SheetRenderer::new(
        Config::default(),
        Arc::new(Fonts::builtin()),
        AssetDir::open(dir).unwrap(),
    )
}

fn cell_pixels(img: &RgbImage, row: u32, col: u32) -> Vec<u8> {
    let (x0, y0) = (GRID_X + col * STEP, GRID_Y + row * STEP);
    let mut out = Vec::new();
    for y in y0..y0 + 120 {
        for x in x0..x0 + 120 {
            out.extend_from_slice(&img.get_pixel(x, y).0);
        }
    }
    out
}

fn close(p: &Rgb<u8>, expected: [u8; 3]) -> bool {
    p.0.iter()
        .zip(expected)
        .all(|(a, b)| (*a as i32 - b as i32).abs() <= 2)
}

#[test]
fn test_render_is_deterministic() {
    let renderer = SheetRenderer::with_defaults();
    let a = renderer.render(&sample_record());
    let b = renderer.render(&sample_record());
    assert_eq!(a.dimensions(), (1000, 320));
    assert!(a.as_raw() == b.as_raw(), "two renders of one record differ");
}

#[test]
fn test_canvas_extends_only_for_extra_badges() {
    let renderer = SheetRenderer::with_defaults();
    assert_eq!(renderer.render(&sample_record()).height(), 320);

    let strong = sample_record().with("power", "28.8");
    assert_eq!(renderer.render(&strong).height(), 470);

    let angled = sample_record().with("angle", "120");
    assert_eq!(renderer.render(&angled).height(), 470);
}

#[test]
fn test_rgb_white_split_on_sheet() {
    let img = SheetRenderer::with_defaults().render(&sample_record());
    let (x, y) = (GRID_X, GRID_Y);

    // Top half: red, green, blue thirds; bottom half: the white tone
    assert!(close(img.get_pixel(x + 30, y + 50), [0xED, 0x1C, 0x24]));
    assert!(close(img.get_pixel(x + 70, y + 50), [0x39, 0xB5, 0x4A]));
    assert!(close(img.get_pixel(x + 110, y + 50), [0x00, 0x71, 0xBC]));
    assert!(close(img.get_pixel(x + 15, y + 75), [0xEA, 0xF6, 0xFE]));
}

#[test]
fn test_digital_spi_badge_on_sheet() {
    let record = sample_record().with("color", "DIGITAL SPI").with("ip", "68");
    let img = SheetRenderer::with_defaults().render(&record);
    let red_letter = Palette::default().spi_letters[0].to_rgb();

    let cell = cell_pixels(&img, 0, 0);
    let hits = cell
        .chunks(3)
        .filter(|px| *px == &red_letter.0[..])
        .count();
    assert!(hits > 20, "first SPI letter not drawn ({} px)", hits);

    // Digital strips always use the digital cross-section
    let plain = SheetRenderer::with_defaults().render(&sample_record().with("ip", "67"));
    let digital_67 = SheetRenderer::with_defaults()
        .render(&sample_record().with("color", "DIGITAL SPI").with("ip", "67"));
    assert!(cell_pixels(&img, 0, 5) == cell_pixels(&digital_67, 0, 5));
    assert!(cell_pixels(&plain, 0, 5) != cell_pixels(&digital_67, 0, 5));
}

#[test]
fn test_gap_between_cells_stays_white() {
    let img = SheetRenderer::with_defaults().render(&sample_record());
    for row in 0..2 {
        for col in 0..5 {
            let x = GRID_X + col * STEP + 127;
            let y = GRID_Y + row * STEP + 60;
            assert_eq!(img.get_pixel(x, y), &Rgb([255, 255, 255]), "gap at {},{}", row, col);
        }
    }
}

#[test]
fn test_cut_cell_uses_scanned_led_count() {
    let renderer = SheetRenderer::with_defaults();
    let three = renderer.render(&sample_record());
    let six = renderer.render(&sample_record().with("title", "cut every 6 LED"));
    let direct = renderer.render(&sample_record().with("led_segment", "6"));

    assert!(cell_pixels(&three, 1, 2) != cell_pixels(&six, 1, 2));
    assert!(cell_pixels(&six, 1, 2) == cell_pixels(&direct, 1, 2));
}

#[test]
fn test_width_cell_follows_profile_variant() {
    let renderer = SheetRenderer::with_defaults();
    let ip20 = renderer.render(&sample_record());
    let ip67 = renderer.render(&sample_record().with("ip", "67"));
    assert!(cell_pixels(&ip20, 0, 5) != cell_pixels(&ip67, 0, 5));
}

#[test]
fn test_variant_priority() {
    let palette = Palette::default();
    let pick = |color: &str, ip: &str, chip: &str, model: &str| {
        rules::select_profile(
            &ProfileInputs {
                color: color.into(),
                ip: ip.into(),
                chip: chip.into(),
                model: model.into(),
            },
            &palette,
        )
    };

    assert_eq!(pick("DIGITAL SPI", "68", "COB", "81B"), ProfileVariant::Ip67Digital);
    assert_eq!(pick("CW", "54", "", "81b"), ProfileVariant::Ip54Vlhke);
    assert_eq!(pick("CW", "54", "", "12A"), ProfileVariant::Ip54);
    assert_eq!(pick("CW", "20", "COB", ""), ProfileVariant::Ip20Cob);
    assert_eq!(pick("", "", "", ""), ProfileVariant::Ip20);
}

#[test]
fn test_variant_model_scanned_from_record() {
    let record = AttributeRecord::new()
        .with("ip", "54")
        .with("title", "Vlhké prostory 82B");
    let inputs = ProfileInputs::from_record(&record);
    assert_eq!(inputs.model, "82B");
    assert_eq!(
        rules::select_profile(&inputs, &Palette::default()),
        ProfileVariant::Ip54Vlhke
    );
}

#[test]
fn test_footer_prefers_suffixed_asset() {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(100, 10, Rgba([255, 0, 0, 255]))
        .save(dir.path().join("12A24.png"))
        .unwrap();
    let record = sample_record()
        .with("color", "R")
        .with("model", "12A");

    let renderer = renderer_with_assets(dir.path());
    let (img, outcome) = renderer.render_with_footer(&record);
    assert_eq!(
        outcome,
        FooterOutcome::Placed {
            asset: "12A24".into()
        }
    );
    assert_eq!(img.dimensions(), (1000, 1000));
    assert!(close(img.get_pixel(500, 995), [255, 0, 0]));

    RgbaImage::from_pixel(100, 10, Rgba([0, 0, 255, 255]))
        .save(dir.path().join("12a24y.png"))
        .unwrap();
    let renderer = renderer_with_assets(dir.path());
    let (img, outcome) = renderer.render_with_footer(&record);
    assert_eq!(
        outcome,
        FooterOutcome::Placed {
            asset: "12A24Y".into()
        }
    );
    assert!(close(img.get_pixel(500, 995), [0, 0, 255]));
}

#[test]
fn test_footer_missing_keeps_grid() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = renderer_with_assets(dir.path());
    let record = sample_record().with("model", "12A");

    let grid = renderer.render(&record);
    let (img, outcome) = renderer.render_with_footer(&record);
    assert!(matches!(outcome, FooterOutcome::Missing { .. }));
    assert_eq!(img.get_pixel(GRID_X + 60, GRID_Y + 60), grid.get_pixel(GRID_X + 60, GRID_Y + 60));
    assert_eq!(img.get_pixel(500, 995), &Rgb([255, 255, 255]));
}

#[test]
fn test_ip_asset_replaces_text() {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(60, 60, Rgba([0, 200, 0, 255]))
        .save(dir.path().join("IP_20.png"))
        .unwrap();
    let img = renderer_with_assets(dir.path()).render(&sample_record());

    // Scaled plate fills the IP badge
    assert!(close(img.get_pixel(GRID_X + 60, GRID_Y + STEP + 60), [0, 200, 0]));
}

#[test]
fn test_record_from_json_file_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ml-126.json");
    std::fs::write(
        &path,
        r#"{"color": "NW", "kelvin": "4000", "ip": 65, "voltage": "12", "cri": "90", "angle": null}"#,
    )
    .unwrap();

    let record = AttributeRecord::from_path(&path).unwrap();
    assert_eq!(record.get("ip"), "65");
    assert!(!record.has("angle"));

    let img = SheetRenderer::with_defaults().render(&record);
    assert_eq!(img.dimensions(), (1000, 470));

    let out = dir.path().join("ML.126_30.jpg");
    save_jpeg(&img, &out, 95).unwrap();
    assert_eq!(image::image_dimensions(&out).unwrap(), (1000, 470));
}

#[test]
fn test_bad_record_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(AttributeRecord::from_path(&path).is_err());
}

//! # Sheet Configuration
//!
//! Geometry ([`SheetConfig`]) and color/label tables ([`Palette`]) for the
//! renderer. Both carry the production values in their `Default` impls and
//! can be partially overridden from a JSON file:
//!
//! ```json
//! {
//!   "sheet": { "width": 900 },
//!   "palette": { "ip": { "IP65": "#8844AA" } }
//! }
//! ```
//!
//! The renderer receives these once at construction and never mutates them,
//! so tests can swap in alternate palettes freely.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::SheetError;

/// Complete renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet: SheetConfig,
    pub palette: Palette,
}

/// Canvas and grid geometry, in output pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Canvas width
    pub width: u32,
    /// Canvas height without the optional-badge row
    pub height: u32,
    /// Extra height added when any optional badge is present
    pub extension: u32,
    /// Badge edge length
    pub cell_size: u32,
    /// Space between badges
    pub gap: u32,
    /// Corner radius of every badge
    pub radius: u32,
    /// Distance from the canvas top to the first row
    pub top_margin: u32,
    /// `power` at or above this value adds the AL-Profil badge
    pub power_threshold: f64,
    /// `cri` value that adds the CRI badge
    pub cri_trigger: String,
    /// Field names per grid row; blank entries leave the slot empty
    pub grid: Vec<Vec<String>>,
    /// Size of the canvas the footer compositor produces
    pub footer_width: u32,
    pub footer_height: u32,
    /// JPEG quality used by [`crate::sheet::save_jpeg`] callers
    pub jpeg_quality: u8,
    pub fonts: FontPaths,
}

impl Default for SheetConfig {
    fn default() -> Self {
        let row = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            width: 1000,
            height: 320,
            extension: 150,
            cell_size: 120,
            gap: 15,
            radius: 12,
            top_margin: 20,
            power_threshold: 28.8,
            cri_trigger: "90".to_string(),
            grid: vec![
                row(&["color", "chip", "leds", "power", "lumen", "width"]),
                row(&["ip", "voltage", "cut", "max_single", "max_double", "life"]),
            ],
            footer_width: 1000,
            footer_height: 1000,
            jpeg_quality: 95,
            fonts: FontPaths::default(),
        }
    }
}

/// Font files for the two logical roles.
///
/// Relative paths are resolved against the renderer's font directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPaths {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            bold: PathBuf::from("arialbd.ttf"),
            regular: PathBuf::from("arial.ttf"),
        }
    }
}

/// A color keyword whose badge is a pre-supplied icon image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIcon {
    /// Uppercase substring searched for in the `color` value
    pub keyword: String,
    /// Asset base name (extension-agnostic)
    pub asset: String,
}

impl ProductIcon {
    fn new(keyword: &str, asset: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            asset: asset.to_string(),
        }
    }
}

/// Every color and label table the cell renderers consult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Cell background per plain color code
    pub color_light: BTreeMap<String, Color>,
    /// Region fill per composite part (`RGB+CW` bottom, dual-white halves)
    pub raw_colors: BTreeMap<String, Color>,
    /// Tri-split fills
    pub rgb: BTreeMap<String, Color>,
    /// Chip background, matched as substring in table order
    pub chip: Vec<(String, Color)>,
    /// IP text color keyed as `IP67` or `67`
    pub ip: BTreeMap<String, Color>,
    pub ip_default: Color,
    /// Voltage text color keyed by digits
    pub voltage: BTreeMap<String, Color>,
    /// Unit sub-label per field name
    pub sub_texts: BTreeMap<String, String>,
    /// Neutral background for unmatched cells
    pub neutral: Color,
    /// Thin outline drawn around neutral composite/lookup cells
    pub outline: Color,
    pub uv_background: Color,
    /// Colors of the D, I, G, I letters in the Digital SPI badge
    pub spi_letters: Vec<Color>,
    /// LED squares in the Digital SPI strip glyph
    pub spi_leds: Vec<Color>,
    pub star_fill: Color,
    pub star_outline: Color,
    /// Fill of PCB strips in profile pictograms
    pub board: Color,
    /// White-family codes that render as a bare large label
    pub white_codes: Vec<String>,
    /// Saturated codes that render as a large white label when no kelvin is set
    pub saturated_codes: Vec<String>,
    pub product_icons: Vec<ProductIcon>,
    /// Models that switch IP54 to the `ip54_vlhke` profile
    pub vlhke_models: Vec<String>,
    /// Keywords giving footer suffix `Y`
    pub footer_saturated: Vec<String>,
    /// Keywords giving footer suffix `W`
    pub footer_white: Vec<String>,
}

fn color_table(entries: &[(&str, &str)]) -> BTreeMap<String, Color> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Color::hex(v)))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            color_light: color_table(&[
                ("UWW", "#FCE166"),
                ("EWW", "#FAF39D"),
                ("WW", "#FFFBDB"),
                ("NW", "#F6F6F6"),
                ("CW", "#EAF6FE"),
                ("R", "#DF1C1A"),
                ("G", "#39AB54"),
                ("B", "#009EDB"),
                ("Y", "#ECD150"),
                ("UV", "#38075B"),
                ("UVA", "#6A0DAD"),
                ("DW", "#DFEAEF"),
            ]),
            raw_colors: color_table(&[
                ("R", "#ED1C24"),
                ("G", "#39B54A"),
                ("B", "#0071BC"),
                ("CW", "#EAF6FE"),
                ("NW", "#FFFFFF"),
                ("WW", "#FFFBDB"),
                ("EWW", "#FAF39D"),
                ("UWW", "#FCE166"),
                ("DW", "#DFEAEF"),
                ("CCT", "#FFF3E0"),
            ]),
            rgb: color_table(&[("R", "#ED1C24"), ("G", "#39B54A"), ("B", "#0071BC")]),
            chip: [
                ("SMD2216", "#625CA6"),
                ("SMD2835", "#AFCB08"),
                ("SMD3014", "#A5C846"),
                ("SMD3527", "#FECA26"),
                ("SMD3528", "#F59A01"),
                ("SMD4040", "#7E4997"),
                ("SMD5050", "#004F9F"),
                ("COB", "#A5C846"),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), Color::hex(v)))
            .collect(),
            ip: color_table(&[
                ("IP20", "#14AC98"),
                ("IP54", "#A68FB8"),
                ("IP67", "#774495"),
                ("IP68", "#774495"),
            ]),
            ip_default: Color::hex("#A68FB8"),
            voltage: color_table(&[("24", "#009640"), ("12", "#004F9F")]),
            sub_texts: [
                ("leds", "LED/m"),
                ("power", "W/m"),
                ("lumen", "lm/m"),
                ("width", "mm"),
                ("life", "h"),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            neutral: Color::hex("#EEEEEE"),
            outline: Color::hex("#CCCCCC"),
            uv_background: Color::hex("#531E54"),
            spi_letters: ["#E30613", "#D9005B", "#662483", "#009EE3"]
                .iter()
                .map(|h| Color::hex(h))
                .collect(),
            spi_leds: ["#D9005B", "#009EE3", "#FFF100"]
                .iter()
                .map(|h| Color::hex(h))
                .collect(),
            star_fill: Color::hex("#FFF200"),
            star_outline: Color::hex("#FFA500"),
            board: Color::hex("#989898"),
            white_codes: strings(&["NW", "WW", "CW"]),
            saturated_codes: strings(&["R", "G", "B", "Y", "UV", "UVA", "V", "A"]),
            product_icons: vec![
                ProductIcon::new("OVOCE O", "ovoce_o"),
                ProductIcon::new("MASO", "maso"),
                ProductIcon::new("PEČIVO", "pecivo"),
            ],
            vlhke_models: strings(&["79B", "80B", "81B", "82B", "83B", "84B"]),
            footer_saturated: strings(&["RGB", "R", "G", "B", "Y", "UV", "OVOCE", "MASO", "PEČIVO"]),
            footer_white: strings(&["NW", "WW", "CW", "DW"]),
        }
    }
}

impl Palette {
    /// Background for a plain color code, or the neutral gray.
    pub fn color_background(&self, code: &str) -> Color {
        self.color_light
            .get(&code.to_uppercase())
            .copied()
            .unwrap_or(self.neutral)
    }

    /// Fill for one part of a composite badge.
    pub fn raw_color(&self, part: &str, fallback: Color) -> Color {
        self.raw_colors.get(part).copied().unwrap_or(fallback)
    }

    /// Chip background: first table key contained in the normalized value.
    pub fn chip_color(&self, chip: &str) -> Option<Color> {
        let clean = chip.to_uppercase().replace([' ', '-'], "");
        self.chip
            .iter()
            .find(|(key, _)| clean.contains(&key.to_uppercase()))
            .map(|(_, color)| *color)
    }

    /// IP text color, trying `IP{value}` before `{value}`.
    pub fn ip_color(&self, ip: &str) -> Color {
        self.ip
            .get(&format!("IP{}", ip))
            .or_else(|| self.ip.get(ip))
            .copied()
            .unwrap_or(self.ip_default)
    }

    /// Voltage text color; `24` wins over `12` when both appear.
    pub fn voltage_color(&self, voltage: &str) -> Option<Color> {
        ["24", "12"]
            .iter()
            .find(|key| voltage.contains(*key))
            .and_then(|key| self.voltage.get(*key))
            .copied()
    }

    pub fn sub_text(&self, field: &str) -> &str {
        self.sub_texts.get(field).map(String::as_str).unwrap_or("")
    }
}

/// Load configuration, starting from the defaults.
///
/// `None` returns [`Config::default`]. Keys absent from the file keep their
/// default values.
pub fn load_config(path: Option<&Path>) -> Result<Config, SheetError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| SheetError::Config(format!("{}: {}", path.display(), e)))
}

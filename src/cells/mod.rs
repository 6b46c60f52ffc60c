//! # Field Renderers
//!
//! One badge per grid slot. The field name maps once to a [`FieldKind`], and
//! each kind owns a drawing routine ([`FieldKind::renderer`]). Before
//! dispatch, [`resolve_style`] picks the badge background and text color
//! from the palette tables; the routines paint on top of that.
//!
//! | Kind | Fields | Routine |
//! |------|--------|---------|
//! | [`FieldKind::Color`] | `color` | [`color::draw`], itself a nested dispatch on [`ColorClass`] |
//! | [`FieldKind::Chip`] | `chip` | [`labels::chip`] |
//! | [`FieldKind::Voltage`] | `voltage` | [`labels::voltage`] |
//! | [`FieldKind::Ip`] | `ip` | [`labels::ip`] |
//! | [`FieldKind::MaxLength`] | `max_single`, `max_double` | [`length::max_length`] |
//! | [`FieldKind::Cut`] | `cut` | [`length::cut`] |
//! | [`FieldKind::Width`] | `width` | [`pictorial::width`] |
//! | [`FieldKind::Life`] | `life` | [`pictorial::life`] |
//! | [`FieldKind::Plain`] | anything else | [`labels::plain`] |
//!
//! Optional third-row badges are drawn by [`extras::draw`].

pub mod color;
pub mod extras;
pub mod labels;
pub mod length;
pub mod pictorial;

pub use color::{ColorClass, CompositeMode, Kelvin};

use crate::assets::AssetDir;
use crate::color::Color;
use crate::compose::CellPainter;
use crate::config::Palette;
use crate::icons::CircuitMode;
use crate::record::AttributeRecord;

/// Label sizes in pixels per em.
pub(crate) mod sizes {
    /// Main value line
    pub const VALUE: f32 = 30.0;
    /// Unit lines and secondary text
    pub const MID: f32 = 26.0;
    /// Letters in the RGB+white split
    pub const RGB_SMALL: f32 = 36.0;
    /// Large single labels
    pub const RGB_BIG: f32 = 48.0;
    pub const DUAL: f32 = 38.0;
    pub const SUB: f32 = 16.0;
    pub const CUT_NUM: f32 = 26.0;
    /// CRI and angle badge text
    pub const BADGE: f32 = 26.0;
    pub const CIRCUIT: f32 = 18.0;
    pub const LIFE_UNIT: f32 = 45.0;
}

/// Everything a cell routine may read besides the canvas.
#[derive(Clone, Copy)]
pub struct CellContext<'a> {
    pub record: &'a AttributeRecord,
    pub palette: &'a Palette,
    pub assets: &'a AssetDir,
}

/// The slot being drawn.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub field: &'a str,
    pub value: &'a str,
}

/// Resolved colors for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub background: Color,
    pub text: Color,
    /// Background came from a table lookup; a miss gets the thin outline
    pub looked_up: bool,
}

/// Drawing routine for one field kind.
pub type RenderFn = fn(&mut CellPainter<'_>, &CellContext<'_>, &Cell<'_>, &CellStyle);

/// How a field is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Color,
    Chip,
    Voltage,
    Ip,
    MaxLength(CircuitMode),
    Cut,
    Width,
    Life,
    Plain,
}

impl FieldKind {
    pub fn from_field(field: &str) -> Self {
        match field {
            "color" => FieldKind::Color,
            "chip" => FieldKind::Chip,
            "voltage" => FieldKind::Voltage,
            "ip" => FieldKind::Ip,
            "max_single" => FieldKind::MaxLength(CircuitMode::Single),
            "max_double" => FieldKind::MaxLength(CircuitMode::Double),
            "cut" => FieldKind::Cut,
            "width" => FieldKind::Width,
            "life" => FieldKind::Life,
            _ => FieldKind::Plain,
        }
    }

    /// Length badges draw their diagram even without a value.
    pub fn always_renders(&self) -> bool {
        matches!(self, FieldKind::MaxLength(_))
    }

    pub fn renderer(&self) -> RenderFn {
        match self {
            FieldKind::Color => color::draw,
            FieldKind::Chip => labels::chip,
            FieldKind::Voltage => labels::voltage,
            FieldKind::Ip => labels::ip,
            FieldKind::MaxLength(_) => length::max_length,
            FieldKind::Cut => length::cut,
            FieldKind::Width => pictorial::width,
            FieldKind::Life => pictorial::life,
            FieldKind::Plain => labels::plain,
        }
    }
}

/// Table-driven background and text color for a field value.
pub fn resolve_style(kind: FieldKind, value: &str, palette: &Palette) -> CellStyle {
    let neutral = CellStyle {
        background: palette.neutral,
        text: Color::BLACK,
        looked_up: false,
    };
    match kind {
        FieldKind::Color => CellStyle {
            background: palette.color_background(value),
            looked_up: true,
            ..neutral
        },
        FieldKind::Chip => match palette.chip_color(value) {
            Some(bg) => CellStyle {
                background: bg,
                text: Color::WHITE,
                looked_up: true,
            },
            None => CellStyle {
                looked_up: true,
                ..neutral
            },
        },
        FieldKind::Ip => CellStyle {
            text: palette.ip_color(value),
            looked_up: true,
            ..neutral
        },
        FieldKind::Voltage => CellStyle {
            text: palette.voltage_color(value).unwrap_or(Color::BLACK),
            ..neutral
        },
        _ => neutral,
    }
}

/// Draw one grid slot. Returns `false` when the slot is skipped.
pub fn render_field(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, field: &str) -> bool {
    let value = ctx.record.get(field);
    let kind = FieldKind::from_field(field);
    if value.is_empty() && !kind.always_renders() {
        return false;
    }

    let style = resolve_style(kind, value, ctx.palette);
    let cell = Cell { field, value };
    (kind.renderer())(painter, ctx, &cell, &style);
    true
}

/// Thin outline on lookup badges that fell back to the neutral gray.
pub(crate) fn outline_if_neutral(painter: &mut CellPainter<'_>, style: &CellStyle, palette: &Palette) {
    if style.looked_up && style.background == palette.neutral {
        painter.outline(palette.outline);
    }
}

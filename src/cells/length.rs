//! Length badges: maximum run length for single/double feed, and the cut
//! segment.

use super::{Cell, CellContext, CellStyle, FieldKind, sizes};
use crate::color::Color;
use crate::compose::CellPainter;
use crate::fonts::FontRole;
use crate::icons::{self, BADGE_UNITS, CircuitMode, LabelBox};

/// Supply label shown under the circuit, e.g. `24 V DC`.
fn supply_label(voltage: &str) -> String {
    format!("{} V DC", voltage).trim().to_string()
}

/// `≤ 5 m` over a strip diagram wired for one or both ends.
///
/// An asset named after the field replaces the hand-drawn diagram.
pub fn max_length(
    painter: &mut CellPainter<'_>,
    ctx: &CellContext<'_>,
    cell: &Cell<'_>,
    style: &CellStyle,
) {
    painter.background(style.background);
    let mode = match FieldKind::from_field(cell.field) {
        FieldKind::MaxLength(mode) => mode,
        _ => CircuitMode::Single,
    };
    let supply = supply_label(ctx.record.get("voltage"));
    let size = painter.size();

    if let Some(icon) = ctx.assets.probe(cell.field) {
        let px = size as u32;
        let tile = image::imageops::resize(
            &icon.to_rgba8(),
            px,
            px,
            image::imageops::FilterType::Lanczos3,
        );
        painter.paste_alpha(&tile, 0, 0);
        if !cell.value.is_empty() {
            let text = format!("≤ {} m", cell.value);
            painter.text_centered(FontRole::Bold, sizes::VALUE, 15.0, &text, Color::BLACK);
        }
        painter.text_centered(FontRole::Regular, sizes::CIRCUIT, 85.0, &supply, Color::BLACK);
        return;
    }

    if !cell.value.is_empty() {
        let black = Color::BLACK;
        let w = painter.measure(FontRole::Bold, sizes::VALUE, cell.value).width;
        painter.text(FontRole::Regular, sizes::MID, 20.0, 15.0, "≤", black);
        painter.text(FontRole::Bold, sizes::VALUE, 40.0, 10.0, cell.value, black);
        painter.text(FontRole::Regular, sizes::MID, 45.0 + w, 15.0, "m", black);
    }
    painter.ruler(20.0, size - 20.0, 45.0, 5.0, Some(5.0));

    let label = painter.measure(FontRole::Regular, sizes::CIRCUIT, &supply);
    let text_x = (size - label.width) / 2.0;
    let text_y = 85.0;
    painter.text(FontRole::Regular, sizes::CIRCUIT, text_x, text_y, &supply, Color::BLACK);

    let to_units = BADGE_UNITS / size;
    let label_box = LabelBox {
        left: text_x * to_units,
        right: (text_x + label.width) * to_units,
        center_y: (text_y + label.height / 2.0) * to_units,
    };
    let diagram = icons::circuit::circuit(size as u32, mode, label_box);
    painter.paste_alpha(&diagram, 0, 0);
}

/// LEDs per segment, a dimension line, and the segment length in mm.
pub fn cut(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    painter.background(style.background);
    let black = Color::BLACK;
    let size = painter.size();

    let leds = ctx.record.led_segment();
    let w = painter.measure(FontRole::Bold, sizes::CUT_NUM, &leds).width;
    painter.text(FontRole::Bold, sizes::CUT_NUM, 35.0 - w / 2.0, 15.0, &leds, black);
    painter.text(FontRole::Regular, sizes::MID, 40.0 + w / 2.0, 15.0, "LED", black);

    let y = 55.0;
    let (x0, x1) = (15.0, size - 15.0);
    painter.line((x0, y), (x1, y), 2.0, black);
    painter.line((x0, y - 5.0), (x0, y + 5.0), 2.0, black);
    painter.line((x1, y - 5.0), (x1, y + 5.0), 2.0, black);

    painter.text_centered(FontRole::Bold, sizes::CUT_NUM, 65.0, cell.value, black);
    painter.text(FontRole::Regular, sizes::MID, 40.0, 90.0, "mm", black);
}

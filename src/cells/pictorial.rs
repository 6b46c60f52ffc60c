//! Badges built around a pictogram: strip width and lifetime.

use super::{Cell, CellContext, CellStyle, sizes};
use crate::color::Color;
use crate::compose::CellPainter;
use crate::fonts::FontRole;
use crate::icons;
use crate::rules::{ProfileInputs, select_profile};

/// Cross-section for the record's enclosure, a dimension ruler, and the
/// width in mm.
pub fn width(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    painter.background(style.background);
    let size = painter.size();

    let variant = select_profile(&ProfileInputs::from_record(ctx.record), ctx.palette);
    let profile = icons::width::width_profile(size as u32, variant, ctx.palette);
    painter.paste_alpha(&profile, 0, 0);

    painter.ruler(26.0, size - 26.0, 15.0, 7.0, Some(6.0));
    painter.text_centered(FontRole::Bold, sizes::VALUE, 50.0, cell.value, Color::BLACK);
    painter.text_centered(FontRole::Regular, sizes::MID, 78.0, "mm", Color::BLACK);
}

/// Split a lifetime into a large lead and a small 3-digit tail:
/// `"50000"` → `("50", "000")`. Spaces are dropped first.
pub fn split_hours(value: &str) -> (String, String) {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let chars: Vec<char> = compact.chars().collect();
    if chars.len() > 3 {
        let cut = chars.len() - 3;
        (chars[..cut].iter().collect(), chars[cut..].iter().collect())
    } else {
        (compact, String::new())
    }
}

/// Clock face with hours, L/B lifetime classes underneath.
pub fn life(painter: &mut CellPainter<'_>, ctx: &CellContext<'_>, cell: &Cell<'_>, style: &CellStyle) {
    painter.background(style.background);
    let black = Color::BLACK;

    let clock = icons::clock::clock(painter.size() as u32);
    painter.paste_alpha(&clock, 0, 0);

    let (lead, tail) = split_hours(cell.value);
    let w = painter.measure(FontRole::Bold, sizes::VALUE, &lead).width;
    painter.text(FontRole::Bold, sizes::VALUE, 25.0, 18.0, &lead, black);
    if !tail.is_empty() {
        painter.text(FontRole::Regular, sizes::MID, 25.0 + w + 2.0, 24.0, &tail, black);
    }
    painter.text(FontRole::Regular, sizes::LIFE_UNIT, 35.0, 53.0, "h", black);

    let or = |key: &str, default: &str| {
        let v = ctx.record.get(key);
        if v.is_empty() { default.to_string() } else { v.to_string() }
    };
    let l_class = format!("L{}", or("life_l", "70"));
    let b_class = format!("B{}", or("life_b", "50"));
    painter.text(FontRole::Regular, sizes::SUB, 70.0, 63.0, &l_class, black);
    painter.text(FontRole::Regular, sizes::SUB, 70.0, 80.0, &b_class, black);
}

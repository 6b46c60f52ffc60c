//! Optional third-row badges.

use super::sizes;
use crate::color::Color;
use crate::compose::CellPainter;
use crate::config::Palette;
use crate::fonts::FontRole;
use crate::icons;
use crate::record::AttributeRecord;
use crate::rules::ExtraBadge;

const AL_LABEL: &str = "AL-Profil";

pub fn draw(painter: &mut CellPainter<'_>, badge: ExtraBadge, record: &AttributeRecord, palette: &Palette) {
    painter.background(palette.neutral);
    let size = painter.size() as u32;
    let black = Color::BLACK;

    match badge {
        ExtraBadge::Cri => {
            let star = icons::star::cri_star(size, palette);
            painter.paste_alpha(&star, 0, 0);
            painter.text_centered(FontRole::Bold, sizes::BADGE, 28.0, "CRI", black);
            painter.text_centered(FontRole::Bold, sizes::BADGE, 68.0, record.get("cri"), black);
        }
        ExtraBadge::AlProfile => {
            // Bold label shrinks to the regular face when it would touch the edges
            let limit = painter.size() - 10.0;
            let (role, px) = if painter.measure(FontRole::Bold, sizes::VALUE, AL_LABEL).width > limit {
                (FontRole::Regular, sizes::MID)
            } else {
                (FontRole::Bold, sizes::VALUE)
            };
            painter.text_centered(role, px, 10.0, AL_LABEL, black);
            let profile = icons::profile::al_profile(size, palette);
            painter.paste_alpha(&profile, 0, 0);
        }
        ExtraBadge::Angle => {
            let label = format!("{}°", record.get("angle"));
            painter.text_centered(FontRole::Bold, sizes::BADGE, 15.0, &label, black);
            let wedge = icons::angle::angle_wedge(size);
            painter.paste_alpha(&wedge, 0, 0);
        }
    }
}

//! # Conditional Rules
//!
//! Decisions that depend on combinations of attributes rather than a single
//! field:
//!
//! - [`select_profile`] picks the strip cross-section for the width badge.
//!   Every caller that shows a cross-section goes through it so the choice
//!   stays consistent.
//! - [`extra_badges`] picks the optional badges for the third row.
//!
//! ## Profile priority
//!
//! | # | Condition | Variant |
//! |---|-----------|---------|
//! | 1 | `color` contains `DIGITAL SPI` | `ip67_digital` |
//! | 2 | `ip == "54"` and model in the damp-room list | `ip54_vlhke` |
//! | 3 | `ip == "54"` | `ip54` |
//! | 4 | `ip == "67"` | `ip67` |
//! | 5 | `ip == "68"` | `ip68` |
//! | 6 | `ip == "20"` | `ip20_cob` if `chip` contains `COB`, else `ip20` |
//! | 7 | anything else | `ip20` |

use crate::config::{Palette, SheetConfig};
use crate::record::AttributeRecord;

pub use crate::icons::ProfileVariant;

/// The attributes profile selection depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInputs {
    pub color: String,
    pub ip: String,
    pub chip: String,
    pub model: String,
}

impl ProfileInputs {
    /// Gather inputs from a record. An empty `model` falls back to the first
    /// `NNB` model token found anywhere in the record.
    pub fn from_record(record: &AttributeRecord) -> Self {
        Self {
            color: record.get("color").to_string(),
            ip: record.get("ip").to_string(),
            chip: record.get("chip").to_string(),
            model: record.model_or_scan(),
        }
    }
}

/// Pick the cross-section variant. Total over all inputs.
pub fn select_profile(inputs: &ProfileInputs, palette: &Palette) -> ProfileVariant {
    let color = inputs.color.to_uppercase();
    let chip = inputs.chip.to_uppercase();
    let model = inputs.model.trim().to_uppercase();
    let ip = inputs.ip.trim();

    match ip {
        _ if color.contains("DIGITAL SPI") => ProfileVariant::Ip67Digital,
        "54" if palette.vlhke_models.iter().any(|m| m.eq_ignore_ascii_case(&model)) => {
            ProfileVariant::Ip54Vlhke
        }
        "54" => ProfileVariant::Ip54,
        "67" => ProfileVariant::Ip67,
        "68" => ProfileVariant::Ip68,
        "20" if chip.contains("COB") => ProfileVariant::Ip20Cob,
        "20" => ProfileVariant::Ip20,
        _ => ProfileVariant::Ip20,
    }
}

/// Optional badges in the third row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraBadge {
    /// Color rendering index star, when `cri` equals the trigger value
    Cri,
    /// Aluminum profile recommendation, when power reaches the threshold
    AlProfile,
    /// Beam angle wedge, when `angle` is set
    Angle,
}

/// Active optional badges, in placement order.
pub fn extra_badges(record: &AttributeRecord, sheet: &SheetConfig) -> Vec<ExtraBadge> {
    let mut badges = Vec::new();
    if record.get("cri") == sheet.cri_trigger {
        badges.push(ExtraBadge::Cri);
    }
    if record.number("power") >= sheet.power_threshold {
        badges.push(ExtraBadge::AlProfile);
    }
    if record.has("angle") {
        badges.push(ExtraBadge::Angle);
    }
    badges
}

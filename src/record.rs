//! # Attribute Records
//!
//! An [`AttributeRecord`] is the flat `field name → string` mapping produced by
//! the upstream scraper or data-entry form. The renderer treats it as
//! immutable input.
//!
//! Lookup never fails: an absent key reads as the empty string, values are
//! trimmed, and numeric accessors fall back to `0.0` on malformed text.
//!
//! ```
//! use stripsheet::record::AttributeRecord;
//!
//! let record = AttributeRecord::new()
//!     .with("power", "28,8")
//!     .with("voltage", " 24 ");
//!
//! assert_eq!(record.get("voltage"), "24");
//! assert_eq!(record.number("power"), 28.8);
//! assert_eq!(record.get("cri"), "");
//! ```

use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::SheetError;

/// Flat product attributes keyed by field name.
///
/// Backed by a `BTreeMap` so whole-record scans visit values in key order,
/// which keeps rendering deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRecord {
    fields: BTreeMap<String, String>,
}

impl AttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Trimmed value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(|v| v.trim()).unwrap_or("")
    }

    /// True when the key exists with a non-blank value.
    pub fn has(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    /// Parse a numeric field, accepting a comma decimal separator.
    ///
    /// Returns `0.0` for absent or malformed values.
    pub fn number(&self, key: &str) -> f64 {
        parse_number(self.get(key))
    }

    /// Iterate over all `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// LEDs per cuttable segment.
    ///
    /// Uses `led_segment` when it holds a non-zero integer; otherwise scans
    /// every value for a `"<n> LED"` phrase. Densities such as `"60 LED/m"`
    /// are skipped. Returns `"0"` when nothing matches.
    pub fn led_segment(&self) -> String {
        let direct = self.get("led_segment");
        if let Ok(n) = direct.parse::<u32>()
            && n > 0
        {
            return n.to_string();
        }

        self.fields
            .values()
            .find_map(|value| {
                led_count_regex()
                    .captures_iter(value)
                    .find(|caps| {
                        let end = caps.get(0).map_or(value.len(), |m| m.end());
                        !value[end..].trim_start().starts_with('/')
                    })
                    .map(|caps| caps[1].to_string())
            })
            .unwrap_or_else(|| "0".to_string())
    }

    /// Model code, falling back to the first `NNB` token found anywhere in
    /// the record when the `model` field is blank.
    pub fn model_or_scan(&self) -> String {
        let model = self.get("model").to_uppercase();
        if !model.is_empty() {
            return model;
        }
        self.fields
            .values()
            .find_map(|value| model_b_regex().find(value).map(|m| m.as_str().to_uppercase()))
            .unwrap_or_default()
    }

    /// Parse a record from a JSON object.
    ///
    /// String values are kept as-is, numbers and booleans are stringified,
    /// `null` becomes the empty string.
    pub fn from_json_str(json: &str) -> Result<Self, SheetError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| SheetError::Record(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(SheetError::Record("expected a JSON object".to_string()));
        };

        let mut record = Self::new();
        for (key, value) in map {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(SheetError::Record(format!(
                        "field '{}' must be a scalar, got {}",
                        key, other
                    )));
                }
            };
            record.insert(&key, text);
        }
        Ok(record)
    }

    /// Read a JSON record from disk.
    pub fn from_path(path: &Path) -> Result<Self, SheetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
            .map_err(|e| SheetError::Record(format!("{}: {}", path.display(), e)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse free-text numbers such as `"28,8"` or `" 14.4 "`.
pub fn parse_number(text: &str) -> f64 {
    text.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// Keep only ASCII digits (`"24 V"` → `"24"`).
pub fn digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// File name for a rendered sheet.
///
/// Accepts a bare product code or a product URL; the last path segment is
/// uppercased with dashes turned into dots (`ml-126-676-60-x` →
/// `ML.126.676.60.X_30.jpg`).
pub fn output_file_name(product: &str) -> String {
    let slug = product
        .trim()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    format!("{}_30.jpg", slug.to_uppercase().replace('-', "."))
}

fn led_count_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*LED").expect("valid LED count pattern"))
}

fn model_b_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{2}B\b").expect("valid model pattern"))
}

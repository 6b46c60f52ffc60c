//! # Layout Grid
//!
//! Badge placement. The fixed rows are centered horizontally:
//!
//! ```text
//! x_start = (W - (C·S + (C-1)·G)) / 2      (integer division)
//! origin(row, col) = (x_start + col·(S+G), top + row·(S+G))
//! ```
//!
//! Optional badges go into one extra row below the last fixed row, filled
//! left to right from `x_start`. The canvas only grows to hold that row when
//! at least one optional badge is active.

use crate::config::SheetConfig;
use crate::record::AttributeRecord;
use crate::rules;

/// Rows of field names. Blank names are empty slots.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    rows: Vec<Vec<String>>,
}

impl GridSpec {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn from_config(sheet: &SheetConfig) -> Self {
        Self::new(sheet.grid.clone())
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Non-blank slots as `(row, col, field)`, in drawing order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, field)| (r, c, field.trim()))
                .filter(|(_, _, field)| !field.is_empty())
        })
    }
}

/// Horizontal offset that centers `columns` badges in `width`.
///
/// A grid wider than the canvas starts at 0.
pub fn x_start(width: u32, columns: u32, size: u32, gap: u32) -> u32 {
    let content = columns * size + columns.saturating_sub(1) * gap;
    width.saturating_sub(content) / 2
}

/// True when any optional badge needs the extra row.
pub fn needs_extension(record: &AttributeRecord, sheet: &SheetConfig) -> bool {
    !rules::extra_badges(record, sheet).is_empty()
}

/// Resolved geometry for one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub gap: u32,
    pub x_start: u32,
    pub y_start: u32,
    /// Number of fixed rows; the optional row sits at this index
    pub fixed_rows: u32,
}

impl Layout {
    pub fn new(sheet: &SheetConfig, grid: &GridSpec, extended: bool) -> Self {
        let height = if extended {
            sheet.height + sheet.extension
        } else {
            sheet.height
        };
        Self {
            width: sheet.width,
            height,
            cell_size: sheet.cell_size,
            gap: sheet.gap,
            x_start: x_start(sheet.width, grid.columns() as u32, sheet.cell_size, sheet.gap),
            y_start: sheet.top_margin,
            fixed_rows: grid.rows() as u32,
        }
    }

    /// Layout for a specific record.
    pub fn for_record(sheet: &SheetConfig, grid: &GridSpec, record: &AttributeRecord) -> Self {
        Self::new(sheet, grid, needs_extension(record, sheet))
    }

    fn pitch(&self) -> u32 {
        self.cell_size + self.gap
    }

    /// Top-left corner of the badge at `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (
            self.x_start + col as u32 * self.pitch(),
            self.y_start + row as u32 * self.pitch(),
        )
    }

    /// Top-left corner of the `index`-th optional badge.
    pub fn extra_origin(&self, index: usize) -> (u32, u32) {
        self.cell_origin(self.fixed_rows as usize, index)
    }
}

//! # Stripsheet - LED Strip Data-Sheet Renderer
//!
//! Stripsheet turns a flat record of LED-strip attributes (color, chip,
//! voltage, IP rating, ...) into a standardized technical data-sheet image:
//! a grid of labeled badges, hand-drawn technical pictograms, optional
//! badges for CRI / beam angle / aluminum profile, and an optional footer
//! strip picked from an asset folder.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use stripsheet::{AttributeRecord, SheetRenderer, sheet::save_jpeg};
//!
//! let record = AttributeRecord::new()
//!     .with("color", "RGB+CW")
//!     .with("chip", "SMD5050")
//!     .with("leds", "60")
//!     .with("power", "14,4")
//!     .with("voltage", "24")
//!     .with("ip", "20")
//!     .with("cri", "90");
//!
//! let renderer = SheetRenderer::with_defaults();
//! let image = renderer.render(&record);
//! save_jpeg(&image, Path::new("ML.126_30.jpg"), 95)?;
//! # Ok::<(), stripsheet::SheetError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`record`] | Attribute records, numeric parsing, JSON input |
//! | [`config`] | Sheet geometry and palette tables |
//! | [`color`] | RGB color value |
//! | [`fonts`] | Font roles with built-in bitmap fallback |
//! | [`raster`] | Primitive shape drawing |
//! | [`compose`] | Badge painting and masked compositing |
//! | [`icons`] | Supersampled pictogram catalog |
//! | [`layout`] | Grid geometry and canvas extension |
//! | [`rules`] | Profile variant and optional badge selection |
//! | [`cells`] | Per-field badge renderers |
//! | [`assets`] | Case-insensitive image folder lookup |
//! | [`footer`] | Footer canvas and reference strip lookup |
//! | [`sheet`] | Top-level renderer and image export |
//! | [`error`] | Error types |

pub mod assets;
pub mod cells;
pub mod color;
pub mod compose;
pub mod config;
pub mod error;
pub mod fonts;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod raster;
pub mod record;
pub mod rules;
pub mod sheet;

// Re-exports for convenience
pub use config::Config;
pub use error::SheetError;
pub use record::AttributeRecord;
pub use sheet::SheetRenderer;

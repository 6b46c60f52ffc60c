//! # Error Types
//!
//! Errors that reach the caller. Missing or malformed optional attributes never
//! show up here; they degrade the affected cell instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stripsheet operations
#[derive(Debug, Error)]
pub enum SheetError {
    /// Record could not be read or parsed
    #[error("Record error: {0}")]
    Record(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Image encoding or decoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Font could not be loaded
    #[error(transparent)]
    Font(#[from] FontLoadError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to load a TrueType/OpenType font file.
///
/// The renderer reacts to this by switching every font role to the built-in
/// bitmap face; see [`crate::fonts::Fonts::load`].
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("cannot read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a usable font file: {path}")]
    Invalid { path: PathBuf },
}

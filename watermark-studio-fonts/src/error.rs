//! Typed error types for watermark-studio-fonts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole catalog build.
///
/// Per-file problems (unreadable fonts, malformed name tables) never show up
/// here: they only demote the file to a lower naming tier.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The resolved fonts folder does not exist or is not a directory.
    #[error("Fonts folder not found or not a directory: {}", path.display())]
    NotFound {
        /// Absolute path that was checked.
        path: PathBuf,
    },

    /// The fonts folder exists but its entries could not be listed.
    #[error("Failed to read fonts folder '{}': {source}", path.display())]
    ReadDir {
        /// Absolute path of the folder.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced while measuring text.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The font bytes could not be parsed as a TrueType/OpenType face.
    #[error("font data could not be parsed as a TrueType/OpenType face")]
    InvalidFont,

    /// The `hhea`/`maxp`/`hmtx` tables disagree or are missing.
    #[error("inconsistent horizontal metrics: {0}")]
    InvalidMetrics(&'static str),

    /// The requested pixel size is not a positive finite number.
    #[error("invalid pixel size: {0}")]
    InvalidSize(f32),
}

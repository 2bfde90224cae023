//! Typed error variants for the watermark-studio-config crate.
//!
//! Config I/O failures and watermark settings validation failures are kept
//! apart so callers can tell a broken file from a bad user input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("I/O error on config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML.
    #[error("YAML parse error in config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),
}

/// Reasons a set of watermark settings is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Watermark text cannot be empty")]
    EmptyText,

    #[error("Opacity must be between 0.0 and 1.0 (got {0})")]
    OpacityOutOfRange(f32),

    #[error("Font size must be greater than 0")]
    InvalidFontSize,

    /// Position string that is none of the nine anchors.
    #[error("Position must be one of: {valid} (got '{given}')")]
    UnknownPosition { given: String, valid: String },
}

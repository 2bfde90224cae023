//! The [`Config`] struct and its builder-style setters.
//!
//! File I/O and path helpers live in [`persistence`].

mod persistence;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::templates::{NamedTemplate, TemplateLibrary};
use crate::types::{LogLevel, WatermarkSettings};

/// Settings read from `~/.config/watermark-studio/config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fonts folder. Relative paths resolve against the program directory.
    /// When unset the catalog falls back to its built-in default folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts_dir: Option<PathBuf>,

    /// Distance in pixels between the watermark and the image edge
    #[serde(default = "crate::defaults::margin")]
    pub margin: u32,

    /// Log level used when neither `--log-level` nor `RUST_LOG` is given
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,

    /// Optional file that receives a copy of every log line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Default watermark settings for `place`
    #[serde(default)]
    pub watermark: WatermarkSettings,

    /// User templates, merged over the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<NamedTemplate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fonts_dir: None,
            margin: crate::defaults::margin(),
            log_level: crate::defaults::log_level(),
            log_file: None,
            watermark: WatermarkSettings::default(),
            templates: Vec::new(),
        }
    }
}

impl Config {
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(dir.into());
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_watermark(mut self, watermark: WatermarkSettings) -> Self {
        self.watermark = watermark;
        self
    }

    /// Built-in templates with the configured ones merged on top.
    pub fn template_library(&self) -> TemplateLibrary {
        let mut library = TemplateLibrary::with_defaults();
        library.merge(&self.templates);
        library
    }

    /// `fonts_dir` with a leading `~/` expanded to the home directory.
    pub fn expanded_fonts_dir(&self) -> Option<PathBuf> {
        self.fonts_dir.as_deref().map(persistence::expand_home)
    }
}

//! Watermark settings.

use serde::{Deserialize, Serialize};

use super::WatermarkPosition;
use crate::error::SettingsError;

/// Everything needed to stamp one text watermark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatermarkSettings {
    /// Watermark text (e.g. a name or website)
    #[serde(default)]
    pub text: String,

    /// Anchor inside the image
    #[serde(default = "crate::defaults::position")]
    pub position: WatermarkPosition,

    /// 0.0 (invisible) to 1.0 (opaque)
    #[serde(default = "crate::defaults::opacity")]
    pub opacity: f32,

    /// Text size in pixels
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: u32,

    /// Text color name or hex string, passed through to the compositor
    #[serde(default = "crate::defaults::color")]
    pub color: String,

    /// Display name (or filename stem) of a font from the catalog
    #[serde(default = "crate::defaults::font")]
    pub font: String,
}

impl Default for WatermarkSettings {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: crate::defaults::position(),
            opacity: crate::defaults::opacity(),
            font_size: crate::defaults::font_size(),
            color: crate::defaults::color(),
            font: crate::defaults::font(),
        }
    }
}

impl WatermarkSettings {
    /// Settings with the given text and defaults for everything else.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: WatermarkPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Check the settings before planning a watermark.
    ///
    /// Text must contain something other than whitespace, opacity must lie in
    /// `0.0..=1.0` and the font size must be non-zero.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.text.trim().is_empty() {
            return Err(SettingsError::EmptyText);
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(SettingsError::OpacityOutOfRange(self.opacity));
        }
        if self.font_size == 0 {
            return Err(SettingsError::InvalidFontSize);
        }
        Ok(())
    }
}

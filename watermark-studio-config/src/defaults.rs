//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes so that a
//! partial config file still loads.

use crate::types::{LogLevel, WatermarkPosition};

/// Distance in pixels between the watermark and the image edge.
pub fn margin() -> u32 {
    20
}

pub fn log_level() -> LogLevel {
    LogLevel::Warn
}

pub fn position() -> WatermarkPosition {
    WatermarkPosition::BottomRight
}

pub fn opacity() -> f32 {
    0.5
}

pub fn font_size() -> u32 {
    24
}

pub fn color() -> String {
    "white".to_string()
}

pub fn font() -> String {
    "arial".to_string()
}

//! Watermark anchor positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SettingsError;

/// Where the watermark text sits inside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WatermarkPosition {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

/// Horizontal or vertical alignment along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Middle,
    End,
}

impl WatermarkPosition {
    /// All positions, row by row from the top-left.
    pub fn all() -> &'static [WatermarkPosition] {
        &[
            WatermarkPosition::TopLeft,
            WatermarkPosition::TopCenter,
            WatermarkPosition::TopRight,
            WatermarkPosition::CenterLeft,
            WatermarkPosition::Center,
            WatermarkPosition::CenterRight,
            WatermarkPosition::BottomLeft,
            WatermarkPosition::BottomCenter,
            WatermarkPosition::BottomRight,
        ]
    }

    /// Config/CLI spelling, e.g. `bottom-right`.
    pub fn as_str(&self) -> &'static str {
        match self {
            WatermarkPosition::TopLeft => "top-left",
            WatermarkPosition::TopCenter => "top-center",
            WatermarkPosition::TopRight => "top-right",
            WatermarkPosition::CenterLeft => "center-left",
            WatermarkPosition::Center => "center",
            WatermarkPosition::CenterRight => "center-right",
            WatermarkPosition::BottomLeft => "bottom-left",
            WatermarkPosition::BottomCenter => "bottom-center",
            WatermarkPosition::BottomRight => "bottom-right",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            WatermarkPosition::TopLeft => "Top Left",
            WatermarkPosition::TopCenter => "Top Center",
            WatermarkPosition::TopRight => "Top Right",
            WatermarkPosition::CenterLeft => "Center Left",
            WatermarkPosition::Center => "Center",
            WatermarkPosition::CenterRight => "Center Right",
            WatermarkPosition::BottomLeft => "Bottom Left",
            WatermarkPosition::BottomCenter => "Bottom Center",
            WatermarkPosition::BottomRight => "Bottom Right",
        }
    }

    /// Horizontal alignment.
    pub fn horizontal(&self) -> Align {
        match self {
            WatermarkPosition::TopLeft
            | WatermarkPosition::CenterLeft
            | WatermarkPosition::BottomLeft => Align::Start,
            WatermarkPosition::TopCenter
            | WatermarkPosition::Center
            | WatermarkPosition::BottomCenter => Align::Middle,
            WatermarkPosition::TopRight
            | WatermarkPosition::CenterRight
            | WatermarkPosition::BottomRight => Align::End,
        }
    }

    /// Vertical alignment.
    pub fn vertical(&self) -> Align {
        match self {
            WatermarkPosition::TopLeft
            | WatermarkPosition::TopCenter
            | WatermarkPosition::TopRight => Align::Start,
            WatermarkPosition::CenterLeft
            | WatermarkPosition::Center
            | WatermarkPosition::CenterRight => Align::Middle,
            WatermarkPosition::BottomLeft
            | WatermarkPosition::BottomCenter
            | WatermarkPosition::BottomRight => Align::End,
        }
    }

    fn valid_list() -> String {
        WatermarkPosition::all()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatermarkPosition {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WatermarkPosition::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownPosition {
                given: s.to_string(),
                valid: WatermarkPosition::valid_list(),
            })
    }
}

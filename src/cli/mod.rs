//! Command-line interface for watermark-studio.
//!
//! This module handles CLI argument parsing. The subcommand implementations
//! live in the [`commands`] submodule.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use watermark_studio_config::{TemplateLibrary, WatermarkPosition, WatermarkSettings};

use crate::watermark::ImageSize;

/// watermark-studio - Font catalog and text watermark planner
#[derive(Debug, Parser)]
#[command(name = "watermark-studio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/watermark-studio/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the fonts in a folder as `name -> filename`
    Fonts {
        /// Fonts folder (defaults to the configured folder, then ../assets/fonts)
        dir: Option<PathBuf>,
    },

    /// Plan where a text watermark goes on one or more images
    Place(PlaceArgs),

    /// List the available watermark templates
    Templates,
}

/// Options for `place`. Anything left unset comes from the template or config.
#[derive(Debug, Clone, Args)]
pub struct PlaceArgs {
    /// Image size as WIDTHxHEIGHT (repeat for several images)
    #[arg(long = "image", value_name = "WxH", required = true)]
    pub images: Vec<ImageSize>,

    /// Watermark text
    #[arg(long)]
    pub text: Option<String>,

    /// Anchor: top-left, top-center, ..., bottom-right
    #[arg(long, value_name = "POSITION")]
    pub position: Option<WatermarkPosition>,

    /// Font display name or filename stem
    #[arg(long, value_name = "NAME")]
    pub font: Option<String>,

    /// Text size in pixels
    #[arg(long, value_name = "PX")]
    pub font_size: Option<u32>,

    /// Opacity from 0.0 to 1.0
    #[arg(long)]
    pub opacity: Option<f32>,

    /// Text color passed through to the compositor
    #[arg(long)]
    pub color: Option<String>,

    /// Start from a named template instead of the configured defaults
    #[arg(long, value_name = "NAME")]
    pub template: Option<String>,

    /// Fonts folder (overrides config)
    #[arg(long, value_name = "DIR")]
    pub fonts_dir: Option<PathBuf>,

    /// Distance from the image edge in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    pub margin: Option<u32>,
}

impl PlaceArgs {
    /// Merge the flags over a template (when `--template` is given) or `defaults`.
    pub fn settings(
        &self,
        defaults: &WatermarkSettings,
        templates: &TemplateLibrary,
    ) -> anyhow::Result<WatermarkSettings> {
        let mut settings = match &self.template {
            Some(name) => templates.load(name).cloned().ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown template '{}' (available: {})",
                    name,
                    templates.list().join(", ")
                )
            })?,
            None => defaults.clone(),
        };

        if let Some(text) = &self.text {
            settings.text = text.clone();
        }
        if let Some(position) = self.position {
            settings.position = position;
        }
        if let Some(font) = &self.font {
            settings.font = font.clone();
        }
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
        if let Some(opacity) = self.opacity {
            settings.opacity = opacity;
        }
        if let Some(color) = &self.color {
            settings.color = color.clone();
        }
        Ok(settings)
    }
}

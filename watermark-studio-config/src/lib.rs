//! Configuration system for Watermark Studio.
//!
//! This crate provides:
//!
//! - The YAML-backed [`Config`] (fonts folder, placement margin, logging)
//! - Watermark settings types and their validation
//! - The in-memory [`TemplateLibrary`] seeded with default templates

pub mod config;
pub mod defaults;
pub mod error;
pub mod templates;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::{ConfigError, SettingsError};
pub use templates::{NamedTemplate, TemplateLibrary};
pub use types::{Align, LogLevel, WatermarkPosition, WatermarkSettings};

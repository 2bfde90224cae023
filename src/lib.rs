//! Watermark Studio library: CLI plumbing, logging and watermark planning on
//! top of the font catalog in `watermark-studio-fonts`.

pub mod cli;
pub mod debug;
pub mod watermark;

pub use watermark::{
    DEFAULT_MARGIN, ImageSize, PlanError, PlannedFont, WatermarkPlan, WatermarkPlanner,
    text_position,
};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

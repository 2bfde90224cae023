//! Configuration types.

mod log_level;
mod position;
mod settings;

pub use log_level::LogLevel;
pub use position::{Align, WatermarkPosition};
pub use settings::WatermarkSettings;

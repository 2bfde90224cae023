//! Watermark placement and planning.

pub mod placement;
pub mod planner;

pub use placement::{DEFAULT_MARGIN, ImageSize, text_position};
pub use planner::{PlanError, PlannedFont, WatermarkPlan, WatermarkPlanner};

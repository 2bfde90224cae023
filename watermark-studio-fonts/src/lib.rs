//! Font discovery and text measurement for Watermark Studio.
//!
//! This crate provides:
//! - A font catalog builder that maps human-readable display names to the
//!   `.ttf` files in a fonts folder
//! - A tiered display-name strategy (name table, face info, filename stem)
//! - Text extent measurement for placing watermark text
//!
//! # Architecture
//!
//! `FontCatalogBuilder` scans the top level of a directory in filename order
//! and asks an ordered list of [`NameSource`] tiers for each file's display
//! name. A tier that cannot answer is skipped; the filename stem is the
//! terminal fallback, so every matching file ends up in the catalog.
//! Duplicate names are disambiguated with ` (2)`, ` (3)`, ... suffixes.

pub mod catalog;
pub mod error;
mod mac_roman;
pub mod metrics;
pub mod name_source;

// Re-export main types for convenience
pub use catalog::{
    DEFAULT_FONTS_DIR, FONT_EXTENSION, FontCatalog, FontCatalogBuilder, build_catalog,
    resolve_font_dir,
};
pub use error::{CatalogError, MetricsError};
pub use metrics::{TextExtent, estimate_text, measure_text};
pub use name_source::{FontFile, NameSource, default_sources, file_stem_name};

//! Shared integration test helpers for watermark-studio.
//!
//! Font fixtures come from the fonts crate's test builder so both crates
//! exercise the same synthetic TrueType files.

#![allow(dead_code)]

#[path = "../../watermark-studio-fonts/tests/common/mod.rs"]
mod font_fixtures;

pub use font_fixtures::*;

use tempfile::TempDir;

/// A temp fonts folder holding `(file_name, full_name)` fixtures.
pub fn fonts_dir_with(fonts: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp fonts dir");
    for (file_name, full_name) in fonts {
        write_font(dir.path(), file_name, &font_with_full_name(full_name));
    }
    dir
}

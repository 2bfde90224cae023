//! Display-name tiers for font files.
//!
//! Each tier is a [`NameSource`]: given a font file it either produces a
//! display name or declines. Tiers never fail loudly; a tier whose backing
//! library is compiled out simply isn't in the list. The filename stem
//! ([`file_stem_name`]) is the terminal fallback and always succeeds.

#[cfg(feature = "face-info")]
mod face_info;
#[cfg(feature = "name-table")]
mod name_table;
pub mod records;

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "face-info")]
pub use face_info::{FaceInfoSource, combine_family_style};
#[cfg(feature = "name-table")]
pub use name_table::NameTableSource;

/// A font file queued for naming.
///
/// The bytes are read once and shared by every metadata tier. A file that
/// cannot be read still gets a name from the filename stem.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
    data: Option<Vec<u8>>,
}

impl FontFile {
    /// Read a font file from disk.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read(&path) {
            Ok(data) => Some(data),
            Err(e) => {
                log::debug!("Could not read font file {:?}: {}", path, e);
                None
            }
        };
        Self { path, data }
    }

    /// Wrap bytes that are already in memory.
    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data: Some(data),
        }
    }

    /// Full path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw font bytes, if the file could be read.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Bare filename without any directory component.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// One tier of the display-name strategy.
pub trait NameSource {
    /// Short label used in log output.
    fn label(&self) -> &str {
        "custom"
    }

    /// Display name for `font`, or `None` if this tier has no answer.
    fn display_name(&self, font: &FontFile) -> Option<String>;
}

impl<F> NameSource for F
where
    F: Fn(&FontFile) -> Option<String>,
{
    fn display_name(&self, font: &FontFile) -> Option<String> {
        self(font)
    }
}

/// The metadata tiers available in this build, in priority order.
pub fn default_sources() -> Vec<Box<dyn NameSource>> {
    #[allow(unused_mut)]
    let mut sources: Vec<Box<dyn NameSource>> = Vec::new();
    #[cfg(feature = "name-table")]
    sources.push(Box::new(NameTableSource));
    #[cfg(feature = "face-info")]
    sources.push(Box::new(FaceInfoSource));
    sources
}

/// Filename without its extension, e.g. `Roboto-Bold.ttf` -> `Roboto-Bold`.
pub fn file_stem_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

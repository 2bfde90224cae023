//! Font catalog construction.
//!
//! A catalog maps display names to the `.ttf` files of a single folder:
//! - Only the top level of the folder is scanned, in filename order
//! - Each file is named by the first tier that answers (see [`crate::name_source`])
//! - Repeated names get ` (2)`, ` (3)`, ... suffixes
//!
//! The only fatal error is a folder that does not exist. Everything that goes
//! wrong with an individual file degrades to a lower naming tier.

mod dedupe;
mod types;

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Component, Path, PathBuf};

use crate::error::CatalogError;
use crate::name_source::{FontFile, NameSource, default_sources, file_stem_name};

pub use dedupe::NameDeduper;
pub use types::{CatalogEntry, FontCatalog};

/// Fonts folder used when no directory is given, relative to the program location.
pub const DEFAULT_FONTS_DIR: &str = "../assets/fonts";

/// Extension of files picked up by the scan (compared case-insensitively).
pub const FONT_EXTENSION: &str = "ttf";

/// Builds [`FontCatalog`]s from a fonts folder.
pub struct FontCatalogBuilder {
    /// Metadata tiers in priority order (filename stem is always appended)
    sources: Vec<Box<dyn NameSource>>,
    /// Base for relative folders (defaults to the executable's directory)
    base_dir: Option<PathBuf>,
}

impl Default for FontCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontCatalogBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCatalogBuilder")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.label()).collect::<Vec<_>>(),
            )
            .field("base_dir", &self.base_dir)
            .finish()
    }
}

impl FontCatalogBuilder {
    /// Builder with every metadata tier compiled into this build.
    pub fn new() -> Self {
        Self::with_sources(default_sources())
    }

    /// Builder with a custom tier list. The filename stem still backs it up.
    pub fn with_sources(sources: Vec<Box<dyn NameSource>>) -> Self {
        Self {
            sources,
            base_dir: None,
        }
    }

    /// Resolve relative folders against `dir` instead of the executable's directory.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Scan `directory` (or [`DEFAULT_FONTS_DIR`]) and build a catalog.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] if the resolved folder is missing or not a
    /// directory, [`CatalogError::ReadDir`] if it cannot be listed.
    pub fn build(&self, directory: Option<&Path>) -> Result<FontCatalog, CatalogError> {
        let directory = directory.unwrap_or_else(|| Path::new(DEFAULT_FONTS_DIR));
        let resolved = resolve_font_dir(directory, self.base_dir.as_deref());

        if !resolved.is_dir() {
            return Err(CatalogError::NotFound { path: resolved });
        }
        log::debug!("Scanning fonts folder {:?}", resolved);

        let files = list_font_files(&resolved)?;
        let mut catalog = FontCatalog::new(resolved);
        let mut dedupe = NameDeduper::new();

        for path in files {
            let font = FontFile::open(path);
            let name = self.display_name(&font);
            let unique = dedupe.unique(&name);
            catalog.insert(unique, font.file_name());
        }

        log::info!(
            "Found {} font(s) in {:?}",
            catalog.len(),
            catalog.directory()
        );
        Ok(catalog)
    }

    /// Name a single file: first tier with a non-empty answer, else the stem.
    ///
    /// A tier that panics on a corrupt file counts as having no answer.
    pub fn display_name(&self, font: &FontFile) -> String {
        for source in &self.sources {
            match query_source(&**source, font).map(|n| n.trim().to_string()) {
                Some(name) if !name.is_empty() => {
                    log::trace!("{:?}: '{}' from {}", font.path(), name, source.label());
                    return name;
                }
                _ => log::trace!("{:?}: no name from {}", font.path(), source.label()),
            }
        }
        let stem = file_stem_name(font.path());
        log::debug!("{:?}: no font metadata, using '{}'", font.path(), stem);
        stem
    }
}

fn query_source(source: &dyn NameSource, font: &FontFile) -> Option<String> {
    match panic::catch_unwind(AssertUnwindSafe(|| source.display_name(font))) {
        Ok(name) => name,
        Err(_) => {
            log::debug!(
                "{:?}: {} tier panicked on malformed data",
                font.path(),
                source.label()
            );
            None
        }
    }
}

/// Build a catalog with the default tiers. See [`FontCatalogBuilder::build`].
pub fn build_catalog(directory: Option<&Path>) -> Result<FontCatalog, CatalogError> {
    FontCatalogBuilder::new().build(directory)
}

/// Resolve a fonts folder to an absolute path.
///
/// Absolute paths are returned as given. Relative paths are joined onto
/// `base`, or onto the running executable's directory, or onto the working
/// directory when the executable location is unknown.
pub fn resolve_font_dir(directory: &Path, base: Option<&Path>) -> PathBuf {
    if directory.is_absolute() {
        return directory.to_path_buf();
    }
    let base = match base {
        Some(base) if base.is_absolute() => base.to_path_buf(),
        Some(base) => working_dir().join(base),
        None => program_dir(),
    };
    let joined = base.join(directory);
    fs::canonicalize(&joined).unwrap_or_else(|_| normalize(&joined))
}

fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(working_dir)
}

fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Collapse `.` and `..` without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Top-level `.ttf` files in filename order.
fn list_font_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                None
            }
        })
        .filter(|path| is_font_file(path))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_font_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(FONT_EXTENSION))
}

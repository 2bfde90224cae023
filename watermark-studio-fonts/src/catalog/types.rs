//! Font catalog data types.

use std::fmt;
use std::path::{Path, PathBuf};

/// One catalog row: a unique display name and the file that provides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display name, possibly with a ` (n)` suffix.
    pub name: String,
    /// Bare filename inside the catalog directory.
    pub file_name: String,
}

/// Display name -> filename mapping produced by one catalog build.
///
/// Entries keep the directory scan order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontCatalog {
    directory: PathBuf,
    entries: Vec<CatalogEntry>,
}

impl FontCatalog {
    pub(crate) fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            entries: Vec::new(),
        }
    }

    /// Insert a mapping. An existing name keeps its position and gets the new file.
    pub(crate) fn insert(&mut self, name: String, file_name: String) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            log::warn!(
                "Font name '{}' already maps to '{}', replacing with '{}'",
                name,
                existing.file_name,
                file_name
            );
            existing.file_name = file_name;
            return;
        }
        self.entries.push(CatalogEntry { name, file_name });
    }

    /// Resolved directory the catalog was built from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Filename for a display name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.file_name.as_str())
    }

    /// Full path of the font behind a display name.
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        self.get(name).map(|file| self.directory.join(file))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Display names in scan order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// `(name, filename)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.file_name.as_str()))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for FontCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} -> {}", entry.name, entry.file_name)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FontCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Watermark planning.
//!
//! A plan is everything a compositor needs to stamp text onto an image: the
//! font file, the text box and its top-left corner. Planning resolves the
//! configured font against a [`FontCatalog`] and measures the text with it,
//! falling back to an estimate when no usable font is found.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use watermark_studio_config::{SettingsError, WatermarkPosition, WatermarkSettings};
use watermark_studio_fonts::{
    CatalogError, FontCatalog, FontCatalogBuilder, TextExtent, estimate_text, measure_text,
};

use super::placement::{DEFAULT_MARGIN, ImageSize, text_position};

/// Errors that stop a watermark from being planned.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid watermark settings: {0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Font picked for a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFont {
    /// Catalog display name
    pub name: String,
    pub path: PathBuf,
}

/// Where and how the watermark text goes on one image.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkPlan {
    pub image: ImageSize,
    pub text: String,
    /// `None` when the requested font is not in the catalog
    pub font: Option<PlannedFont>,
    pub text_extent: TextExtent,
    /// Top-left corner of the text box, may be negative
    pub origin: (i64, i64),
    pub position: WatermarkPosition,
    pub opacity: f32,
    pub color: String,
}

impl WatermarkPlan {
    pub fn font_file(&self) -> Option<&Path> {
        self.font.as_ref().map(|f| f.path.as_path())
    }
}

impl fmt::Display for WatermarkPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "image: {}", self.image)?;
        match &self.font {
            Some(font) => writeln!(f, "font: {} ({})", font.name, font.path.display())?,
            None => writeln!(f, "font: none (estimated extent)")?,
        }
        writeln!(
            f,
            "box: {}x{}",
            self.text_extent.width, self.text_extent.height
        )?;
        writeln!(f, "origin: ({}, {}) {}", self.origin.0, self.origin.1, self.position)?;
        write!(f, "style: {} at {:.2} opacity", self.color, self.opacity)
    }
}

/// Plans watermarks against one font catalog.
#[derive(Debug, Clone)]
pub struct WatermarkPlanner {
    catalog: FontCatalog,
    margin: u32,
}

impl WatermarkPlanner {
    pub fn new(catalog: FontCatalog) -> Self {
        Self {
            catalog,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Build the catalog for `directory` (or the default fonts folder) and plan against it.
    pub fn from_dir(directory: Option<&Path>) -> Result<Self, PlanError> {
        let catalog = FontCatalogBuilder::new().build(directory)?;
        Ok(Self::new(catalog))
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Look up `name` in the catalog.
    ///
    /// Tries the exact display name, then the display name ignoring case,
    /// then the filename stem ignoring case.
    pub fn resolve_font(&self, name: &str) -> Option<PlannedFont> {
        let name = name.trim();
        let found = self
            .catalog
            .get(name)
            .map(|file| (name, file))
            .or_else(|| {
                self.catalog
                    .iter()
                    .find(|(display, _)| same_name(display, name))
            })
            .or_else(|| {
                self.catalog.iter().find(|(_, file)| {
                    Path::new(file)
                        .file_stem()
                        .and_then(|stem| stem.to_str())
                        .is_some_and(|stem| same_name(stem, name))
                })
            });

        found.map(|(display, file)| PlannedFont {
            name: display.to_string(),
            path: self.catalog.directory().join(file),
        })
    }

    /// Plan one watermark.
    ///
    /// # Errors
    /// [`PlanError::Settings`] if the settings do not validate.
    pub fn plan(
        &self,
        image: ImageSize,
        settings: &WatermarkSettings,
    ) -> Result<WatermarkPlan, PlanError> {
        settings.validate()?;

        let pixel_size = settings.font_size as f32;
        let font = self.resolve_font(&settings.font);
        let text_extent = match &font {
            Some(font) => measure_with(&font.path, &settings.text, pixel_size),
            None => {
                log::warn!(
                    "Font '{}' not found in {}, estimating text size",
                    settings.font,
                    self.catalog.directory().display()
                );
                estimate_text(&settings.text, pixel_size)
            }
        };

        let origin = text_position(image, text_extent, settings.position, self.margin);
        log::info!(
            "Planned '{}' on {} at ({}, {}) box {}x{}",
            settings.text,
            image,
            origin.0,
            origin.1,
            text_extent.width,
            text_extent.height
        );

        Ok(WatermarkPlan {
            image,
            text: settings.text.clone(),
            font,
            text_extent,
            origin,
            position: settings.position,
            opacity: settings.opacity,
            color: settings.color.clone(),
        })
    }

    /// Plan the same watermark for several images. Each image is planned on its own.
    pub fn plan_batch(
        &self,
        images: &[ImageSize],
        settings: &WatermarkSettings,
    ) -> Vec<Result<WatermarkPlan, PlanError>> {
        images
            .iter()
            .map(|image| {
                let result = self.plan(*image, settings);
                if let Err(e) = &result {
                    log::error!("Failed to plan watermark for {}: {}", image, e);
                }
                result
            })
            .collect()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn measure_with(path: &Path, text: &str, pixel_size: f32) -> TextExtent {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to read font {:?}: {}, estimating text size", path, e);
            return estimate_text(text, pixel_size);
        }
    };
    match measure_text(&data, text, pixel_size) {
        Ok(extent) => extent,
        Err(e) => {
            log::warn!("Failed to measure text with {:?}: {}, estimating text size", path, e);
            estimate_text(text, pixel_size)
        }
    }
}

//! Watermark templates.
//!
//! Templates are named [`WatermarkSettings`] presets held in memory. The
//! library starts with three defaults; extra templates can come from the
//! `templates` section of the config file.

use serde::{Deserialize, Serialize};

use crate::types::{WatermarkPosition, WatermarkSettings};

/// A template as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTemplate {
    pub name: String,
    #[serde(flatten)]
    pub settings: WatermarkSettings,
}

/// Named watermark presets in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateLibrary {
    templates: Vec<NamedTemplate>,
}

impl TemplateLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library seeded with the built-in templates.
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        for template in default_templates() {
            library.save(template.name, template.settings);
        }
        library
    }

    /// Store a template, replacing any existing one with the same name.
    pub fn save(&mut self, name: impl Into<String>, settings: WatermarkSettings) {
        let name = name.into();
        match self.templates.iter_mut().find(|t| t.name == name) {
            Some(existing) => existing.settings = settings,
            None => self.templates.push(NamedTemplate { name: name.clone(), settings }),
        }
        log::debug!("Template '{}' saved", name);
    }

    pub fn load(&self, name: &str) -> Option<&WatermarkSettings> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.settings)
    }

    /// Template names in insertion order.
    pub fn list(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// Remove a template. Returns `false` if there was none by that name.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.name != name);
        let removed = self.templates.len() != before;
        if removed {
            log::debug!("Template '{}' deleted", name);
        }
        removed
    }

    /// Add or replace templates from config, keeping their order.
    pub fn merge(&mut self, templates: &[NamedTemplate]) {
        for template in templates {
            self.save(template.name.clone(), template.settings.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The built-in templates.
pub fn default_templates() -> Vec<NamedTemplate> {
    vec![
        NamedTemplate {
            name: "Simple Text".to_string(),
            settings: WatermarkSettings::new("© Your Name")
                .with_position(WatermarkPosition::BottomRight)
                .with_opacity(0.7)
                .with_font_size(24)
                .with_color("white"),
        },
        NamedTemplate {
            name: "Website URL".to_string(),
            settings: WatermarkSettings::new("yourwebsite.com")
                .with_position(WatermarkPosition::BottomCenter)
                .with_opacity(0.5)
                .with_font_size(18)
                .with_color("gray"),
        },
        NamedTemplate {
            name: "Artist Signature".to_string(),
            settings: WatermarkSettings::new("Artist Name")
                .with_position(WatermarkPosition::BottomLeft)
                .with_opacity(0.8)
                .with_font_size(20)
                .with_color("black"),
        },
    ]
}

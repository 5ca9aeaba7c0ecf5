//! Stylesheet system for the document palette
//!
//! Renderers never hard-code colours. They ask for a role on the [`Palette`]
//! (primary, dark text, gray text and so on), which is resolved from a TOML
//! stylesheet so the same deck can be exported in a different brand.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::Color;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid colour '{value}' for token '{token}' (expected #rrggbb)")]
    InvalidColor { token: String, value: String },
}

/// A stylesheet mapping colour tokens to hex values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette: blue accent on slate text
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
primary = "#2563eb"
dark = "#0f172a"
gray = "#64748b"
light = "#94a3b8"
light-bg = "#f1f5f9"
warning = "#d97706"
white = "#ffffff"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        for (token, value) in &parsed.colors {
            if Color::from_hex(value).is_none() {
                return Err(StylesheetError::InvalidColor {
                    token: token.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a colour token defined in this stylesheet
    pub fn resolve(&self, token: &str) -> Option<Color> {
        self.colors.get(token).and_then(|hex| Color::from_hex(hex))
    }

    /// Resolve a token, falling back to the built-in palette
    pub fn resolve_or_default(&self, token: &str) -> Color {
        if let Some(color) = self.resolve(token) {
            return color;
        }
        Self::default().resolve(token).unwrap_or(Color::BLACK)
    }

    /// Resolve every palette role
    pub fn palette(&self) -> Palette {
        Palette {
            primary: self.resolve_or_default("primary"),
            dark: self.resolve_or_default("dark"),
            gray: self.resolve_or_default("gray"),
            light: self.resolve_or_default("light"),
            light_bg: self.resolve_or_default("light-bg"),
            warning: self.resolve_or_default("warning"),
            white: self.resolve_or_default("white"),
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

/// Colour roles shared by every section renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Accent for highlights, bars and filled bands
    pub primary: Color,
    /// Titles and body text
    pub dark: Color,
    /// Secondary body text and the footer
    pub gray: Color,
    /// Hairline borders
    pub light: Color,
    /// Card and box fills
    pub light_bg: Color,
    pub warning: Color,
    pub white: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Stylesheet::default().palette()
    }
}

//! Investor Summary - one-page-per-section PDF decks from structured content
//!
//! This library turns an ordered list of section descriptors into a
//! paginated A4 document and serializes it to PDF.
//!
//! # Example
//!
//! ```rust
//! use investor_summary::{parse_deck, render_pdf, ExportConfig};
//!
//! let sections = parse_deck(r#"[
//!     {"type": "hero", "brand": "Acme", "headline": "Paperwork,",
//!      "headlineHighlight": "solved.", "taglines": ["For agents"]}
//! ]"#).unwrap();
//!
//! let pdf = render_pdf(&sections, None, &ExportConfig::default()).unwrap();
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

pub mod document;
pub mod error;
pub mod image;
pub mod layout;
pub mod renderer;
pub mod sanitize;
pub mod section;
pub mod sections;
pub mod stylesheet;

pub use document::{assemble, assemble_with_config, page_label, Document, DrawOp, Page};
pub use error::ValidationError;
pub use layout::PageConfig;
pub use renderer::PdfConfig;
pub use sanitize::sanitize;
pub use section::{parse_deck, Section, SectionKind};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// File written by [`export`] when no path is given
pub const DEFAULT_FILENAME: &str = "investor-summary.pdf";

/// Errors that can occur during the export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    /// A section failed strict validation
    #[error("section {index} is invalid: {source}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Nothing to write
    #[error("refusing to export a document with no pages")]
    EmptyDocument,

    /// Serialization or save failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the complete export pipeline
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Page geometry
    pub page: PageConfig,
    /// PDF output configuration
    pub pdf: PdfConfig,
    /// Stylesheet for the colour palette
    pub stylesheet: Stylesheet,
    /// Left footer text on every page
    pub copyright: String,
    /// Validate sections before drawing anything
    pub strict: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            pdf: PdfConfig::default(),
            stylesheet: Stylesheet::default(),
            copyright: "© Investor Summary. Confidential.".to_string(),
            strict: false,
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry
    pub fn with_page(mut self, page: PageConfig) -> Self {
        self.page = page;
        self
    }

    /// Set the PDF configuration
    pub fn with_pdf(mut self, pdf: PdfConfig) -> Self {
        self.pdf = pdf;
        self
    }

    /// Set the stylesheet for colour resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the footer copyright text
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    /// Enable or disable strict validation
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Assemble sections and serialize them to PDF bytes
pub fn render_pdf(
    sections: &[Section],
    mascot: Option<&[u8]>,
    config: &ExportConfig,
) -> Result<Vec<u8>, ExportError> {
    let document = assemble_with_config(sections, mascot, config)?;
    if document.is_empty() {
        return Err(ExportError::EmptyDocument);
    }
    Ok(renderer::render_pdf(&document, &config.pdf)?)
}

/// Write the deck to `path`, or to [`DEFAULT_FILENAME`] in the working directory
///
/// Returns the path that was written.
pub fn export(
    sections: &[Section],
    mascot: Option<&[u8]>,
    path: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    export_with_config(sections, mascot, path, &ExportConfig::default())
}

/// Write the deck with a custom configuration
pub fn export_with_config(
    sections: &[Section],
    mascot: Option<&[u8]>,
    path: Option<&Path>,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let bytes = render_pdf(sections, mascot, config)?;
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));
    fs::write(&path, &bytes)?;

    info!(
        path = %path.display(),
        pages = sections.len(),
        bytes = bytes.len(),
        "exported investor summary"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{Hero, Raise, RaiseOption};

    fn hero() -> Section {
        Section::Hero(Hero {
            brand: "Acme".to_string(),
            headline: "Paperwork,".to_string(),
            headline_highlight: "solved.".to_string(),
            taglines: vec!["For agents".to_string()],
        })
    }

    fn raise(recommended: usize) -> Section {
        Section::Raise(Raise {
            title: "The raise".to_string(),
            subtitle: vec!["Pre-seed".to_string()],
            options: (0..3)
                .map(|i| RaiseOption {
                    amount: format!("{}00k", i + 1),
                    label: "Runway".to_string(),
                    desc: "months".to_string(),
                    recommended: i < recommended,
                })
                .collect(),
            recommendation: "Take the middle".to_string(),
            closing: "Thanks".to_string(),
        })
    }

    #[test]
    fn test_render_pdf_header() {
        let pdf = render_pdf(&[hero()], None, &ExportConfig::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_pdf_refuses_empty() {
        let err = render_pdf(&[], None, &ExportConfig::default()).unwrap_err();
        assert!(matches!(err, ExportError::EmptyDocument));
    }

    #[test]
    fn test_strict_mode_reports_section_index() {
        let config = ExportConfig::new().with_strict(true);
        let err = render_pdf(&[hero(), raise(2)], None, &config).unwrap_err();
        match err {
            ExportError::Validation { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::MultipleRecommended { count: 2 });
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_lenient_mode_renders_invalid_sections() {
        let pdf = render_pdf(&[raise(2)], None, &ExportConfig::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_broken_mascot_is_not_fatal() {
        let mascot = b"not an image".as_slice();
        let pdf = render_pdf(&[hero()], Some(mascot), &ExportConfig::default());
        assert!(pdf.is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ExportConfig::new()
            .with_copyright("(c) Acme")
            .with_page(PageConfig::default().with_margin(15.0))
            .with_pdf(PdfConfig::new().with_compress(true))
            .with_strict(true);
        assert_eq!(config.copyright, "(c) Acme");
        assert_eq!(config.page.margin, 15.0);
        assert!(config.pdf.compress);
        assert!(config.strict);
    }

    #[test]
    fn test_error_display() {
        let err = ExportError::Validation {
            index: 3,
            source: ValidationError::MultipleRecommended { count: 2 },
        };
        assert!(err.to_string().starts_with("section 3 is invalid"));
    }
}

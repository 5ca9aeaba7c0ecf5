//! Configuration for PDF output

/// Configuration options for PDF serialization
#[derive(Debug, Clone, PartialEq)]
pub struct PdfConfig {
    /// Document title written to the info dictionary
    pub title: Option<String>,

    /// Author written to the info dictionary
    pub author: Option<String>,

    /// Creator application name
    pub creator: String,

    /// Whether to Flate-compress page content streams
    pub compress: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            title: Some("Investor Summary".to_string()),
            author: None,
            creator: "investor-summary".to_string(),
            compress: false,
        }
    }
}

impl PdfConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Remove the document title
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Set the document author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set whether content streams are compressed
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PdfConfig::default();
        assert_eq!(config.title.as_deref(), Some("Investor Summary"));
        assert_eq!(config.author, None);
        assert_eq!(config.creator, "investor-summary");
        assert!(!config.compress);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PdfConfig::new()
            .without_title()
            .with_author("Finance")
            .with_compress(true);

        assert_eq!(config.title, None);
        assert_eq!(config.author.as_deref(), Some("Finance"));
        assert!(config.compress);
    }
}

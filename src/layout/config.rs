//! Page geometry configuration

/// Configuration options for page geometry, all in millimetres
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Page width (A4 portrait by default)
    pub width: f64,

    /// Page height
    pub height: f64,

    /// Outer margin applied on every side
    pub margin: f64,

    /// Distance from the page bottom to the footer baseline
    pub footer_offset: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 20.0,
            footer_offset: 10.0,
        }
    }
}

impl PageConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the outer margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the footer offset from the bottom edge
    pub fn with_footer_offset(mut self, offset: f64) -> Self {
        self.footer_offset = offset;
        self
    }

    /// Page width minus both margins
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }
}

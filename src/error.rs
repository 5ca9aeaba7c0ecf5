//! Error types for section validation

use thiserror::Error;

/// Problems found when checking a section's content before rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A text field is empty or whitespace only
    #[error("{section} section: field '{field}' is empty")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    /// A list field has no entries
    #[error("{section} section: '{field}' has no entries")]
    EmptyCollection {
        section: &'static str,
        field: &'static str,
    },

    /// More than one raise option is flagged as recommended
    #[error("raise section: {count} options are flagged recommended, at most one is allowed")]
    MultipleRecommended { count: usize },
}

impl ValidationError {
    /// Create a missing field error
    pub fn missing(section: &'static str, field: &'static str) -> Self {
        Self::MissingField { section, field }
    }

    /// Create an empty collection error
    pub fn empty(section: &'static str, field: &'static str) -> Self {
        Self::EmptyCollection { section, field }
    }

    /// Name of the field at fault
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } | Self::EmptyCollection { field, .. } => *field,
            Self::MultipleRecommended { .. } => "options",
        }
    }
}

//! Domain error types
//!
//! This module defines the error hierarchy for Neutralizer.
//! Errors are domain-specific and don't expose third-party types to callers.

use thiserror::Error;

/// Main Neutralizer error type
///
/// Configuration and template errors are fatal for a run and are reported
/// before any purge or export touches the filesystem. Export errors are
/// recovered per item by the engine and recorded in the run summary.
#[derive(Debug, Error)]
pub enum NeutralizerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Path template errors (unknown placeholder, unbalanced braces)
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Assembly manifest errors
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// A single export failed
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while compiling a path expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder that does not name a metadata field
    #[error("unknown placeholder '{{{name}}}' in expression '{expression}'")]
    UnknownPlaceholder { name: String, expression: String },

    /// `{` without a closing `}`
    #[error("unclosed '{{' at offset {offset} in expression '{expression}'")]
    UnclosedPlaceholder { offset: usize, expression: String },

    /// Stray `}` that is not escaped as `}}`
    #[error("single '}}' at offset {offset} in expression '{expression}'")]
    UnmatchedBrace { offset: usize, expression: String },

    /// `{}` with no field name
    #[error("empty placeholder at offset {offset} in expression '{expression}'")]
    EmptyPlaceholder { offset: usize, expression: String },
}

impl From<std::io::Error> for NeutralizerError {
    fn from(err: std::io::Error) -> Self {
        NeutralizerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NeutralizerError {
    fn from(err: serde_json::Error) -> Self {
        NeutralizerError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for NeutralizerError {
    fn from(err: toml::de::Error) -> Self {
        NeutralizerError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<quick_xml::DeError> for NeutralizerError {
    fn from(err: quick_xml::DeError) -> Self {
        NeutralizerError::Configuration(format!("XML parse error: {err}"))
    }
}

impl From<csv::Error> for NeutralizerError {
    fn from(err: csv::Error) -> Self {
        NeutralizerError::Export(format!("CSV write failed: {err}"))
    }
}

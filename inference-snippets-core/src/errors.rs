//! Error types for inference-snippets.
//!
//! Snippet generation itself is total: an unrecognized task yields an empty
//! snippet list rather than an error. Errors only arise at the boundary where
//! model descriptors and render options are read from external JSON.

use thiserror::Error;

use crate::format::PythonFormatError;

/// The main error type for inference-snippets operations.
#[derive(Error, Debug)]
pub enum SnippetError {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A structured value could not be rendered as a literal.
    #[error(transparent)]
    Format(#[from] PythonFormatError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SnippetError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using SnippetError.
pub type Result<T> = std::result::Result<T, SnippetError>;

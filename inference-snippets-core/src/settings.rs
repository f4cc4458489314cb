//! Render options.
//!
//! This module provides the `RenderOptions` type that callers use to tune the
//! generated snippets: streaming vs. blocking chat calls, generation
//! parameters, and custom chat messages.

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_STREAMING;
use crate::errors::{Result, SnippetError};
use crate::messages::ChatMessage;

/// Options for snippet rendering.
///
/// Every field has a default; options that a category has no use for are
/// ignored (e.g. `streaming` outside conversational categories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit a streaming loop instead of a single blocking call.
    pub streaming: bool,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Top-p (nucleus) sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// Messages to show instead of the category's sample conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<ChatMessage>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            streaming: DEFAULT_STREAMING,
            max_tokens: None,
            temperature: None,
            top_p: None,
            messages: None,
        }
    }
}

impl RenderOptions {
    /// Create options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON and validate them.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or [`validate`](Self::validate) fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Set streaming.
    #[must_use]
    pub fn streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// Set max tokens.
    #[must_use]
    pub fn max_tokens(mut self, tokens: u64) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set temperature.
    #[must_use]
    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set top-p.
    #[must_use]
    pub fn top_p(mut self, p: f64) -> Self {
        self.top_p = Some(p);
        self
    }

    /// Set the messages shown in conversational snippets.
    #[must_use]
    pub fn messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Check that the options describe a renderable request.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::Configuration`] for a zero token budget, a
    /// non-finite sampling parameter, or an empty message list.
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens == Some(0) {
            return Err(SnippetError::configuration("max_tokens must be positive"));
        }
        if self.temperature.is_some_and(|t| !t.is_finite()) {
            return Err(SnippetError::configuration("temperature must be finite"));
        }
        if self.top_p.is_some_and(|p| !p.is_finite()) {
            return Err(SnippetError::configuration("top_p must be finite"));
        }
        if self.messages.as_ref().is_some_and(Vec::is_empty) {
            return Err(SnippetError::configuration("messages must not be empty"));
        }
        Ok(())
    }
}

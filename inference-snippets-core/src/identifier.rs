//! Model identifiers and descriptors.
//!
//! A [`ModelDescriptor`] is the minimal metadata the engine needs about a
//! model: its Hub identifier, its pipeline tag, and its descriptive tags.
//! The shape matches the model JSON returned by the Hub API, so descriptors
//! can be deserialized from it directly.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::task::{classify, TaskCategory};

/// Tag marking a model that expects chat-style turn exchanges.
pub const CONVERSATIONAL_TAG: &str = "conversational";

/// Type-safe wrapper for a model identifier (`owner/name`).
///
/// The identifier is opaque: it is substituted verbatim into rendered code
/// and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// Create from an existing string.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The owner part of `owner/name`, if the ID has one.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.0.split_once('/').map(|(owner, _)| owner)
    }

    /// The name part of `owner/name` (the whole ID when there is no owner).
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.split_once('/').map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Minimal model metadata used to select and fill snippet templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Hub identifier, e.g. `meta-llama/Llama-3.1-8B-Instruct`.
    pub id: ModelId,
    /// Pipeline tag, e.g. `text-generation`.
    #[serde(rename = "pipeline_tag", default, skip_serializing_if = "Option::is_none")]
    pub task_tag: Option<String>,
    /// Descriptive tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Inference status reported by the Hub.
    #[serde(default)]
    pub inference: String,
}

impl ModelDescriptor {
    /// Create a descriptor with no pipeline tag and no tags.
    #[must_use]
    pub fn new(id: impl Into<ModelId>) -> Self {
        Self {
            id: id.into(),
            task_tag: None,
            tags: Vec::new(),
            inference: String::new(),
        }
    }

    /// Parse a descriptor from Hub model JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has no `id`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the pipeline tag.
    #[must_use]
    pub fn with_task(mut self, task_tag: impl Into<String>) -> Self {
        self.task_tag = Some(task_tag.into());
        self
    }

    /// Add a descriptive tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the inference status.
    #[must_use]
    pub fn with_inference(mut self, inference: impl Into<String>) -> Self {
        self.inference = inference.into();
        self
    }

    /// Check whether the model carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check whether the model carries the conversational marker.
    #[must_use]
    pub fn is_conversational(&self) -> bool {
        self.has_tag(CONVERSATIONAL_TAG)
    }

    /// Classify this model's task.
    #[must_use]
    pub fn category(&self) -> TaskCategory {
        classify(self.task_tag.as_deref(), &self.tags)
    }
}

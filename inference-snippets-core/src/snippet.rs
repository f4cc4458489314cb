//! Snippets and the generator trait.
//!
//! A [`SnippetGenerator`] owns a static template table for one target
//! language. Classification and orchestration are shared: the provided
//! [`SnippetGenerator::generate`] classifies the model, looks up the
//! category's templates and renders each of them in table order.

use serde::{Deserialize, Serialize};

use crate::identifier::ModelDescriptor;
use crate::settings::RenderOptions;
use crate::task::TaskCategory;

/// Client approach a snippet demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    /// High-level SDK client.
    Sdk,
    /// Raw HTTP request.
    Http,
}

impl ClientKind {
    /// Stable name (`"sdk"` or `"http"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::Sdk => "sdk",
            ClientKind::Http => "http",
        }
    }

    /// Python library this client approach renders.
    #[must_use]
    pub fn python_library(&self) -> &'static str {
        match self {
            ClientKind::Sdk => "huggingface_hub",
            ClientKind::Http => "requests",
        }
    }
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered code example.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snippet {
    /// Client approach.
    pub client: ClientKind,
    /// Full rendered code.
    pub content: String,
}

impl Snippet {
    /// Create a snippet.
    #[must_use]
    pub fn new(client: ClientKind, content: impl Into<String>) -> Self {
        Self {
            client,
            content: content.into(),
        }
    }
}

/// Renders the content of one snippet.
///
/// Arguments are the model, the token (substituted verbatim) and the options.
pub type TemplateProducer = fn(&ModelDescriptor, &str, &RenderOptions) -> String;

/// A producer registered for one client approach.
#[derive(Clone, Copy)]
pub struct TemplateEntry {
    /// Client approach of the produced snippet.
    pub client: ClientKind,
    /// Producer function.
    pub render: TemplateProducer,
}

impl std::fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEntry")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl TemplateEntry {
    /// Create an entry.
    #[must_use]
    pub const fn new(client: ClientKind, render: TemplateProducer) -> Self {
        Self { client, render }
    }

    /// Render this entry into a snippet.
    #[must_use]
    pub fn produce(
        &self,
        model: &ModelDescriptor,
        token: &str,
        options: &RenderOptions,
    ) -> Snippet {
        Snippet::new(self.client, (self.render)(model, token, options))
    }
}

/// Snippet generator for one target language.
pub trait SnippetGenerator: Send + Sync {
    /// Language name (e.g. `python`).
    fn language(&self) -> &'static str;

    /// Templates for `category`, in output order.
    ///
    /// An empty slice means no example is available.
    fn templates(&self, category: TaskCategory) -> &'static [TemplateEntry];

    /// Render every applicable snippet for `model`.
    ///
    /// Returns an empty list when the model's task has no templates.
    fn generate(
        &self,
        model: &ModelDescriptor,
        token: &str,
        options: Option<&RenderOptions>,
    ) -> Vec<Snippet> {
        let defaults = RenderOptions::default();
        let options = options.unwrap_or(&defaults);
        let category = model.category();
        let templates = self.templates(category);

        #[cfg(feature = "tracing-integration")]
        tracing::debug!(
            language = self.language(),
            model = %model.id,
            category = %category,
            count = templates.len(),
            "rendering snippets"
        );

        templates
            .iter()
            .map(|entry| entry.produce(model, token, options))
            .collect()
    }
}

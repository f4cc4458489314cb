//! # inference-snippets-python
//!
//! Python snippets for the hosted Inference API.
//!
//! Two client approaches are rendered:
//!
//! - **sdk**: `huggingface_hub.InferenceClient`
//! - **http**: plain `requests` calls against `API_URL`
//!
//! Conversational models get a single sdk chat-completion snippet;
//! speech recognition, document question answering, image-to-image and
//! text-to-image get an sdk snippet followed by an http snippet; the remaining
//! supported tasks get an http snippet only.
//!
//! ## Feature Flags
//!
//! - `tracing-integration`: Debug events for tasks without templates
//! - `full`: Enable all optional features
//!
//! ## Example
//!
//! ```rust
//! use inference_snippets_core::{ClientKind, ModelDescriptor};
//! use inference_snippets_python::python_snippets;
//!
//! let model = ModelDescriptor::new("openai/whisper-large-v3-turbo")
//!     .with_task("automatic-speech-recognition");
//!
//! let snippets = python_snippets(&model, "hf_xxx", None);
//! assert_eq!(snippets.len(), 2);
//! assert_eq!(snippets[0].client, ClientKind::Sdk);
//! assert!(snippets[1].content.starts_with("import requests"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod registry;
pub mod templates;

use inference_snippets_core::{ModelDescriptor, RenderOptions, Snippet, SnippetGenerator};

pub use registry::PythonSnippets;

/// Render the Python snippets for `model`.
///
/// Shorthand for [`PythonSnippets::generate`].
#[must_use]
pub fn python_snippets(
    model: &ModelDescriptor,
    token: &str,
    options: Option<&RenderOptions>,
) -> Vec<Snippet> {
    PythonSnippets.generate(model, token, options)
}

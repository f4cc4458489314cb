//! # inference-snippets
//!
//! Ready-to-run usage examples for calling the hosted Inference API, rendered
//! from a model's Hub metadata.
//!
//! Given a model identifier, its pipeline tag and its tags, [`generate`]
//! classifies the model into a [`TaskCategory`], picks the templates that apply
//! to it and renders each one into a [`Snippet`]. Output is deterministic:
//! the same inputs always render the same bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use inference_snippets::prelude::*;
//!
//! let model = ModelDescriptor::new("black-forest-labs/FLUX.1-schnell")
//!     .with_task("text-to-image");
//!
//! let snippets = inference_snippets::generate(&model, "hf_xxx", None);
//!
//! assert_eq!(snippets.len(), 2);
//! assert_eq!(snippets[0].client, ClientKind::Sdk);
//! assert_eq!(snippets[1].client, ClientKind::Http);
//! ```
//!
//! ## Options
//!
//! Conversational models honor [`RenderOptions`]:
//!
//! ```rust
//! use inference_snippets::prelude::*;
//!
//! let model = ModelDescriptor::new("meta-llama/Llama-3.1-8B-Instruct")
//!     .with_task("text-generation")
//!     .with_tag("conversational");
//!
//! let options = RenderOptions::new().streaming(false).temperature(0.5);
//! let snippets = inference_snippets::generate(&model, "hf_xxx", Some(&options));
//!
//! assert!(snippets[0].content.contains("temperature=0.5"));
//! assert!(snippets[0].content.ends_with("print(completion.choices[0].message)"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|--------|
//! | `tracing-integration` | Debug events from classification and rendering | ❌ |
//! | `full` | All features | ❌ |
//!
//! ## Architecture
//!
//! - [`inference_snippets_core`] - Descriptors, classification, defaults and the generator seam
//! - [`inference_snippets_python`] - Python templates (`huggingface_hub` and `requests`)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// ============================================================================
// Crate Re-exports
// ============================================================================

/// Descriptors, classification, defaults and errors.
pub use inference_snippets_core as core;

/// Python templates.
pub use inference_snippets_python as python;

// ============================================================================
// Core Type Re-exports (Flat)
// ============================================================================

// Errors
pub use inference_snippets_core::{Result, SnippetError};

// Model metadata
pub use inference_snippets_core::{ModelDescriptor, ModelId, CONVERSATIONAL_TAG};

// Classification
pub use inference_snippets_core::{classify, InputModality, TaskCategory};

// Options
pub use inference_snippets_core::{
    ChatContent, ChatContentPart, ChatMessage, ChatRole, RenderOptions,
};

// Snippets
pub use inference_snippets_core::{ClientKind, Snippet, SnippetGenerator, TemplateEntry};

// Generators
pub use inference_snippets_python::PythonSnippets;

// ============================================================================
// Entry Points
// ============================================================================

/// Render every snippet that applies to `model`.
///
/// The token is substituted verbatim. `None` options use the defaults
/// (streaming on, 500 max tokens, sample messages). Models whose task has no
/// template yield an empty list.
#[must_use]
pub fn generate(
    model: &ModelDescriptor,
    token: &str,
    options: Option<&RenderOptions>,
) -> Vec<Snippet> {
    PythonSnippets.generate(model, token, options)
}

/// Render snippets from raw Hub JSON.
///
/// `model_json` is a Hub model object (`id`, `pipeline_tag`, `tags`,
/// `inference`). `options_json`, when given, is parsed and validated as
/// [`RenderOptions`].
///
/// # Errors
///
/// Returns [`SnippetError::Serialization`] if either document does not parse,
/// or [`SnippetError::Configuration`] if the options are out of range.
pub fn generate_from_json(
    model_json: &str,
    token: &str,
    options_json: Option<&str>,
) -> Result<Vec<Snippet>> {
    let model = ModelDescriptor::from_json(model_json)?;
    let options = options_json.map(RenderOptions::from_json).transpose()?;
    Ok(generate(&model, token, options.as_ref()))
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for common imports.
///
/// ```rust
/// use inference_snippets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::generate;
    pub use inference_snippets_core::prelude::*;
    pub use inference_snippets_python::PythonSnippets;
}

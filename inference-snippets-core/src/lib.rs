//! # inference-snippets-core
//!
//! Core types, task classification, and sample values for the
//! inference-snippets engine.
//!
//! This crate provides the language-independent half of snippet generation:
//!
//! - **Identifiers**: [`ModelDescriptor`] and [`ModelId`], matching Hub model JSON
//! - **Tasks**: the closed [`TaskCategory`] set and the [`classify`] rules
//! - **Defaults**: sample files, prompts and budgets rendered into snippets
//! - **Resolver**: merging [`RenderOptions`] with those defaults
//! - **Messages**: chat messages for conversational snippets
//! - **Format**: Python literal rendering of structured values
//! - **Snippets**: [`Snippet`], [`ClientKind`] and the [`SnippetGenerator`] seam
//!
//! ## Feature Flags
//!
//! - `tracing-integration`: Enable tracing instrumentation
//! - `full`: Enable all optional features
//!
//! ## Example
//!
//! ```rust
//! use inference_snippets_core::{ModelDescriptor, TaskCategory};
//!
//! let model = ModelDescriptor::new("meta-llama/Llama-3.1-8B-Instruct")
//!     .with_task("text-generation")
//!     .with_tag("conversational");
//!
//! assert_eq!(model.category(), TaskCategory::ConversationalText);
//! assert!(model.category().is_conversational());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod defaults;
pub mod errors;
pub mod format;
pub mod identifier;
pub mod messages;
pub mod resolver;
pub mod settings;
pub mod snippet;
pub mod task;

// Re-exports for convenience
pub use errors::{Result, SnippetError};
pub use format::{
    format_as_python, format_as_python_with_options, PythonFormatError, PythonFormatOptions,
};
pub use identifier::{ModelDescriptor, ModelId, CONVERSATIONAL_TAG};
pub use messages::{ChatContent, ChatContentPart, ChatMessage, ChatRole, ImageUrl};
pub use resolver::ConversationParams;
pub use settings::RenderOptions;
pub use snippet::{ClientKind, Snippet, SnippetGenerator, TemplateEntry, TemplateProducer};
pub use task::{classify, InputModality, TaskCategory};

/// Prelude module for common imports.
///
/// ```rust
/// use inference_snippets_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::errors::{Result, SnippetError};
    pub use crate::identifier::{ModelDescriptor, ModelId};
    pub use crate::messages::{ChatContent, ChatContentPart, ChatMessage, ChatRole};
    pub use crate::settings::RenderOptions;
    pub use crate::snippet::{ClientKind, Snippet, SnippetGenerator};
    pub use crate::task::{classify, TaskCategory};
}

//! Parameter resolution.
//!
//! Merges caller options with the defaults in [`crate::defaults`] to produce
//! the concrete values a template needs.

use crate::defaults::{CHAT_PROMPT, DEFAULT_MAX_TOKENS, VISION_IMAGE_URL, VISION_PROMPT};
use crate::messages::{ChatContent, ChatContentPart, ChatMessage};
use crate::settings::RenderOptions;
use crate::task::TaskCategory;

/// Values for a conversational snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationParams {
    /// Messages to send.
    pub messages: Vec<ChatMessage>,
    /// Whether to render the streaming shape.
    pub streaming: bool,
    /// Generation keyword arguments, in rendering order.
    pub generation: Vec<(&'static str, String)>,
}

impl ConversationParams {
    /// Resolve conversation values for `category` under `options`.
    #[must_use]
    pub fn resolve(category: TaskCategory, options: &RenderOptions) -> Self {
        Self {
            messages: options
                .messages
                .clone()
                .unwrap_or_else(|| default_messages(category)),
            streaming: options.streaming,
            generation: generation_config(options),
        }
    }
}

/// Sample conversation for a category.
///
/// Vision models get a two-part content list: the instruction first, then the
/// image reference.
#[must_use]
pub fn default_messages(category: TaskCategory) -> Vec<ChatMessage> {
    let content = match category {
        TaskCategory::ConversationalVision => ChatContent::parts(vec![
            ChatContentPart::text(VISION_PROMPT),
            ChatContentPart::image_url(VISION_IMAGE_URL),
        ]),
        _ => ChatContent::text(CHAT_PROMPT),
    };
    vec![ChatMessage::user(content)]
}

/// Effective token ceiling.
#[must_use]
pub fn max_tokens(options: &RenderOptions) -> u64 {
    options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
}

/// Generation keyword arguments: `temperature`, `max_tokens`, `top_p`,
/// skipping optional ones that are unset or not finite.
#[must_use]
pub fn generation_config(options: &RenderOptions) -> Vec<(&'static str, String)> {
    let mut config = Vec::with_capacity(3);
    if let Some(temperature) = finite(options.temperature) {
        config.push(("temperature", temperature.to_string()));
    }
    config.push(("max_tokens", max_tokens(options).to_string()));
    if let Some(top_p) = finite(options.top_p) {
        config.push(("top_p", top_p.to_string()));
    }
    config
}

// Python has no literal for NaN or infinity.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

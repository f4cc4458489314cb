//! Chat messages embedded in conversational snippets.
//!
//! These types mirror the chat-completion message format: a role plus either
//! plain text or an ordered list of multi-modal parts.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Message author role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System instructions.
    System,
    /// End user.
    #[default]
    User,
    /// Model reply.
    Assistant,
}

impl ChatRole {
    /// Wire name of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role.
    pub role: ChatRole,
    /// Message content.
    pub content: ChatContent,
}

impl ChatMessage {
    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<ChatContent>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<ChatContent>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<ChatContent>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    /// JSON form with keys in wire order (`role`, then `content`).
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "role": self.role.as_str(),
            "content": self.content.to_value(),
        })
    }
}

/// Message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatContent {
    /// Plain text content.
    Text(String),
    /// Multi-part content.
    Parts(Vec<ChatContentPart>),
}

impl ChatContent {
    /// Create text content.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create multi-part content.
    #[must_use]
    pub fn parts(parts: Vec<ChatContentPart>) -> Self {
        Self::Parts(parts)
    }

    /// Get as text if this is text content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Parts(_) => None,
        }
    }

    /// JSON form with keys in wire order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Parts(parts) => {
                Value::Array(parts.iter().map(ChatContentPart::to_value).collect())
            }
        }
    }
}

impl From<String> for ChatContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ChatContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<ChatContentPart>> for ChatContent {
    fn from(parts: Vec<ChatContentPart>) -> Self {
        Self::Parts(parts)
    }
}

/// Individual content part in a multi-part message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatContentPart {
    /// Text content.
    Text {
        /// The text.
        text: String,
    },
    /// Image referenced by URL.
    ImageUrl {
        /// The image reference.
        image_url: ImageUrl,
    },
}

impl ChatContentPart {
    /// Create text content.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text { text: s.into() }
    }

    /// Create image content from URL.
    #[must_use]
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }

    /// JSON form with the `type` discriminator first.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text { text } => json!({
                "type": "text",
                "text": text,
            }),
            Self::ImageUrl { image_url } => json!({
                "type": "image_url",
                "image_url": {
                    "url": image_url.url,
                },
            }),
        }
    }
}

/// Image reference by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// The URL.
    pub url: String,
}

/// JSON array of messages with keys in wire order.
#[must_use]
pub fn messages_to_value(messages: &[ChatMessage]) -> Value {
    Value::Array(messages.iter().map(ChatMessage::to_value).collect())
}

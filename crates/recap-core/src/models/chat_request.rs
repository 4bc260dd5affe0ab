//! Provider-ready request value in the chat-completions message shape.

use serde::{Deserialize, Serialize};

use crate::constants::IMAGE_DETAIL;

/// A full request: the ordered message list sent to the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// One part of a multi-modal message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    pub detail: String,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: IMAGE_DETAIL.to_string(),
            },
        }
    }
}

impl ChatRequest {
    /// A request holding one user message.
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
        }
    }

    /// Iterate all content parts across messages.
    pub fn parts(&self) -> impl Iterator<Item = &ContentPart> {
        self.messages.iter().flat_map(|m| m.content.iter())
    }
}

//! Conversation history and provider message types

use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversation turn as recorded by the agent framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub role: MessageRole,
    /// Absent content is treated as an empty string everywhere
    #[serde(default)]
    pub content: Option<String>,
}

impl HistoryItem {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Content with the empty-string default applied
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Chat message in the shape completion APIs expect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<&HistoryItem> for ChatMessage {
    fn from(item: &HistoryItem) -> Self {
        Self {
            role: item.role,
            content: item.content_or_empty().to_string(),
        }
    }
}

/// Result of converting history for a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Messages {
    /// One message per history entry, in order
    Structured(Vec<ChatMessage>),
    /// Few-shot demonstration flattened to plain text
    Demonstration(String),
}

impl Messages {
    pub fn into_structured(self) -> Option<Vec<ChatMessage>> {
        match self {
            Messages::Structured(messages) => Some(messages),
            Messages::Demonstration(_) => None,
        }
    }
}

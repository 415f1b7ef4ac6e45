//! Chat message types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    /// Message typed by the visitor.
    User,
    /// Reply (or placeholder) from the assistant.
    Assistant,
}

/// Stable identifier of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub author: Author,
    pub text: String,
    /// True while this is an assistant placeholder awaiting its reply.
    pub pending: bool,
    /// Timestamp when the message was appended (RFC 3339).
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::build(Author::User, text.into(), false)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::build(Author::Assistant, text.into(), false)
    }

    /// A "typing" indicator that will be replaced in place.
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::build(Author::Assistant, text.into(), true)
    }

    fn build(author: Author, text: String, pending: bool) -> Self {
        Self {
            id: MessageId::new(),
            author,
            text,
            pending,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

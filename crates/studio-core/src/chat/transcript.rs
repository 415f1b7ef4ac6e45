//! Append-only chat transcript.

use serde::Serialize;

use super::message::{Author, ChatMessage, MessageId};
use crate::error::{Result, StudioError};

/// Ordered conversation history for one page session.
///
/// Entries are never removed or reordered. The only in-place edit allowed is
/// resolving a pending assistant placeholder, once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Appends a message and returns a reference to it.
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        // Safe to index because we just pushed an element
        &self.messages[self.messages.len() - 1]
    }

    /// Replaces the text of a pending placeholder and marks it resolved.
    ///
    /// Fails if `id` is unknown, is not an assistant entry, or was already
    /// resolved.
    pub fn resolve_placeholder(
        &mut self,
        id: MessageId,
        text: impl Into<String>,
    ) -> Result<&ChatMessage> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StudioError::internal(format!("no transcript entry {id}")))?;

        if message.author != Author::Assistant || !message.pending {
            return Err(StudioError::internal(format!(
                "transcript entry {id} is not a pending placeholder"
            )));
        }

        message.text = text.into();
        message.pending = false;
        Ok(&*message)
    }

    /// Number of placeholders still awaiting a reply.
    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.pending).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::user("hi"));
        transcript.push(ChatMessage::assistant("hello"));

        let texts: Vec<_> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["hi", "hello"]);
    }

    #[test]
    fn test_resolve_placeholder_once() {
        let mut transcript = Transcript::new();
        let id = transcript.push(ChatMessage::placeholder("Typing…")).id;

        let resolved = transcript.resolve_placeholder(id, "Hello!").expect("pending");
        assert_eq!(resolved.text, "Hello!");
        assert!(!resolved.pending);

        assert!(transcript.resolve_placeholder(id, "again").is_err());
        assert_eq!(transcript.get(id).map(|m| m.text.as_str()), Some("Hello!"));
    }

    #[test]
    fn test_user_message_cannot_be_resolved() {
        let mut transcript = Transcript::new();
        let id = transcript.push(ChatMessage::user("price")).id;
        assert!(transcript.resolve_placeholder(id, "nope").is_err());
        assert_eq!(transcript.get(id).map(|m| m.text.as_str()), Some("price"));
    }
}

//! Presentation port for the chat panel.

use super::message::{ChatMessage, MessageId};

/// DOM operations the chat panel drives.
pub trait ChatSurface: Send + Sync {
    /// Renders a new transcript entry at the bottom of the message body.
    fn append_message(&self, message: &ChatMessage);

    /// Replaces the text of an already rendered entry.
    fn update_message(&self, id: MessageId, text: &str);

    /// Empties the text input.
    fn clear_input(&self);

    /// Scrolls the message body to its most recent entry.
    fn scroll_to_latest(&self);

    /// Shows or hides the panel (including its `aria-hidden` state).
    fn set_panel_visible(&self, visible: bool);
}

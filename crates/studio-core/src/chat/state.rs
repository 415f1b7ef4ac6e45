//! Per-message send state machine and panel visibility.
//!
//! ```text
//! Idle ──submit(non-blank)──▶ UserEchoed ──placeholder + request──▶ Pending
//!   ▲                                                                  │
//!   └──────────────── reply or degraded text replaces placeholder ◀───┘
//! ```
//!
//! `UserEchoed` only exists inside [`ChatState::begin_submit`]; callers observe
//! `Idle` before the call and `Pending` after it. A second submit while
//! `Pending` is rejected with [`SubmitOutcome::Busy`] and leaves the
//! transcript untouched.

use serde::Serialize;

use super::message::{ChatMessage, MessageId};
use super::transcript::Transcript;
use crate::error::{Result, StudioError};

/// Text of the placeholder shown while a reply is outstanding.
pub const PLACEHOLDER_TEXT: &str = "Typing… ✨";

/// Canned reply used for every failed or unusable response.
pub const DEGRADED_REPLY: &str = "Assistant unavailable. Try 'price' or 'book'.";

/// Where the current exchange stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ChatPhase {
    Idle,
    Pending { placeholder: MessageId },
}

/// The request a successful submit asks the caller to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Trimmed user text, exactly as echoed.
    pub text: String,
    pub user_message: MessageId,
    pub placeholder: MessageId,
}

/// Result of [`ChatState::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened.
    Ignored,
    /// Another request is still pending; nothing happened.
    Busy,
    /// User message and placeholder were appended.
    Sent(OutboundMessage),
}

/// How a pending placeholder was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Replied { text: String },
    Degraded { text: String, cause: StudioError },
}

impl Resolution {
    /// The text now shown in place of the placeholder.
    pub fn text(&self) -> &str {
        match self {
            Self::Replied { text } | Self::Degraded { text, .. } => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Chat panel state owned by one panel instance.
#[derive(Debug, Clone)]
pub struct ChatState {
    transcript: Transcript,
    phase: ChatPhase,
    open: bool,
    placeholder_text: String,
    degraded_reply: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::with_texts(PLACEHOLDER_TEXT, DEGRADED_REPLY)
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with custom placeholder and degraded texts.
    pub fn with_texts(placeholder_text: impl Into<String>, degraded_reply: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::new(),
            phase: ChatPhase::Idle,
            open: false,
            placeholder_text: placeholder_text.into(),
            degraded_reply: degraded_reply.into(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, ChatPhase::Pending { .. })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn degraded_reply(&self) -> &str {
        &self.degraded_reply
    }

    /// Shows the panel. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Hides the panel. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Echoes the user's text and appends the placeholder.
    pub fn begin_submit(&mut self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.is_pending() {
            return SubmitOutcome::Busy;
        }

        let user_message = self.transcript.push(ChatMessage::user(text)).id;
        let placeholder = self
            .transcript
            .push(ChatMessage::placeholder(self.placeholder_text.clone()))
            .id;
        self.phase = ChatPhase::Pending { placeholder };

        SubmitOutcome::Sent(OutboundMessage {
            text: text.to_string(),
            user_message,
            placeholder,
        })
    }

    /// Settles the pending exchange with the endpoint's result.
    ///
    /// A blank reply counts as unusable and resolves to the degraded text, as
    /// does any error. Fails only if `placeholder` is not the pending entry.
    pub fn resolve(
        &mut self,
        placeholder: MessageId,
        result: Result<String>,
    ) -> Result<Resolution> {
        if self.phase != (ChatPhase::Pending { placeholder }) {
            return Err(StudioError::internal(format!(
                "placeholder {placeholder} is not pending"
            )));
        }

        let resolution = match result {
            Ok(reply) if !reply.trim().is_empty() => Resolution::Replied { text: reply },
            Ok(_) => Resolution::Degraded {
                text: self.degraded_reply.clone(),
                cause: StudioError::payload("reply is empty"),
            },
            Err(cause) => Resolution::Degraded {
                text: self.degraded_reply.clone(),
                cause,
            },
        };

        self.transcript
            .resolve_placeholder(placeholder, resolution.text())?;
        self.phase = ChatPhase::Idle;
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Author;

    fn sent(outcome: SubmitOutcome) -> OutboundMessage {
        match outcome {
            SubmitOutcome::Sent(out) => out,
            other => panic!("expected Sent, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_echoes_and_appends_placeholder() {
        let mut state = ChatState::new();
        let out = sent(state.begin_submit("  price  "));

        assert_eq!(out.text, "price");
        let messages = state.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, Author::User);
        assert_eq!(messages[0].text, "price");
        assert_eq!(messages[1].author, Author::Assistant);
        assert_eq!(messages[1].text, PLACEHOLDER_TEXT);
        assert!(messages[1].pending);
        assert_eq!(state.phase(), ChatPhase::Pending { placeholder: out.placeholder });
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut state = ChatState::new();
        assert_eq!(state.begin_submit(""), SubmitOutcome::Ignored);
        assert_eq!(state.begin_submit(" \t\n "), SubmitOutcome::Ignored);
        assert!(state.transcript().is_empty());
        assert_eq!(state.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_second_submit_while_pending_is_busy() {
        let mut state = ChatState::new();
        sent(state.begin_submit("book"));
        assert_eq!(state.begin_submit("hello?"), SubmitOutcome::Busy);
        assert_eq!(state.transcript().len(), 2);
    }

    #[test]
    fn test_success_replaces_placeholder() {
        let mut state = ChatState::new();
        let out = sent(state.begin_submit("hi"));

        let resolution = state
            .resolve(out.placeholder, Ok("Hi there!".to_string()))
            .expect("pending");
        assert!(!resolution.is_degraded());
        assert_eq!(state.transcript().last().map(|m| m.text.as_str()), Some("Hi there!"));
        assert_eq!(state.phase(), ChatPhase::Idle);
        assert_eq!(state.transcript().pending_count(), 0);
    }

    #[test]
    fn test_failure_and_blank_reply_degrade() {
        let mut state = ChatState::new();

        let out = sent(state.begin_submit("price"));
        let resolution = state
            .resolve(out.placeholder, Err(StudioError::http_status(503, "down")))
            .expect("pending");
        assert!(resolution.is_degraded());
        assert_eq!(resolution.text(), DEGRADED_REPLY);

        let out = sent(state.begin_submit("price again"));
        let resolution = state.resolve(out.placeholder, Ok("   ".into())).expect("pending");
        assert_eq!(resolution.text(), DEGRADED_REPLY);
        assert_eq!(state.transcript().len(), 4);
    }

    #[test]
    fn test_resolve_unknown_placeholder_fails() {
        let mut state = ChatState::new();
        let out = sent(state.begin_submit("hi"));
        state.resolve(out.placeholder, Ok("ok".into())).expect("pending");
        assert!(state.resolve(out.placeholder, Ok("late".into())).is_err());
    }

    #[test]
    fn test_open_close_toggle() {
        let mut state = ChatState::new();
        assert!(state.open());
        assert!(!state.open());
        assert!(state.close());
        assert!(!state.close());
    }
}

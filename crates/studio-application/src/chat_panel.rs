//! Chat panel controller.
//!
//! `submit` echoes the user's text and appends the placeholder synchronously,
//! then hands the request to a spawned task and returns. The task resolves the
//! placeholder when the endpoint settles.
//!
//! # Cancellation
//!
//! Each request carries a `CancellationToken`. Closing the panel (or dropping
//! the controller) cancels it; a cancelled request never writes to the
//! transcript or the surface. `close` resolves the orphaned placeholder to
//! the degraded reply itself so the transcript is never left pending.

use std::sync::{Arc, Mutex};

use studio_core::StudioError;
use studio_core::chat::{
    ChatEndpoint, ChatMessage, ChatPhase, ChatState, ChatSurface, MessageId, Resolution,
    SubmitOutcome, Transcript,
};
use studio_core::config::ChatSettings;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::lock;

/// What `submit` did, plus the task settling the request if one was issued.
#[derive(Debug)]
pub struct Submission {
    pub outcome: SubmitOutcome,
    /// Resolves to `Some` when this request resolved the placeholder, `None`
    /// when it was cancelled first.
    pub task: Option<JoinHandle<Option<Resolution>>>,
}

impl Submission {
    fn without_request(outcome: SubmitOutcome) -> Self {
        Self {
            outcome,
            task: None,
        }
    }

    /// Waits for the request to settle.
    pub async fn settled(self) -> Option<Resolution> {
        let task = self.task?;
        match task.await {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::warn!("[ChatPanel] Settle task did not complete: {}", e);
                None
            }
        }
    }
}

struct PanelInner {
    state: ChatState,
    in_flight: Option<CancellationToken>,
}

/// Controller for the chat panel.
pub struct ChatPanel {
    inner: Arc<Mutex<PanelInner>>,
    endpoint: Arc<dyn ChatEndpoint>,
    surface: Arc<dyn ChatSurface>,
}

impl ChatPanel {
    pub fn new(endpoint: Arc<dyn ChatEndpoint>, surface: Arc<dyn ChatSurface>) -> Self {
        Self::with_state(endpoint, surface, ChatState::new())
    }

    /// Uses the placeholder and degraded texts from the settings.
    pub fn from_settings(
        settings: &ChatSettings,
        endpoint: Arc<dyn ChatEndpoint>,
        surface: Arc<dyn ChatSurface>,
    ) -> Self {
        let state = ChatState::with_texts(
            settings.placeholder_text.clone(),
            settings.degraded_reply.clone(),
        );
        Self::with_state(endpoint, surface, state)
    }

    fn with_state(
        endpoint: Arc<dyn ChatEndpoint>,
        surface: Arc<dyn ChatSurface>,
        state: ChatState,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PanelInner {
                state,
                in_flight: None,
            })),
            endpoint,
            surface,
        }
    }

    pub fn transcript(&self) -> Transcript {
        lock(&self.inner).state.transcript().clone()
    }

    pub fn phase(&self) -> ChatPhase {
        lock(&self.inner).state.phase()
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.inner).state.is_pending()
    }

    pub fn is_open(&self) -> bool {
        lock(&self.inner).state.is_open()
    }

    /// Shows the panel and scrolls to the latest entry.
    ///
    /// Returns false if it was already open.
    pub fn open(&self) -> bool {
        let mut inner = lock(&self.inner);
        let opened = inner.state.open();
        if opened {
            tracing::debug!("[ChatPanel] Opened");
            self.surface.set_panel_visible(true);
        }
        self.surface.scroll_to_latest();
        opened
    }

    /// Hides the panel and cancels any outstanding request.
    ///
    /// Returns false if it was already closed.
    pub fn close(&self) -> bool {
        let mut inner = lock(&self.inner);
        self.cancel_in_flight(&mut inner);

        let closed = inner.state.close();
        if closed {
            tracing::debug!("[ChatPanel] Closed");
            self.surface.set_panel_visible(false);
        }
        closed
    }

    /// Submits the user's input.
    ///
    /// Must be called inside a tokio runtime. Blank input and submits while a
    /// request is pending change nothing, and the input field keeps its text.
    pub fn submit(&self, input: &str) -> Submission {
        let mut inner = lock(&self.inner);

        let outcome = inner.state.begin_submit(input);
        let outbound = match &outcome {
            SubmitOutcome::Sent(outbound) => outbound.clone(),
            SubmitOutcome::Ignored => {
                tracing::debug!("[ChatPanel] Ignoring blank input");
                return Submission::without_request(outcome);
            }
            SubmitOutcome::Busy => {
                tracing::debug!("[ChatPanel] Request still pending, rejecting submit");
                return Submission::without_request(outcome);
            }
        };

        for id in [outbound.user_message, outbound.placeholder] {
            if let Some(message) = inner.state.transcript().get(id) {
                self.render_append(message);
            }
            if id == outbound.user_message {
                self.surface.clear_input();
            }
        }

        let token = CancellationToken::new();
        inner.in_flight = Some(token.clone());
        drop(inner);

        tracing::info!("[ChatPanel] Sending message ({} chars)", outbound.text.chars().count());

        let task = tokio::spawn(settle(
            Arc::clone(&self.inner),
            Arc::clone(&self.endpoint),
            Arc::clone(&self.surface),
            outbound.text.clone(),
            outbound.placeholder,
            token,
        ));

        Submission {
            outcome,
            task: Some(task),
        }
    }

    fn render_append(&self, message: &ChatMessage) {
        self.surface.append_message(message);
        self.surface.scroll_to_latest();
    }

    fn cancel_in_flight(&self, inner: &mut PanelInner) {
        let Some(token) = inner.in_flight.take() else {
            return;
        };
        token.cancel();

        if let ChatPhase::Pending { placeholder } = inner.state.phase() {
            match inner.state.resolve(placeholder, Err(StudioError::Cancelled)) {
                Ok(resolution) => {
                    tracing::debug!("[ChatPanel] Cancelled pending request");
                    self.surface.update_message(placeholder, resolution.text());
                }
                Err(e) => tracing::warn!("[ChatPanel] Failed to resolve cancelled placeholder: {}", e),
            }
        }
    }
}

impl Drop for ChatPanel {
    fn drop(&mut self) {
        if let Some(token) = lock(&self.inner).in_flight.take() {
            token.cancel();
        }
    }
}

async fn settle(
    shared: Arc<Mutex<PanelInner>>,
    endpoint: Arc<dyn ChatEndpoint>,
    surface: Arc<dyn ChatSurface>,
    text: String,
    placeholder: MessageId,
    token: CancellationToken,
) -> Option<Resolution> {
    let result = tokio::select! {
        _ = token.cancelled() => return None,
        result = endpoint.send(&text) => result,
    };

    let mut inner = lock(&shared);
    if token.is_cancelled() {
        return None;
    }
    inner.in_flight = None;

    let resolution = match inner.state.resolve(placeholder, result) {
        Ok(resolution) => resolution,
        Err(e) => {
            tracing::warn!("[ChatPanel] Dropping stale reply: {}", e);
            return None;
        }
    };

    match &resolution {
        Resolution::Replied { .. } => tracing::info!("[ChatPanel] Reply received"),
        Resolution::Degraded { cause, .. } => {
            tracing::warn!("[ChatPanel] Endpoint failed, using degraded reply: {}", cause)
        }
    }

    surface.update_message(placeholder, resolution.text());
    surface.scroll_to_latest();
    Some(resolution)
}

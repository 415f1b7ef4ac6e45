//! Floating assistant widget controller.
//!
//! The host routes presses on the widget and document-level moves and
//! releases to [`AssistantWidget::handle_pointer`], and clicks on the widget
//! to [`AssistantWidget::click`]. A click opens the chat panel only when it
//! ends a tap, never when it ends a drag.

use std::sync::{Arc, Mutex};

use studio_core::pointer::{PointerDisposition, PointerEvent, PointerPhase};
use studio_core::widget::{DragBounds, DragController, DragUpdate, WidgetPosition, WidgetSurface};

use crate::chat_panel::ChatPanel;
use crate::lock;

pub struct AssistantWidget {
    surface: Arc<dyn WidgetSurface>,
    chat: Arc<ChatPanel>,
    margin: f64,
    controller: Mutex<DragController>,
}

impl AssistantWidget {
    /// Takes over the widget at its currently rendered position.
    pub fn new(surface: Arc<dyn WidgetSurface>, chat: Arc<ChatPanel>, margin: f64) -> Self {
        let origin = surface.widget_rect().origin();
        Self {
            controller: Mutex::new(DragController::new(WidgetPosition::new(origin.x, origin.y))),
            surface,
            chat,
            margin,
        }
    }

    pub fn position(&self) -> WidgetPosition {
        lock(&self.controller).position()
    }

    pub fn is_dragging(&self) -> bool {
        lock(&self.controller).is_dragging()
    }

    /// Bounds for the current viewport and rendered widget size.
    pub fn bounds(&self) -> DragBounds {
        DragBounds::new(
            self.surface.viewport(),
            self.surface.widget_rect().size(),
            self.margin,
        )
    }

    /// Dispatches a normalized pointer event.
    ///
    /// `Down` must only be routed here for presses on the widget; moves and
    /// releases are routed from the whole document.
    pub fn handle_pointer(&self, event: &PointerEvent) -> PointerDisposition {
        match event.phase {
            PointerPhase::Down => {
                self.press(event);
                PointerDisposition::Ignored
            }
            PointerPhase::Move => self.drag(event).disposition(),
            PointerPhase::Up | PointerPhase::Cancel => {
                self.release();
                PointerDisposition::Ignored
            }
        }
    }

    /// Starts a drag session from a press on the widget.
    pub fn press(&self, event: &PointerEvent) {
        let rect = self.surface.widget_rect();
        let mut controller = lock(&self.controller);
        let session = controller.start_drag(event, rect);
        tracing::debug!(
            "[AssistantWidget] Drag started ({:?}), offset {:?}",
            event.source,
            session.offset
        );
        self.surface.set_widget_transitions(false);
    }

    /// Follows the pointer while a session is active.
    pub fn drag(&self, event: &PointerEvent) -> DragUpdate {
        let bounds = self.bounds();
        let mut controller = lock(&self.controller);
        let update = controller.update_drag(event, &bounds);
        if let DragUpdate::Moved(position) = update {
            self.surface.place_widget(position);
        }
        update
    }

    /// Ends the session, wherever the release happened.
    pub fn release(&self) -> bool {
        let ended = lock(&self.controller).end_drag();
        if ended {
            tracing::debug!("[AssistantWidget] Drag ended at {:?}", self.position());
            self.surface.set_widget_transitions(true);
        }
        ended
    }

    /// Handles a click on the widget. Returns true when it opened the chat.
    pub fn click(&self) -> bool {
        if !lock(&self.controller).is_tap() {
            tracing::debug!("[AssistantWidget] Click ended a drag, not opening chat");
            return false;
        }
        self.chat.open();
        true
    }

    /// Keeps the widget inside the viewport after a resize.
    pub fn on_viewport_resize(&self) -> WidgetPosition {
        let bounds = self.bounds();
        let mut controller = lock(&self.controller);
        let before = controller.position();
        let after = controller.reclamp(&bounds);
        if after != before {
            self.surface.place_widget(after);
        }
        after
    }
}

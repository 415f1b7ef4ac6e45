//! Drag tracking for the floating assistant widget.
//!
//! [`DragController`] owns the widget's position and at most one
//! [`DragSession`]. It consumes normalized [`PointerEvent`]s only.
//!
//! # Invariants
//!
//! 1. At most one session is active. A press while a session is already
//!    active replaces the offset and keeps the session active.
//! 2. Every applied position satisfies the [`DragBounds`] in effect when the
//!    move was processed.
//! 3. A release closes the session no matter where it happened; the host must
//!    route document-level releases here, not just releases over the widget.
//! 4. A click is a tap only if no move changed the position since the last
//!    press. A drag release therefore never opens the chat panel.

use crate::geometry::{Point, Rect};
use crate::pointer::{PointerDisposition, PointerEvent};

use super::position::{DragBounds, WidgetPosition};

/// Transient state alive between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position relative to the widget's top-left at press time.
    pub offset: Point,
}

/// Result of feeding a move into the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// No session is active; the move belongs to someone else.
    Idle,
    /// The widget moved to a new clamped position.
    Moved(WidgetPosition),
    /// A session is active but the clamped position did not change.
    Unchanged(WidgetPosition),
}

impl DragUpdate {
    /// Moves during a session are consumed so the page does not scroll or
    /// select text under the finger.
    pub fn disposition(&self) -> PointerDisposition {
        match self {
            Self::Idle => PointerDisposition::Ignored,
            Self::Moved(_) | Self::Unchanged(_) => PointerDisposition::Consumed,
        }
    }

    pub fn position(&self) -> Option<WidgetPosition> {
        match self {
            Self::Idle => None,
            Self::Moved(p) | Self::Unchanged(p) => Some(*p),
        }
    }
}

/// Owns the widget position and the drag session lifecycle.
#[derive(Debug, Clone)]
pub struct DragController {
    session: Option<DragSession>,
    position: WidgetPosition,
    /// Set once a move changes the position; cleared by the next press or
    /// consumed by [`is_tap`](Self::is_tap).
    moved_since_press: bool,
}

impl DragController {
    /// Creates a controller with the widget at `initial`.
    pub fn new(initial: WidgetPosition) -> Self {
        Self {
            session: None,
            position: initial,
            moved_since_press: false,
        }
    }

    pub fn position(&self) -> WidgetPosition {
        self.position
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Transitions are suppressed for exactly the lifetime of a session.
    pub fn transitions_suppressed(&self) -> bool {
        self.is_dragging()
    }

    /// Opens (or re-opens) a session from a press on the widget.
    ///
    /// `element_rect` is the widget's rendered bounding box at press time.
    pub fn start_drag(&mut self, event: &PointerEvent, element_rect: Rect) -> &DragSession {
        let offset = event.position.offset_from(element_rect.origin());
        if self.session.is_some() {
            tracing::debug!("[DragController] press during active session, resetting offset");
        }
        self.moved_since_press = false;
        self.session.insert(DragSession { offset })
    }

    /// Applies a move if a session is active.
    pub fn update_drag(&mut self, event: &PointerEvent, bounds: &DragBounds) -> DragUpdate {
        let Some(session) = self.session else {
            return DragUpdate::Idle;
        };

        let candidate = event.position.offset_from(session.offset);
        let next = bounds.clamp(candidate);

        if next == self.position {
            return DragUpdate::Unchanged(next);
        }

        self.position = next;
        self.moved_since_press = true;
        DragUpdate::Moved(next)
    }

    /// Closes the active session. Returns false when there was none.
    pub fn end_drag(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Decides whether a click on the widget is a tap, consuming the
    /// drag-intent flag of the interaction that produced it.
    pub fn is_tap(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        !std::mem::take(&mut self.moved_since_press)
    }

    /// Re-clamps the resting position, e.g. after a viewport resize.
    pub fn reclamp(&mut self, bounds: &DragBounds) -> WidgetPosition {
        self.position = bounds.clamp(self.position.as_point());
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::pointer::PointerPhase;

    fn bounds() -> DragBounds {
        DragBounds::new(Size::new(800.0, 600.0), Size::new(60.0, 60.0), 8.0)
    }

    fn press(x: f64, y: f64) -> PointerEvent {
        PointerEvent::mouse(x, y, PointerPhase::Down)
    }

    fn drag_to(x: f64, y: f64) -> PointerEvent {
        PointerEvent::mouse(x, y, PointerPhase::Move)
    }

    fn controller_at(left: f64, top: f64) -> (DragController, Rect) {
        (
            DragController::new(WidgetPosition::new(left, top)),
            Rect::new(left, top, 60.0, 60.0),
        )
    }

    #[test]
    fn start_records_offset_from_bounding_box() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        let session = ctl.start_drag(&press(110.0, 125.0), rect);
        assert_eq!(session.offset, Point::new(10.0, 25.0));
        assert!(ctl.transitions_suppressed());
    }

    #[test]
    fn move_follows_pointer_minus_offset() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        ctl.start_drag(&press(110.0, 110.0), rect);

        let update = ctl.update_drag(&drag_to(210.0, 160.0), &bounds());
        assert_eq!(update, DragUpdate::Moved(WidgetPosition::new(200.0, 150.0)));
        assert!(update.disposition().is_consumed());
    }

    #[test]
    fn move_without_session_is_ignored() {
        let (mut ctl, _) = controller_at(100.0, 100.0);
        let update = ctl.update_drag(&drag_to(10.0, 10.0), &bounds());
        assert_eq!(update, DragUpdate::Idle);
        assert_eq!(update.disposition(), PointerDisposition::Ignored);
        assert_eq!(ctl.position(), WidgetPosition::new(100.0, 100.0));
    }

    #[test]
    fn moves_are_clamped_to_viewport() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        ctl.start_drag(&press(100.0, 100.0), rect);
        let b = bounds();

        for (x, y) in [(-500.0, -500.0), (5000.0, 5000.0), (400.0, -3.0), (-1.0, 900.0)] {
            let pos = ctl.update_drag(&drag_to(x, y), &b).position().expect("active");
            assert!(b.contains(pos), "{pos:?} escaped the viewport");
        }
    }

    #[test]
    fn end_closes_session_and_is_idempotent() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        ctl.start_drag(&press(100.0, 100.0), rect);
        assert!(ctl.end_drag());
        assert!(!ctl.is_dragging());
        assert!(!ctl.end_drag());
    }

    #[test]
    fn repeated_press_resets_offset() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        ctl.start_drag(&press(105.0, 105.0), rect);
        let session = *ctl.start_drag(&press(130.0, 140.0), rect);
        assert_eq!(session.offset, Point::new(30.0, 40.0));
        assert!(ctl.is_dragging());
    }

    #[test]
    fn click_without_move_is_tap() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        ctl.start_drag(&press(120.0, 120.0), rect);
        ctl.end_drag();
        assert!(ctl.is_tap());
    }

    #[test]
    fn click_after_stationary_move_is_tap() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        ctl.start_drag(&press(120.0, 120.0), rect);
        ctl.update_drag(&drag_to(120.0, 120.0), &bounds());
        ctl.end_drag();
        assert!(ctl.is_tap());
    }

    #[test]
    fn click_after_drag_is_not_tap_and_flag_is_consumed() {
        let (mut ctl, rect) = controller_at(100.0, 100.0);
        ctl.start_drag(&press(120.0, 120.0), rect);
        ctl.update_drag(&drag_to(220.0, 220.0), &bounds());
        ctl.end_drag();

        assert!(!ctl.is_tap());
        // A later click with no interaction in between is a plain tap again.
        assert!(ctl.is_tap());
    }

    #[test]
    fn reclamp_after_viewport_shrink() {
        let (mut ctl, _) = controller_at(700.0, 500.0);
        let small = DragBounds::new(Size::new(400.0, 300.0), Size::new(60.0, 60.0), 8.0);
        assert_eq!(ctl.reclamp(&small), WidgetPosition::new(332.0, 232.0));
    }
}

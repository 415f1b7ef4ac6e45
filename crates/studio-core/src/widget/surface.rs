//! Presentation port for the floating widget.

use crate::geometry::{Rect, Size};

use super::position::WidgetPosition;

/// What the drag controller needs from the rendered page.
///
/// Implementations wrap the widget element (browser) or an in-memory model
/// (headless page, tests).
pub trait WidgetSurface: Send + Sync {
    /// Rendered bounding box of the widget element.
    fn widget_rect(&self) -> Rect;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Positions the widget by `left`/`top` and releases any corner anchor.
    fn place_widget(&self, position: WidgetPosition);

    /// Enables or suppresses CSS transitions on the widget.
    fn set_widget_transitions(&self, enabled: bool);
}

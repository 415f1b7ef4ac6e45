//! Widget placement and viewport clamping.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Gap kept between the widget and every viewport edge while dragging.
pub const DEFAULT_EDGE_MARGIN: f64 = 8.0;

/// Inset of the initial bottom-right anchor.
pub const DEFAULT_ANCHOR_INSET: f64 = 18.0;

/// Top-left corner of the floating widget, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub left: f64,
    pub top: f64,
}

impl WidgetPosition {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn as_point(self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// The rectangle a widget's top-left corner may occupy.
///
/// `left ∈ [margin, viewport.width − widget.width − margin]`, and the same for
/// `top` with heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    pub viewport: Size,
    pub widget: Size,
    pub margin: f64,
}

impl DragBounds {
    pub fn new(viewport: Size, widget: Size, margin: f64) -> Self {
        Self {
            viewport,
            widget,
            margin,
        }
    }

    pub fn max_left(&self) -> f64 {
        self.viewport.width - self.widget.width - self.margin
    }

    pub fn max_top(&self) -> f64 {
        self.viewport.height - self.widget.height - self.margin
    }

    /// Clamps a candidate top-left into the bounds.
    ///
    /// When the viewport is too small to fit the widget plus both margins the
    /// upper bound falls below the lower one; the margin wins so the widget
    /// stays reachable at the top-left.
    pub fn clamp(&self, candidate: Point) -> WidgetPosition {
        WidgetPosition::new(
            candidate.x.min(self.max_left()).max(self.margin),
            candidate.y.min(self.max_top()).max(self.margin),
        )
    }

    /// Returns true when `position` satisfies both axis bounds.
    pub fn contains(&self, position: WidgetPosition) -> bool {
        position.left >= self.margin
            && position.left <= self.max_left()
            && position.top >= self.margin
            && position.top <= self.max_top()
    }

    /// Bottom-right corner anchor, inset by `inset` on both axes.
    pub fn bottom_right_anchor(&self, inset: f64) -> WidgetPosition {
        self.clamp(Point::new(
            self.viewport.width - self.widget.width - inset,
            self.viewport.height - self.widget.height - inset,
        ))
    }
}

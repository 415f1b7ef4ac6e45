//! Input-device normalization.
//!
//! Mouse and touch input reach the widget as two different event families.
//! Both are reduced here to one [`PointerEvent`] carrying a client position
//! and a [`PointerPhase`], so the drag controller never has to know which
//! device produced the input.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Which device family produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Where in the press/move/release cycle the event sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// `mousedown` / `touchstart`
    Down,
    /// `mousemove` / `touchmove`
    Move,
    /// `mouseup` / `touchend`
    Up,
    /// `touchcancel`; treated like a release.
    Cancel,
}

impl PointerPhase {
    /// Returns true for phases that close a drag session.
    pub fn is_release(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// One active contact of a touch event, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub identifier: i64,
    pub client_x: f64,
    pub client_y: f64,
}

/// A device-independent pointer reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub phase: PointerPhase,
    pub source: PointerSource,
}

impl PointerEvent {
    /// Normalizes a mouse event.
    pub fn mouse(client_x: f64, client_y: f64, phase: PointerPhase) -> Self {
        Self {
            position: Point::new(client_x, client_y),
            phase,
            source: PointerSource::Mouse,
        }
    }

    /// Normalizes a touch event using its first active contact.
    ///
    /// A `touchend` usually carries no remaining contacts. In that case the
    /// caller's last known position is used; release events never read the
    /// position, so any value is acceptable there.
    ///
    /// Returns `None` for a press or move without contacts.
    pub fn touch(touches: &[TouchPoint], phase: PointerPhase, last_known: Point) -> Option<Self> {
        let position = match touches.first() {
            Some(first) => Point::new(first.client_x, first.client_y),
            None if phase.is_release() => last_known,
            None => return None,
        };

        Some(Self {
            position,
            phase,
            source: PointerSource::Touch,
        })
    }
}

/// Returned by every pointer handler so the host knows whether to call
/// `preventDefault()` on the platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDisposition {
    /// The platform's default behavior (scrolling, text selection) may run.
    Ignored,
    /// The event was consumed by the widget.
    Consumed,
}

impl PointerDisposition {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

//! Floating assistant widget domain module.
//!
//! - `position`: placement, clamping bounds, default anchor
//! - `drag`: drag session state machine (`DragController`)
//! - `surface`: presentation port (`WidgetSurface`)

mod drag;
mod position;
mod surface;

pub use drag::{DragController, DragSession, DragUpdate};
pub use position::{DEFAULT_ANCHOR_INSET, DEFAULT_EDGE_MARGIN, DragBounds, WidgetPosition};
pub use surface::WidgetSurface;

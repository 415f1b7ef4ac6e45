//! Application layer for Studio.
//!
//! Each controller owns its component state and drives one presentation
//! port. They are constructed once at startup and shared behind `Arc`.
//!
//! - `assistant_widget`: drag handling and tap-to-open for the floating widget
//! - `gallery_loader`: remote-then-fallback image loading and the lightbox
//! - `chat_panel`: optimistic chat exchange with cancellation

pub mod assistant_widget;
pub mod chat_panel;
pub mod gallery_loader;

pub use assistant_widget::AssistantWidget;
pub use chat_panel::{ChatPanel, Submission};
pub use gallery_loader::{GalleryLoader, LoadOutcome};

use std::sync::{Mutex, MutexGuard};

/// Locks a controller mutex, recovering the data if a previous holder
/// panicked. Controller state is only mutated through complete transitions,
/// so a poisoned guard still holds a consistent value.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

//! Domain layer for the Studio site controllers.
//!
//! Pure state machines and port traits for the three interactive pieces of
//! the page: the draggable assistant widget, the gallery loader and the chat
//! panel. Nothing here performs I/O; HTTP lives in `studio-interaction` and
//! the controllers that tie ports together live in `studio-application`.

pub mod chat;
pub mod config;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod pointer;
pub mod widget;

// Re-export common error type
pub use error::{Result, StudioError};

//! Infrastructure for the Studio controllers: config files and the headless
//! page used outside a browser.

pub mod config_storage;
pub mod headless_page;
pub mod paths;

pub use crate::config_storage::ConfigStorage;
pub use crate::headless_page::{GridCell, HeadlessPage, PageSnapshot, RenderedMessage};
pub use crate::paths::StudioPaths;

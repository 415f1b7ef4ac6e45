pub mod chat;
pub mod config;
pub mod drag;
pub mod gallery;

//! Remote chat endpoint port.

use async_trait::async_trait;

use crate::error::Result;

/// Something that turns one user message into one reply string.
///
/// Errors are never shown to the visitor; the panel replaces them with its
/// degraded reply.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    async fn send(&self, message: &str) -> Result<String>;
}

//! Remote collaborators for the Studio controllers.
//!
//! - [`UnsplashImageProvider`]: random photo batches for the gallery
//! - [`HttpChatEndpoint`]: the site's `POST /api/chat` endpoint
//! - [`KeywordResponder`]: offline canned replies keyed on the visitor's words

mod http_chat_endpoint;
mod keyword_responder;
mod unsplash_provider;

pub use http_chat_endpoint::HttpChatEndpoint;
pub use keyword_responder::KeywordResponder;
pub use unsplash_provider::UnsplashImageProvider;

use studio_core::StudioError;

/// Maps a reqwest send/receive failure onto the transport taxonomy.
pub(crate) fn transport_error(context: &str, err: reqwest::Error) -> StudioError {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "failed"
    };
    StudioError::Transport {
        status: err.status().map(|s| s.as_u16()),
        message: format!("{context} {kind}: {err}"),
    }
}

/// Builds a client honoring an optional overall request timeout.
pub(crate) fn build_client(
    timeout: Option<std::time::Duration>,
) -> Result<reqwest::Client, StudioError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| StudioError::config(format!("failed to build HTTP client: {err}")))
}

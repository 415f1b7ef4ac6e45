//! HttpChatEndpoint - the site's JSON chat endpoint.
//!
//! `POST {url}` with `{"message": "..."}`, expecting `{"reply": "..."}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use studio_core::chat::ChatEndpoint;
use studio_core::config::ChatSettings;
use studio_core::{Result, StudioError};

use crate::{build_client, transport_error};

/// Chat endpoint reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpChatEndpoint {
    client: Client,
    url: String,
}

impl HttpChatEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Builds an endpoint from the `[chat]` settings.
    ///
    /// Fails with a config error when no base URL is configured.
    pub fn from_settings(settings: &ChatSettings) -> Result<Self> {
        let url = settings
            .endpoint_url()
            .ok_or_else(|| StudioError::config("chat.base_url is empty"))?;
        Self::new(url).with_timeout(settings.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Result<Self> {
        self.client = build_client(timeout)?;
        Ok(self)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn send(&self, message: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|err| transport_error("Chat request", err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StudioError::http_status(
                status.as_u16(),
                format!("Chat endpoint returned {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|err| transport_error("Chat body read", err))?;

        parse_reply(&body)
    }
}

/// Extracts a usable `reply` string from a response body.
pub(crate) fn parse_reply(body: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|err| StudioError::payload(format!("Failed to parse chat response: {err}")))?;

    parsed
        .reply
        .filter(|reply| !reply.trim().is_empty())
        .ok_or_else(|| StudioError::payload("chat response has no reply"))
}

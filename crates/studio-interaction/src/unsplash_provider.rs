//! UnsplashImageProvider - random photo batches over the Unsplash REST API.
//!
//! One `GET /photos/random?count=N&client_id=KEY` per load. The response
//! must be a JSON array whose every entry has `urls.regular`; anything else
//! is a payload failure for the whole batch.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use studio_core::config::GallerySettings;
use studio_core::gallery::{GalleryImage, ImageProvider};
use studio_core::{Result, StudioError};

use crate::{build_client, transport_error};

/// Image provider that talks to the Unsplash random-photo endpoint.
#[derive(Clone)]
pub struct UnsplashImageProvider {
    client: Client,
    endpoint: String,
    access_key: String,
}

impl UnsplashImageProvider {
    /// Creates a provider for `endpoint` authenticated with `access_key`.
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    /// Builds a provider from the `[gallery]` settings.
    pub fn from_settings(settings: &GallerySettings) -> Result<Self> {
        Self::new(settings.provider_url.clone(), settings.access_key.clone())
            .with_timeout(settings.request_timeout())
    }

    /// Applies an overall request timeout; `None` keeps the transport default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Result<Self> {
        self.client = build_client(timeout)?;
        Ok(self)
    }
}

#[async_trait]
impl ImageProvider for UnsplashImageProvider {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<GalleryImage>> {
        tracing::debug!("[UnsplashImageProvider] requesting {} photos", count);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("count", count.to_string()),
                ("client_id", self.access_key.clone()),
            ])
            .send()
            .await
            .map_err(|err| transport_error("Unsplash request", err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StudioError::http_status(
                status.as_u16(),
                format!("Unsplash fetch failed: {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|err| transport_error("Unsplash body read", err))?;

        parse_photos(&body)
    }

    fn is_configured(&self) -> bool {
        !self.access_key.trim().is_empty()
    }
}

#[derive(Deserialize)]
struct PhotoEntry {
    #[serde(default)]
    urls: Option<PhotoUrls>,
    #[serde(default)]
    alt_description: Option<String>,
}

#[derive(Deserialize)]
struct PhotoUrls {
    #[serde(default)]
    regular: Option<String>,
}

/// Parses an Unsplash random-photo response body.
pub(crate) fn parse_photos(body: &str) -> Result<Vec<GalleryImage>> {
    let entries: Vec<PhotoEntry> = serde_json::from_str(body)
        .map_err(|err| StudioError::payload(format!("Failed to parse Unsplash response: {err}")))?;

    if entries.is_empty() {
        return Err(StudioError::payload("Unsplash returned an empty array"));
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let url = entry
                .urls
                .and_then(|urls| urls.regular)
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| {
                    StudioError::payload(format!("photo {index} has no urls.regular"))
                })?;
            Ok(GalleryImage::with_optional_alt(url, entry.alt_description))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_photos_reads_regular_url_and_alt() {
        let body = r#"[
            {"urls": {"regular": "https://images.example/a.jpg", "thumb": "t"}, "alt_description": "foggy pier"},
            {"urls": {"regular": "https://images.example/b.jpg"}, "alt_description": null}
        ]"#;

        let images = parse_photos(body).expect("valid body");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], GalleryImage::new("https://images.example/a.jpg", "foggy pier"));
        assert_eq!(images[1].alt_text, "Photo");
    }

    #[test]
    fn test_parse_photos_rejects_whole_batch_on_one_bad_entry() {
        let body = r#"[
            {"urls": {"regular": "https://images.example/a.jpg"}},
            {"urls": {}},
            {"urls": {"regular": "https://images.example/c.jpg"}}
        ]"#;

        let err = parse_photos(body).unwrap_err();
        assert_eq!(err, StudioError::payload("photo 1 has no urls.regular"));
    }

    #[test]
    fn test_parse_photos_rejects_empty_and_non_array() {
        assert!(parse_photos("[]").unwrap_err().is_payload());
        assert!(parse_photos(r#"{"errors": ["OAuth error"]}"#).unwrap_err().is_payload());
        assert!(parse_photos("<html>").unwrap_err().is_payload());
    }

    #[test]
    fn test_is_configured_requires_key() {
        assert!(!UnsplashImageProvider::new("http://localhost", "").is_configured());
        assert!(!UnsplashImageProvider::new("http://localhost", "  ").is_configured());
        assert!(UnsplashImageProvider::new("http://localhost", "key").is_configured());
    }
}

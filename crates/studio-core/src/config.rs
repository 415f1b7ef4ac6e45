//! Runtime configuration model.
//!
//! Every section defaults independently, so a partial `config.toml` is valid.
//! Loading and saving live in `studio-infrastructure`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::chat::{DEGRADED_REPLY, PLACEHOLDER_TEXT};
use crate::error::{Result, StudioError};
use crate::gallery::{FallbackSet, GALLERY_SIZE};
use crate::geometry::Size;
use crate::widget::{DEFAULT_ANCHOR_INSET, DEFAULT_EDGE_MARGIN};

pub const DEFAULT_PROVIDER_URL: &str = "https://api.unsplash.com/photos/random";
pub const DEFAULT_CHAT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_CHAT_PATH: &str = "/api/chat";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct StudioConfig {
    #[serde(default)]
    pub gallery: GallerySettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub widget: WidgetSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GallerySettings {
    pub provider_url: String,
    /// Provider access key. Empty means "never call the provider".
    pub access_key: String,
    pub count: usize,
    pub fallback_images: FallbackSet,
    /// Unset means no client-side timeout.
    pub request_timeout_secs: Option<u64>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            access_key: String::new(),
            count: GALLERY_SIZE,
            fallback_images: FallbackSet::default(),
            request_timeout_secs: None,
        }
    }
}

impl GallerySettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChatSettings {
    /// Origin the endpoint path is resolved against. Empty means offline.
    pub base_url: String,
    pub endpoint_path: String,
    pub placeholder_text: String,
    pub degraded_reply: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_CHAT_PATH.to_string(),
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
            degraded_reply: DEGRADED_REPLY.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ChatSettings {
    /// Full endpoint URL, or `None` when no base URL is configured.
    pub fn endpoint_url(&self) -> Option<String> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        let path = self.endpoint_path.trim();
        if path.starts_with('/') {
            Some(format!("{base}{path}"))
        } else {
            Some(format!("{base}/{path}"))
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WidgetSettings {
    pub margin: f64,
    pub anchor_inset: f64,
    pub width: f64,
    pub height: f64,
    /// Viewport used by the headless page.
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            margin: DEFAULT_EDGE_MARGIN,
            anchor_inset: DEFAULT_ANCHOR_INSET,
            width: 64.0,
            height: 64.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
        }
    }
}

impl WidgetSettings {
    pub fn widget_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn viewport_size(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }
}

impl StudioConfig {
    /// Rejects values the controllers cannot work with.
    pub fn validate(&self) -> Result<()> {
        let gallery = &self.gallery;
        if gallery.count == 0 {
            return Err(StudioError::config("gallery.count must be at least 1"));
        }
        if gallery.fallback_images.len() != gallery.count {
            return Err(StudioError::config(format!(
                "gallery.fallback_images has {} entries, expected gallery.count = {}",
                gallery.fallback_images.len(),
                gallery.count
            )));
        }

        let widget = &self.widget;
        let dims = [
            ("widget.margin", widget.margin),
            ("widget.anchor_inset", widget.anchor_inset),
            ("widget.width", widget.width),
            ("widget.height", widget.height),
            ("widget.viewport_width", widget.viewport_width),
            ("widget.viewport_height", widget.viewport_height),
        ];
        if let Some((name, value)) = dims.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(StudioError::config(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StudioConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.gallery.count, 7);
        assert_eq!(config.widget.margin, 8.0);
        assert!(config.gallery.request_timeout().is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StudioConfig = toml::from_str(
            r#"
            [gallery]
            access_key = "abc"

            [widget]
            width = 80.0
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.gallery.access_key, "abc");
        assert_eq!(config.gallery.provider_url, DEFAULT_PROVIDER_URL);
        assert_eq!(config.widget.width, 80.0);
        assert_eq!(config.widget.height, 64.0);
        assert_eq!(config.chat, ChatSettings::default());
    }

    #[test]
    fn test_fallback_count_mismatch_is_rejected() {
        let mut config = StudioConfig::default();
        config.gallery.count = 5;
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_negative_dimension_is_rejected() {
        let mut config = StudioConfig::default();
        config.widget.margin = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("widget.margin"));
    }

    #[test]
    fn test_endpoint_url_joins_and_handles_offline() {
        let mut chat = ChatSettings::default();
        assert_eq!(chat.endpoint_url().as_deref(), Some("http://localhost:5000/api/chat"));

        chat.base_url = "https://studio.example/".into();
        chat.endpoint_path = "api/chat".into();
        assert_eq!(chat.endpoint_url().as_deref(), Some("https://studio.example/api/chat"));

        chat.base_url = "  ".into();
        assert_eq!(chat.endpoint_url(), None);
    }
}

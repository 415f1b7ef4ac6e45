//! Fake ports shared by the controller tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use studio_application::{AssistantWidget, ChatPanel, GalleryLoader};
use studio_core::chat::ChatEndpoint;
use studio_core::config::WidgetSettings;
use studio_core::gallery::{GalleryImage, ImageProvider};
use studio_core::{Result, StudioError};
use studio_infrastructure::HeadlessPage;
use tokio::sync::Notify;

pub fn remote_batch(n: usize) -> Vec<GalleryImage> {
    (0..n)
        .map(|i| GalleryImage::new(format!("https://images.example/{i}.jpg"), format!("remote {i}")))
        .collect()
}

/// Provider returning a fixed result and counting calls.
pub struct StaticProvider {
    result: Result<Vec<GalleryImage>>,
    configured: bool,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn ok(images: Vec<GalleryImage>) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(images),
            configured: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn err(error: StudioError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            configured: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            result: Ok(remote_batch(7)),
            configured: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProvider for StaticProvider {
    async fn fetch_batch(&self, _count: usize) -> Result<Vec<GalleryImage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

/// Provider that answers only after `release` is called.
pub struct GatedProvider {
    pub gate: Notify,
    images: Vec<GalleryImage>,
}

impl GatedProvider {
    pub fn new(images: Vec<GalleryImage>) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            images,
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl ImageProvider for GatedProvider {
    async fn fetch_batch(&self, _count: usize) -> Result<Vec<GalleryImage>> {
        self.gate.notified().await;
        Ok(self.images.clone())
    }
}

/// Chat endpoint that answers only after `release` is called.
pub struct GatedEndpoint {
    gate: Notify,
    reply: Result<String>,
    calls: AtomicUsize,
}

impl GatedEndpoint {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: StudioError) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            reply: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatEndpoint for GatedEndpoint {
    async fn send(&self, _message: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.reply.clone()
    }
}

pub fn page() -> Arc<HeadlessPage> {
    Arc::new(HeadlessPage::from_settings(&WidgetSettings::default()))
}

pub fn gallery(provider: Arc<dyn ImageProvider>, page: &Arc<HeadlessPage>) -> GalleryLoader {
    GalleryLoader::new(provider, page.clone())
}

pub fn chat(endpoint: Arc<dyn ChatEndpoint>, page: &Arc<HeadlessPage>) -> Arc<ChatPanel> {
    Arc::new(ChatPanel::new(endpoint, page.clone()))
}

pub fn widget(page: &Arc<HeadlessPage>, chat: Arc<ChatPanel>) -> AssistantWidget {
    AssistantWidget::new(page.clone(), chat, WidgetSettings::default().margin)
}

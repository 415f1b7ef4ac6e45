//! In-memory page model implementing every presentation port.
//!
//! Used by the CLI to drive the controllers without a browser, and by tests
//! to observe exactly what the controllers rendered.

use std::sync::{Mutex, MutexGuard};

use studio_core::chat::{Author, ChatMessage, ChatSurface, MessageId};
use studio_core::config::WidgetSettings;
use studio_core::gallery::{GalleryImage, GallerySurface};
use studio_core::geometry::{Rect, Size};
use studio_core::widget::{WidgetPosition, WidgetSurface};

/// One rendered transcript bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub id: MessageId,
    pub author: Author,
    pub text: String,
}

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub index: usize,
    pub image: GalleryImage,
    pub lazy: bool,
}

/// A copy of everything currently rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub hero: Option<GalleryImage>,
    pub grid: Vec<GridCell>,
    /// One entry per overlay node; more than one would be a stacking bug.
    pub lightbox_overlays: Vec<String>,
    pub messages: Vec<RenderedMessage>,
    pub input: String,
    pub panel_visible: bool,
    pub panel_aria_hidden: bool,
    pub scrolled_to: Option<MessageId>,
    pub widget_position: WidgetPosition,
    /// False once the corner anchor has been replaced by explicit left/top.
    pub widget_anchored: bool,
    pub widget_transitions: bool,
    pub viewport: Size,
    pub widget_size: Size,
}

/// Thread-safe in-memory page.
#[derive(Debug)]
pub struct HeadlessPage {
    state: Mutex<PageSnapshot>,
}

impl HeadlessPage {
    /// Creates a page with the widget resting at `initial`.
    pub fn new(viewport: Size, widget_size: Size, initial: WidgetPosition) -> Self {
        Self {
            state: Mutex::new(PageSnapshot {
                hero: None,
                grid: Vec::new(),
                lightbox_overlays: Vec::new(),
                messages: Vec::new(),
                input: String::new(),
                panel_visible: false,
                panel_aria_hidden: true,
                scrolled_to: None,
                widget_position: initial,
                widget_anchored: true,
                widget_transitions: true,
                viewport,
                widget_size,
            }),
        }
    }

    /// Page sized from the widget settings, widget at the bottom-right anchor.
    pub fn from_settings(settings: &WidgetSettings) -> Self {
        let bounds = studio_core::widget::DragBounds::new(
            settings.viewport_size(),
            settings.widget_size(),
            settings.margin,
        );
        Self::new(
            settings.viewport_size(),
            settings.widget_size(),
            bounds.bottom_right_anchor(settings.anchor_inset),
        )
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().clone()
    }

    /// Simulates the user typing into the chat input.
    pub fn type_input(&self, text: &str) {
        self.lock().input = text.to_string();
    }

    /// Simulates a viewport resize.
    pub fn resize_viewport(&self, viewport: Size) {
        self.lock().viewport = viewport;
    }

    fn lock(&self) -> MutexGuard<'_, PageSnapshot> {
        // A poisoned page only means a test panicked mid-render; the data is
        // still a consistent snapshot.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WidgetSurface for HeadlessPage {
    fn widget_rect(&self) -> Rect {
        let state = self.lock();
        Rect::new(
            state.widget_position.left,
            state.widget_position.top,
            state.widget_size.width,
            state.widget_size.height,
        )
    }

    fn viewport(&self) -> Size {
        self.lock().viewport
    }

    fn place_widget(&self, position: WidgetPosition) {
        let mut state = self.lock();
        state.widget_position = position;
        state.widget_anchored = false;
    }

    fn set_widget_transitions(&self, enabled: bool) {
        self.lock().widget_transitions = enabled;
    }
}

impl GallerySurface for HeadlessPage {
    fn set_hero(&self, image: &GalleryImage) {
        self.lock().hero = Some(image.clone());
    }

    fn clear_grid(&self) {
        self.lock().grid.clear();
    }

    fn append_grid_image(&self, index: usize, image: &GalleryImage) {
        self.lock().grid.push(GridCell {
            index,
            image: image.clone(),
            lazy: true,
        });
    }

    fn show_lightbox(&self, url: &str) {
        self.lock().lightbox_overlays.push(url.to_string());
    }

    fn update_lightbox(&self, url: &str) {
        let mut state = self.lock();
        match state.lightbox_overlays.last_mut() {
            Some(current) => *current = url.to_string(),
            None => {
                tracing::warn!("[HeadlessPage] update_lightbox without an overlay, creating one");
                state.lightbox_overlays.push(url.to_string());
            }
        }
    }

    fn remove_lightbox(&self) {
        self.lock().lightbox_overlays.pop();
    }
}

impl ChatSurface for HeadlessPage {
    fn append_message(&self, message: &ChatMessage) {
        self.lock().messages.push(RenderedMessage {
            id: message.id,
            author: message.author,
            text: message.text.clone(),
        });
    }

    fn update_message(&self, id: MessageId, text: &str) {
        let mut state = self.lock();
        match state.messages.iter_mut().find(|m| m.id == id) {
            Some(rendered) => rendered.text = text.to_string(),
            None => tracing::warn!("[HeadlessPage] update for unknown message {}", id),
        }
    }

    fn clear_input(&self) {
        self.lock().input.clear();
    }

    fn scroll_to_latest(&self) {
        let mut state = self.lock();
        state.scrolled_to = state.messages.last().map(|m| m.id);
    }

    fn set_panel_visible(&self, visible: bool) {
        let mut state = self.lock();
        state.panel_visible = visible;
        state.panel_aria_hidden = !visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> HeadlessPage {
        HeadlessPage::from_settings(&WidgetSettings::default())
    }

    #[test]
    fn test_starts_anchored_bottom_right() {
        let snap = page().snapshot();
        assert!(snap.widget_anchored);
        assert_eq!(snap.widget_position, WidgetPosition::new(1280.0 - 64.0 - 18.0, 720.0 - 64.0 - 18.0));
        assert!(snap.panel_aria_hidden);
    }

    #[test]
    fn test_place_releases_anchor() {
        let page = page();
        page.place_widget(WidgetPosition::new(20.0, 30.0));
        let snap = page.snapshot();
        assert!(!snap.widget_anchored);
        assert_eq!(page.widget_rect(), Rect::new(20.0, 30.0, 64.0, 64.0));
    }

    #[test]
    fn test_update_lightbox_swaps_in_place() {
        let page = page();
        page.show_lightbox("/a.jpg");
        page.update_lightbox("/b.jpg");
        assert_eq!(page.snapshot().lightbox_overlays, vec!["/b.jpg".to_string()]);
        page.remove_lightbox();
        assert!(page.snapshot().lightbox_overlays.is_empty());
    }

    #[test]
    fn test_chat_rendering() {
        let page = page();
        let msg = ChatMessage::user("hello");
        page.type_input("hello");
        page.append_message(&msg);
        page.update_message(msg.id, "hello!");
        page.clear_input();
        page.scroll_to_latest();
        page.set_panel_visible(true);

        let snap = page.snapshot();
        assert_eq!(snap.messages[0].text, "hello!");
        assert!(snap.input.is_empty());
        assert_eq!(snap.scrolled_to, Some(msg.id));
        assert!(snap.panel_visible && !snap.panel_aria_hidden);
    }
}

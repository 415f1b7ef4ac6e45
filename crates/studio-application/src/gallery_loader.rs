//! Gallery loader: remote batch first, local fallback on any failure.
//!
//! Every load rebuilds the hero and the whole grid from one [`GallerySet`];
//! nothing from a previous load survives. The lightbox is a single slot
//! that is replaced in place, never stacked.

use std::sync::{Arc, Mutex};

use studio_core::StudioError;
use studio_core::config::GallerySettings;
use studio_core::gallery::{
    FallbackSet, GALLERY_SIZE, GalleryImage, GallerySet, GallerySurface, HERO_ALT_TEXT,
    ImageOrigin, ImageProvider, LightboxChange, LightboxSlot,
};
use tokio_util::sync::CancellationToken;

use crate::lock;

/// How a call to [`GalleryLoader::load_images`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The remote batch was rendered.
    Remote,
    /// The fallback set was rendered because of `cause`.
    Fallback { cause: StudioError },
    /// The load was cancelled or superseded; nothing was rendered.
    Cancelled,
}

impl LoadOutcome {
    /// Origin of the rendered set, if anything was rendered.
    pub fn origin(&self) -> Option<ImageOrigin> {
        match self {
            Self::Remote => Some(ImageOrigin::Remote),
            Self::Fallback { .. } => Some(ImageOrigin::Fallback),
            Self::Cancelled => None,
        }
    }
}

/// Gallery state owned by one loader.
#[derive(Debug, Default)]
struct GalleryState {
    current: Option<GallerySet>,
    lightbox: LightboxSlot,
    in_flight: Option<CancellationToken>,
}

pub struct GalleryLoader {
    provider: Arc<dyn ImageProvider>,
    surface: Arc<dyn GallerySurface>,
    fallback: FallbackSet,
    count: usize,
    state: Mutex<GalleryState>,
}

impl GalleryLoader {
    pub fn new(provider: Arc<dyn ImageProvider>, surface: Arc<dyn GallerySurface>) -> Self {
        Self::with_fallback(provider, surface, FallbackSet::default(), GALLERY_SIZE)
    }

    /// Uses the batch size and fallback list from the settings.
    pub fn from_settings(
        settings: &GallerySettings,
        provider: Arc<dyn ImageProvider>,
        surface: Arc<dyn GallerySurface>,
    ) -> Self {
        Self::with_fallback(
            provider,
            surface,
            settings.fallback_images.clone(),
            settings.count,
        )
    }

    fn with_fallback(
        provider: Arc<dyn ImageProvider>,
        surface: Arc<dyn GallerySurface>,
        fallback: FallbackSet,
        count: usize,
    ) -> Self {
        Self {
            provider,
            surface,
            fallback,
            count,
            state: Mutex::new(GalleryState::default()),
        }
    }

    /// The set currently rendered, if any.
    pub fn current(&self) -> Option<GallerySet> {
        lock(&self.state).current.clone()
    }

    /// Image shown in the lightbox, if open.
    pub fn lightbox(&self) -> Option<String> {
        lock(&self.state).lightbox.current().map(str::to_string)
    }

    /// Fetches a remote batch and renders it, or renders the fallback set.
    ///
    /// A new load supersedes one still in flight.
    pub async fn load_images(&self) -> LoadOutcome {
        if !self.provider.is_configured() {
            tracing::info!("[GalleryLoader] Image provider not configured, using fallback set");
            self.load_fallback();
            return LoadOutcome::Fallback {
                cause: StudioError::config("image provider access key is not set"),
            };
        }

        let token = self.begin_load();

        tracing::debug!("[GalleryLoader] Requesting {} images", self.count);
        let fetched = tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!("[GalleryLoader] Load cancelled before the provider answered");
                return LoadOutcome::Cancelled;
            }
            fetched = self.provider.fetch_batch(self.count) => fetched,
        };

        let mut state = lock(&self.state);
        if token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }
        state.in_flight = None;

        match fetched.and_then(|images| GallerySet::from_remote(images)) {
            Ok(set) => {
                tracing::info!("[GalleryLoader] Loaded {} remote images", set.len());
                self.render(&mut state, set);
                LoadOutcome::Remote
            }
            Err(cause) => {
                tracing::warn!("[GalleryLoader] Remote provider failed: {}", cause);
                self.render(&mut state, GallerySet::from_fallback(&self.fallback));
                LoadOutcome::Fallback { cause }
            }
        }
    }

    /// Renders the local fallback set. Cannot fail.
    ///
    /// A remote load still in flight is cancelled so it cannot overwrite the
    /// fallback later.
    pub fn load_fallback(&self) {
        let mut state = lock(&self.state);
        if let Some(token) = state.in_flight.take() {
            token.cancel();
        }
        tracing::info!("[GalleryLoader] Loading {} fallback images", self.fallback.len());
        self.render(&mut state, GallerySet::from_fallback(&self.fallback));
    }

    /// Cancels the load in flight. Returns false when there was none.
    pub fn cancel(&self) -> bool {
        match lock(&self.state).in_flight.take() {
            Some(token) => {
                token.cancel();
                tracing::debug!("[GalleryLoader] Cancelled in-flight load");
                true
            }
            None => false,
        }
    }

    /// Shows `url` in the lightbox, replacing the image of an open overlay.
    pub fn open_lightbox(&self, url: &str) -> LightboxChange {
        let mut state = lock(&self.state);
        let change = state.lightbox.open(url);
        match &change {
            LightboxChange::Opened => self.surface.show_lightbox(url),
            LightboxChange::Replaced { .. } => self.surface.update_lightbox(url),
            LightboxChange::Unchanged => {}
        }
        tracing::debug!("[GalleryLoader] Lightbox {:?} for {}", change, url);
        change
    }

    /// Handles a click on grid entry `index`.
    ///
    /// Returns `None` when no rendered entry has that index.
    pub fn on_grid_click(&self, index: usize) -> Option<LightboxChange> {
        let url = {
            let state = lock(&self.state);
            state.current.as_ref()?.grid().get(index)?.url.clone()
        };
        Some(self.open_lightbox(&url))
    }

    /// Handles a click on the overlay. Returns false when none was open.
    pub fn dismiss_lightbox(&self) -> bool {
        let mut state = lock(&self.state);
        match state.lightbox.dismiss() {
            Some(url) => {
                tracing::debug!("[GalleryLoader] Lightbox dismissed ({})", url);
                self.surface.remove_lightbox();
                true
            }
            None => false,
        }
    }

    fn begin_load(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = lock(&self.state).in_flight.replace(token.clone()) {
            tracing::debug!("[GalleryLoader] Superseding previous load");
            previous.cancel();
        }
        token
    }

    fn render(&self, state: &mut GalleryState, set: GallerySet) {
        let hero = set.hero();
        self.surface
            .set_hero(&GalleryImage::new(hero.url.clone(), HERO_ALT_TEXT));

        self.surface.clear_grid();
        for (index, image) in set.grid().iter().enumerate() {
            self.surface.append_grid_image(index, image);
        }

        state.current = Some(set);
    }
}

impl Drop for GalleryLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

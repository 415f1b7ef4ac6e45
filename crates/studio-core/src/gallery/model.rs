//! Gallery domain model.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};

/// Alt text used for the hero slot.
pub const HERO_ALT_TEXT: &str = "hero";

/// Alt text used when the provider supplies none.
pub const DEFAULT_ALT_TEXT: &str = "Photo";

/// A single displayable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub alt_text: String,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Builds an image from an optional provider description.
    pub fn with_optional_alt(url: impl Into<String>, alt_text: Option<String>) -> Self {
        let alt_text = alt_text
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALT_TEXT.to_string());
        Self::new(url, alt_text)
    }
}

/// Where a gallery set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageOrigin {
    Remote,
    Fallback,
}

/// A complete, validated image batch backing the hero and the grid.
///
/// Sets are never merged: each load attempt produces a whole new set from a
/// single origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GallerySet {
    origin: ImageOrigin,
    images: Vec<GalleryImage>,
}

impl GallerySet {
    /// Validates a remote batch.
    ///
    /// Any non-empty batch is accepted, even one shorter than requested. The
    /// whole batch is rejected if any entry lacks a usable URL; no entry-level
    /// salvage is attempted.
    pub fn from_remote(images: Vec<GalleryImage>) -> Result<Self> {
        if images.is_empty() {
            return Err(StudioError::payload("provider returned no images"));
        }
        if let Some(index) = images.iter().position(|img| img.url.trim().is_empty()) {
            return Err(StudioError::payload(format!(
                "image {index} has no usable url"
            )));
        }

        Ok(Self {
            origin: ImageOrigin::Remote,
            images,
        })
    }

    /// Builds the set from the local fallback references.
    pub fn from_fallback(fallback: &super::FallbackSet) -> Self {
        Self {
            origin: ImageOrigin::Fallback,
            images: fallback
                .urls()
                .iter()
                .map(|url| GalleryImage::new(url.clone(), DEFAULT_ALT_TEXT))
                .collect(),
        }
    }

    pub fn origin(&self) -> ImageOrigin {
        self.origin
    }

    /// All images in the batch, hero first.
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The first image, promoted to the hero slot.
    pub fn hero(&self) -> &GalleryImage {
        // Both constructors guarantee at least one image.
        &self.images[0]
    }

    /// Images rendered in the grid.
    ///
    /// A remote batch shows every image, hero included. The fallback set keeps
    /// its first reference for the hero only.
    pub fn grid(&self) -> &[GalleryImage] {
        match self.origin {
            ImageOrigin::Remote => &self.images,
            ImageOrigin::Fallback => &self.images[1..],
        }
    }
}

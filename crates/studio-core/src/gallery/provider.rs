//! Remote image provider port.

use async_trait::async_trait;

use super::model::GalleryImage;
use crate::error::Result;

/// A source of random display images.
///
/// Implementations report every transport problem as
/// [`StudioError::Transport`](crate::StudioError::Transport) and every
/// unusable body as [`StudioError::Payload`](crate::StudioError::Payload).
/// Batch-level validation happens in
/// [`GallerySet::from_remote`](super::GallerySet::from_remote).
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Requests `count` random images in one call.
    async fn fetch_batch(&self, count: usize) -> Result<Vec<GalleryImage>>;

    /// Returns false when the provider cannot be called at all (for example a
    /// missing access key); callers then skip straight to the fallback set.
    fn is_configured(&self) -> bool {
        true
    }
}

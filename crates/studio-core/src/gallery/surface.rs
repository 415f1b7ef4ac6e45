//! Presentation port for the hero, the grid and the lightbox.

use super::model::GalleryImage;

/// DOM operations the gallery loader drives.
///
/// Grid entries are addressed by index; the host routes a click on entry `i`
/// back to the loader, which opens the lightbox for that image.
pub trait GallerySurface: Send + Sync {
    /// Replaces the hero container's content with a single image.
    fn set_hero(&self, image: &GalleryImage);

    /// Removes every node from the grid container.
    fn clear_grid(&self);

    /// Appends one lazy-loading, clickable image to the grid.
    fn append_grid_image(&self, index: usize, image: &GalleryImage);

    /// Creates the full-viewport overlay showing `url`.
    fn show_lightbox(&self, url: &str);

    /// Swaps the image inside the existing overlay.
    fn update_lightbox(&self, url: &str);

    /// Removes the overlay.
    fn remove_lightbox(&self);
}

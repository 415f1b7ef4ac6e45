//! Gallery domain module.
//!
//! # Module Structure
//!
//! - `model`: images and validated batches (`GalleryImage`, `GallerySet`)
//! - `fallback`: the local image set that can never fail (`FallbackSet`)
//! - `lightbox`: the single preview overlay (`LightboxSlot`)
//! - `provider`: remote image source port (`ImageProvider`)
//! - `surface`: presentation port (`GallerySurface`)

mod fallback;
mod lightbox;
mod model;
mod provider;
mod surface;

pub use fallback::{FALLBACK_IMAGES, FallbackSet, GALLERY_SIZE};
pub use lightbox::{LightboxChange, LightboxSlot};
pub use model::{DEFAULT_ALT_TEXT, GalleryImage, GallerySet, HERO_ALT_TEXT, ImageOrigin};
pub use provider::ImageProvider;
pub use surface::GallerySurface;

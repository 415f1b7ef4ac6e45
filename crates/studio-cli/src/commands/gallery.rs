use std::sync::Arc;

use anyhow::{Context, Result};
use studio_application::{GalleryLoader, LoadOutcome};
use studio_core::config::StudioConfig;
use studio_core::gallery::ImageProvider;
use studio_infrastructure::HeadlessPage;
use studio_interaction::UnsplashImageProvider;

pub async fn run(config: &StudioConfig, offline: bool) -> Result<()> {
    let page = Arc::new(HeadlessPage::from_settings(&config.widget));
    let provider: Arc<dyn ImageProvider> = Arc::new(
        UnsplashImageProvider::from_settings(&config.gallery)
            .context("Failed to build image provider")?,
    );
    let loader = GalleryLoader::from_settings(&config.gallery, provider, page.clone());

    if offline {
        loader.load_fallback();
        println!("source: fallback (offline)");
    } else {
        match loader.load_images().await {
            LoadOutcome::Remote => println!("source: remote"),
            LoadOutcome::Fallback { cause } => println!("source: fallback ({cause})"),
            LoadOutcome::Cancelled => println!("source: none (cancelled)"),
        }
    }

    let snapshot = page.snapshot();
    if let Some(hero) = &snapshot.hero {
        println!("hero: {} [{}]", hero.url, hero.alt_text);
    }
    for cell in &snapshot.grid {
        println!("{:>2}: {} [{}]", cell.index, cell.image.url, cell.image.alt_text);
    }
    Ok(())
}

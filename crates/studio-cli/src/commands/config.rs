use anyhow::{Context, Result};
use studio_infrastructure::ConfigStorage;

pub fn show(storage: &ConfigStorage) -> Result<()> {
    let config = storage
        .load()
        .with_context(|| format!("Failed to load {}", storage.path().display()))?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;

    if !storage.exists() {
        println!("# {} does not exist; showing defaults", storage.path().display());
    }
    print!("{rendered}");
    Ok(())
}

pub fn init(storage: &ConfigStorage) -> Result<()> {
    if storage
        .init()
        .with_context(|| format!("Failed to write {}", storage.path().display()))?
    {
        println!("✅ Wrote default config to {}", storage.path().display());
    } else {
        println!("{} already exists, left unchanged", storage.path().display());
    }
    Ok(())
}

pub fn path(storage: &ConfigStorage) -> Result<()> {
    println!("{}", storage.path().display());
    Ok(())
}

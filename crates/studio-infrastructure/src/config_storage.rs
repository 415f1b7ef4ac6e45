//! TOML-backed storage for [`StudioConfig`].
//!
//! Writes go to a sibling temporary file which is then renamed over the
//! target, so a crash never leaves a half-written config behind.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use studio_core::config::StudioConfig;
use studio_core::{Result, StudioError};

use crate::paths::StudioPaths;

/// A handle to one config file on disk.
#[derive(Debug, Clone)]
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the platform default location.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(StudioPaths::config_file()?))
    }

    /// Uses `path` when given, the default location otherwise.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads and validates the config.
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(&self) -> Result<StudioConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigStorage] No config at {}, using defaults",
                self.path.display()
            );
            return Ok(StudioConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StudioConfig::default());
        }

        let config: StudioConfig = toml::from_str(&content).map_err(|e| {
            StudioError::config(format!("{}: {}", self.path.display(), e))
        })?;
        config.validate()?;

        tracing::info!("[ConfigStorage] Loaded config from {}", self.path.display());
        Ok(config)
    }

    /// Validates and writes the config atomically.
    pub fn save(&self, config: &StudioConfig) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(config)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        tracing::info!("[ConfigStorage] Saved config to {}", self.path.display());
        Ok(())
    }

    /// Writes the default config unless a file already exists.
    ///
    /// Returns true when a file was created.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            tracing::warn!(
                "[ConfigStorage] {} already exists, leaving it untouched",
                self.path.display()
            );
            return Ok(false);
        }
        self.save(&StudioConfig::default())?;
        Ok(true)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| StudioError::config(format!("{} is not a file path", self.path.display())))?
            .to_string_lossy();
        Ok(self.path.with_file_name(format!(".{file_name}.tmp")))
    }
}

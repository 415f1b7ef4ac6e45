//! Path resolution for studio configuration files.
//!
//! ```text
//! ~/.config/studio/
//! └── config.toml
//! ```

use std::path::PathBuf;

use studio_core::{Result, StudioError};

const APP_DIR: &str = "studio";
const CONFIG_FILE: &str = "config.toml";

pub struct StudioPaths;

impl StudioPaths {
    /// Platform config directory for studio (e.g. `~/.config/studio/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| StudioError::config("Cannot find config directory"))
    }

    /// Default location of `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_inside_config_dir() {
        // Some CI sandboxes have no home directory; nothing to check there.
        let (Ok(dir), Ok(file)) = (StudioPaths::config_dir(), StudioPaths::config_file()) else {
            return;
        };
        assert!(dir.ends_with("studio"));
        assert_eq!(file, dir.join("config.toml"));
    }
}

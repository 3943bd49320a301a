//! User settings
//!
//! Optional defaults read from `<config dir>/create-anta-app/config.toml`, or
//! from the file named by `ANTA_CONFIG`. Command-line flags take precedence.
//!
//! ```toml
//! repo_url = "https://github.com/acme/anta-starter.git"
//! package_manager = "pnpm"
//! skip_install = false
//! skip_dev = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::package_manager::PackageManager;

/// Environment variable pointing at an alternative settings file.
pub const CONFIG_ENV_VAR: &str = "ANTA_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub repo_url: Option<String>,
    pub package_manager: Option<PackageManager>,
    pub skip_install: bool,
    pub skip_dev: bool,
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("create-anta-app").join("config.toml"))
}

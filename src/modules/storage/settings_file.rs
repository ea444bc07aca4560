use crate::config::Settings;
use crate::utils::{APP_NAME, SETTINGS_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only access to the TOML settings file
pub struct SettingsFile {
    file_path: PathBuf,
}

impl SettingsFile {
    /// Settings file in the platform config directory, e.g. `~/.config/music-core/settings.toml`
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push(APP_NAME);
        path.push(SETTINGS_FILE_NAME);
        Ok(Self { file_path: path })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Load settings; a missing file means defaults
    pub fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            debug!("no settings file at {:?}, using defaults", self.file_path);
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read settings file {:?}", self.file_path))?;
        Settings::from_toml_str(&content)
            .with_context(|| format!("Invalid settings file {:?}", self.file_path))
    }
}

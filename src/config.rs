use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, Result};
use crate::utils::{MIN_DOMINANT_OCCURRENCES, SMALL_COLLECTION_MAX, TRACK_LENGTH_PLACEHOLDER};

/// Tuning knobs for the core helpers, usually read from `settings.toml`
///
/// Every field has a default, so a partial (or empty) file is valid.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub artist: ArtistSettings,
    pub duration: DurationSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ArtistSettings {
    pub small_collection_max: usize,
    pub min_dominant_occurrences: usize,
}

impl Default for ArtistSettings {
    fn default() -> Self {
        Self {
            small_collection_max: SMALL_COLLECTION_MAX,
            min_dominant_occurrences: MIN_DOMINANT_OCCURRENCES,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DurationSettings {
    pub placeholder: String,
}

impl Default for DurationSettings {
    fn default() -> Self {
        Self {
            placeholder: TRACK_LENGTH_PLACEHOLDER.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.artist.min_dominant_occurrences == 0 {
            return Err(CoreError::InvalidSettings(
                "artist.min_dominant_occurrences must be at least 1".to_string(),
            ));
        }
        if self.duration.placeholder.is_empty() {
            return Err(CoreError::InvalidSettings(
                "duration.placeholder must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

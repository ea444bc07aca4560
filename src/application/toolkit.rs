use crate::config::Settings;
use crate::core::error::Result as CoreResult;
use crate::core::models::MainArtist;
use crate::core::traits::{SongCollection, SongResolver};
use crate::modules::library::artist_inference::{ArtistInference, ArtistInferer};
use crate::modules::playback::level_meter::compute_rms_level;
use crate::modules::storage::settings_file::SettingsFile;
use crate::modules::ui::track_length::TrackLengthFormatter;
use anyhow::Result;
use std::time::Duration;

/// The helpers a front-end needs, configured once from `Settings`
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    inferer: ArtistInferer,
    formatter: TrackLengthFormatter,
}

impl Toolkit {
    pub fn new(settings: &Settings) -> CoreResult<Self> {
        settings.validate()?;
        Ok(Self {
            inferer: ArtistInferer::new(settings.artist.clone()),
            formatter: TrackLengthFormatter::new(&settings.duration),
        })
    }

    /// Build from the settings file in the user's config directory
    pub fn from_config_dir() -> Result<Self> {
        let settings = SettingsFile::new()?.load()?;
        Ok(Self::new(&settings)?)
    }

    /// Build from a specific settings file
    pub fn from_settings_file(file: &SettingsFile) -> Result<Self> {
        let settings = file.load()?;
        Ok(Self::new(&settings)?)
    }

    pub fn inferer(&self) -> &ArtistInferer {
        &self.inferer
    }

    pub fn formatter(&self) -> &TrackLengthFormatter {
        &self.formatter
    }

    pub fn main_artist<C, R>(&self, collection: &C, resolver: &R) -> Option<MainArtist>
    where
        C: SongCollection + ?Sized,
        R: SongResolver + ?Sized,
    {
        self.inferer.main_artist(collection, resolver)
    }

    pub fn infer<C, R>(&self, collection: &C, resolver: &R) -> ArtistInference
    where
        C: SongCollection + ?Sized,
        R: SongResolver + ?Sized,
    {
        self.inferer.infer(collection, resolver)
    }

    pub fn track_length(&self, millis: i64) -> String {
        self.formatter.format(millis)
    }

    pub fn duration(&self, duration: Duration) -> String {
        self.formatter.format_duration(duration)
    }

    pub fn rms_level(&self, samples: &[i16], frame_count: usize) -> CoreResult<u32> {
        compute_rms_level(samples, frame_count)
    }
}

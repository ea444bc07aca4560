//! Metadata inference and signal helpers for music player front-ends.
//!
//! Everything here is synchronous and side-effect free apart from logging:
//! - main artist inference for albums and playlists
//! - RMS level of a PCM sample window
//! - compact track length formatting

pub mod application;
pub mod config;
pub mod core;
pub mod modules;
pub mod utils;

pub use crate::application::toolkit::Toolkit;
pub use crate::config::Settings;
pub use crate::core::error::CoreError;
pub use crate::core::models::{Album, MainArtist, Playlist, Song, SongRef};
pub use crate::core::traits::{SongCollection, SongResolver};
pub use crate::modules::library::artist_inference::{infer_main_artist, ArtistInference, ArtistInferer};
pub use crate::modules::library::song_index::SongIndex;
pub use crate::modules::playback::level_meter::{compute_rms_level, LevelMeter};
pub use crate::modules::ui::track_length::{format_duration, format_track_length, TrackLength};

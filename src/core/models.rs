use std::fmt;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::modules::ui::track_length::TrackLength;

/// Opaque reference to a song, as handed out by whatever data source owns the library
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SongRef(String);

impl SongRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty reference points nowhere and can never resolve
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SongRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SongRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SongRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Song {
    pub reference: SongRef,
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
}

impl Song {
    pub fn new(reference: impl Into<SongRef>, title: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            title: title.into(),
            artist: None,
            duration: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Artist tag exactly as stored; `None` is a meaningful tally key, not a lookup failure
    pub fn artist_tag(&self) -> Option<&str> {
        self.artist.as_deref()
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.duration
            .map(|d| TrackLength::from(d).to_string())
            .unwrap_or_else(|| "--:--".to_string());

        write!(
            f,
            "{} - {} [{}]",
            self.artist.as_deref().unwrap_or("Unknown Artist"),
            self.title,
            length
        )
    }
}

/// An album as seen by the library: its song references plus the track count the provider declared
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Album {
    pub name: String,
    pub songs: Vec<SongRef>,
    /// May exceed `songs.len()` while the provider is still loading tracks
    pub song_count: usize,
}

impl Album {
    pub fn new(name: impl Into<String>, songs: Vec<SongRef>) -> Self {
        let song_count = songs.len();
        Self {
            name: name.into(),
            songs,
            song_count,
        }
    }

    pub fn with_declared_count(mut self, song_count: usize) -> Self {
        self.song_count = song_count;
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    pub name: String,
    pub songs: Vec<SongRef>,
    pub song_count: usize,
}

impl Playlist {
    pub fn new(name: impl Into<String>, songs: Vec<SongRef>) -> Self {
        let song_count = songs.len();
        Self {
            name: name.into(),
            songs,
            song_count,
        }
    }

    pub fn with_declared_count(mut self, song_count: usize) -> Self {
        self.song_count = song_count;
        self
    }
}

/// Which kind of collection a set of song references came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Album,
    Playlist,
    /// Bare reference list with no owning collection
    Adhoc,
}

impl CollectionKind {
    pub fn label(&self) -> &'static str {
        match self {
            CollectionKind::Album => "album",
            CollectionKind::Playlist => "playlist",
            CollectionKind::Adhoc => "collection",
        }
    }
}

/// The artist judged to represent a whole collection
///
/// `Untagged` wins when songs without an artist tag dominate; callers decide how
/// to present that (the `Display` impl uses "Unknown Artist").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MainArtist {
    Named(String),
    Untagged,
}

impl MainArtist {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(name) => MainArtist::Named(name.to_owned()),
            None => MainArtist::Untagged,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            MainArtist::Named(name) => Some(name),
            MainArtist::Untagged => None,
        }
    }

    pub fn is_untagged(&self) -> bool {
        matches!(self, MainArtist::Untagged)
    }
}

impl fmt::Display for MainArtist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("Unknown Artist"))
    }
}

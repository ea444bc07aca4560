use std::collections::HashMap;
use crate::core::models::{Album, CollectionKind, Playlist, Song, SongRef};

/// Abstraction over whatever owns song data (provider cache, database, in-memory index)
pub trait SongResolver {
    /// Look up a song by reference
    /// Returns None when the reference is unknown or the song is not loaded yet
    fn resolve(&self, song_ref: &SongRef) -> Option<&Song>;
}

/// An ordered group of songs that can be summarised as a whole
pub trait SongCollection {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Kind of collection, used in diagnostics
    fn kind(&self) -> CollectionKind;

    /// Song references in collection order
    fn song_refs(&self) -> &[SongRef];

    /// Declared number of songs
    /// Can be larger than `song_refs().len()`; inference thresholds use this value
    fn song_count(&self) -> usize {
        self.song_refs().len()
    }
}

impl SongResolver for HashMap<SongRef, Song> {
    fn resolve(&self, song_ref: &SongRef) -> Option<&Song> {
        self.get(song_ref)
    }
}

impl SongResolver for [Song] {
    fn resolve(&self, song_ref: &SongRef) -> Option<&Song> {
        self.iter().find(|song| &song.reference == song_ref)
    }
}

impl SongResolver for Vec<Song> {
    fn resolve(&self, song_ref: &SongRef) -> Option<&Song> {
        self.as_slice().resolve(song_ref)
    }
}

impl SongCollection for Album {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Album
    }

    fn song_refs(&self) -> &[SongRef] {
        &self.songs
    }

    fn song_count(&self) -> usize {
        self.song_count
    }
}

impl SongCollection for Playlist {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Playlist
    }

    fn song_refs(&self) -> &[SongRef] {
        &self.songs
    }

    fn song_count(&self) -> usize {
        self.song_count
    }
}

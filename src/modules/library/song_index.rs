use std::collections::HashMap;

use crate::core::models::{Song, SongRef};
use crate::core::traits::SongResolver;

/// In-memory lookup table from song reference to loaded song
///
/// Front-ends fill it as provider data arrives; references that are not in the
/// index yet simply fail to resolve.
#[derive(Debug, Default, Clone)]
pub struct SongIndex {
    songs: HashMap<SongRef, Song>,
}

impl SongIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a song, returning the previous entry for that reference
    pub fn insert(&mut self, song: Song) -> Option<Song> {
        self.songs.insert(song.reference.clone(), song)
    }

    pub fn remove(&mut self, song_ref: &SongRef) -> Option<Song> {
        self.songs.remove(song_ref)
    }

    pub fn get(&self, song_ref: &SongRef) -> Option<&Song> {
        self.songs.get(song_ref)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl FromIterator<Song> for SongIndex {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut index = SongIndex::new();
        index.extend(iter);
        index
    }
}

impl Extend<Song> for SongIndex {
    fn extend<I: IntoIterator<Item = Song>>(&mut self, iter: I) {
        for song in iter {
            self.insert(song);
        }
    }
}

impl SongResolver for SongIndex {
    fn resolve(&self, song_ref: &SongRef) -> Option<&Song> {
        self.get(song_ref)
    }
}

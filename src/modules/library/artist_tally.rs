use std::collections::HashMap;

/// One artist key with its occurrence count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallyEntry<'a> {
    /// `None` groups songs without an artist tag
    pub artist: Option<&'a str>,
    /// Always >= 1
    pub count: usize,
}

/// Occurrence counts per artist tag, kept in first-seen order
///
/// Built during a single inference pass and thrown away afterwards. Keeping
/// first-seen order makes the leader deterministic when counts tie.
#[derive(Debug, Default, Clone)]
pub struct ArtistTally<'a> {
    entries: Vec<TallyEntry<'a>>,
    positions: HashMap<Option<&'a str>, usize>,
}

impl<'a> ArtistTally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `artist` and return its updated count
    pub fn record(&mut self, artist: Option<&'a str>) -> usize {
        match self.positions.get(&artist) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.count += 1;
                entry.count
            }
            None => {
                self.positions.insert(artist, self.entries.len());
                self.entries.push(TallyEntry { artist, count: 1 });
                1
            }
        }
    }

    /// Occurrences recorded for `artist` (0 if never seen)
    pub fn count(&self, artist: Option<&str>) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.artist == artist)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Entry with the strictly greatest count; on a tie the artist seen first wins
    pub fn leader(&self) -> Option<TallyEntry<'a>> {
        let mut best: Option<TallyEntry<'a>> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.count <= current.count => {}
                _ => best = Some(*entry),
            }
        }
        best
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Number of distinct artist keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry<'a>> {
        self.entries.iter()
    }
}

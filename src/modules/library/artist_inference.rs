use tracing::{debug, warn};

use crate::config::ArtistSettings;
use crate::core::models::{CollectionKind, MainArtist, SongRef};
use crate::core::traits::{SongCollection, SongResolver};
use crate::modules::library::artist_tally::ArtistTally;

/// Outcome of one inference pass, including the numbers behind the decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInference {
    /// The dominant artist, or None when no artist is dominant enough
    pub main_artist: Option<MainArtist>,
    /// References that resolved to a song
    pub resolved: usize,
    /// References that were empty or failed to resolve
    pub skipped: usize,
    /// Occurrences of the leading artist (0 when nothing resolved)
    pub top_count: usize,
    /// Declared collection size used for the confidence rule
    pub declared_total: usize,
}

/// Figures out which artist best represents an album or playlist
///
/// Counts artist tags over every resolvable song, takes the most frequent one
/// (first seen wins ties) and only reports it when the collection is small or
/// the artist occurs often enough to be more than a coincidence.
#[derive(Debug, Clone, Default)]
pub struct ArtistInferer {
    settings: ArtistSettings,
}

impl ArtistInferer {
    pub fn new(settings: ArtistSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ArtistSettings {
        &self.settings
    }

    /// Run inference over a collection and report how the decision was made
    pub fn infer<C, R>(&self, collection: &C, resolver: &R) -> ArtistInference
    where
        C: SongCollection + ?Sized,
        R: SongResolver + ?Sized,
    {
        self.infer_refs(
            collection.kind(),
            collection.name(),
            collection.song_refs(),
            collection.song_count(),
            resolver,
        )
    }

    /// Shorthand for `infer(..).main_artist`
    pub fn main_artist<C, R>(&self, collection: &C, resolver: &R) -> Option<MainArtist>
    where
        C: SongCollection + ?Sized,
        R: SongResolver + ?Sized,
    {
        self.infer(collection, resolver).main_artist
    }

    fn infer_refs<R>(
        &self,
        kind: CollectionKind,
        name: &str,
        refs: &[SongRef],
        declared_total: usize,
        resolver: &R,
    ) -> ArtistInference
    where
        R: SongResolver + ?Sized,
    {
        let mut tally = ArtistTally::new();
        let mut skipped = 0;

        for song_ref in refs {
            if song_ref.is_empty() {
                warn!("{} '{}' contains an empty song reference", kind.label(), name);
                skipped += 1;
                continue;
            }

            match resolver.resolve(song_ref) {
                Some(song) => {
                    tally.record(song.artist_tag());
                }
                None => {
                    debug!(
                        "{} '{}': skipping unresolved song reference {}",
                        kind.label(),
                        name,
                        song_ref
                    );
                    skipped += 1;
                }
            }
        }

        let resolved = tally.total();
        let leader = tally.leader();
        let top_count = leader.map(|entry| entry.count).unwrap_or(0);

        let main_artist = leader
            .filter(|entry| self.is_confident(entry.count, declared_total))
            .map(|entry| MainArtist::from_tag(entry.artist));

        debug!(
            "{} '{}': main artist {:?} ({} of {} declared, {} skipped)",
            kind.label(),
            name,
            main_artist,
            top_count,
            declared_total,
            skipped
        );

        ArtistInference {
            main_artist,
            resolved,
            skipped,
            top_count,
            declared_total,
        }
    }

    /// Small collections accept any leader; larger ones need repeated occurrences
    fn is_confident(&self, top_count: usize, declared_total: usize) -> bool {
        declared_total <= self.settings.small_collection_max
            || top_count >= self.settings.min_dominant_occurrences
    }
}

/// Infer the main artist of a bare list of song references with the default thresholds
///
/// `song_count` is the declared size of the collection, which may be larger than `songs`.
pub fn infer_main_artist<R>(songs: &[SongRef], resolver: &R, song_count: usize) -> Option<MainArtist>
where
    R: SongResolver + ?Sized,
{
    ArtistInferer::default()
        .infer_refs(CollectionKind::Adhoc, "", songs, song_count, resolver)
        .main_artist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Album, Playlist, Song};
    use crate::modules::library::song_index::SongIndex;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Builds an index where song `i` has reference `s{i}` and the given artist
    fn index_of(artists: &[Option<&str>]) -> (Vec<SongRef>, SongIndex) {
        let mut refs = Vec::new();
        let mut index = SongIndex::new();
        for (i, artist) in artists.iter().enumerate() {
            let reference = SongRef::new(format!("s{}", i));
            let mut song = Song::new(reference.clone(), format!("Track {}", i));
            song.artist = artist.map(str::to_owned);
            refs.push(reference);
            index.insert(song);
        }
        (refs, index)
    }

    fn named(name: &str) -> Option<MainArtist> {
        Some(MainArtist::Named(name.to_owned()))
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a debug-level subscriber and returns everything it logged
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    // ── Confidence rule ───────────────────────────────────────────────────────

    #[test]
    fn small_collection_returns_majority_artist() {
        let (refs, index) = index_of(&[Some("A"), Some("B"), Some("A")]);
        assert_eq!(infer_main_artist(&refs, &index, 3), named("A"));
    }

    #[test]
    fn small_collection_accepts_single_occurrence_leader() {
        let (refs, index) = index_of(&[Some("A"), Some("B"), Some("C"), Some("D"), Some("E")]);
        // Declared total of exactly 5 is still "small"
        assert_eq!(infer_main_artist(&refs, &index, 5), named("A"));
    }

    #[test]
    fn large_collection_of_distinct_artists_has_no_main_artist() {
        let artists: Vec<String> = (0..10).map(|i| format!("Artist {}", i)).collect();
        let tags: Vec<Option<&str>> = artists.iter().map(|a| Some(a.as_str())).collect();
        let (refs, index) = index_of(&tags);
        assert_eq!(infer_main_artist(&refs, &index, 10), None);
    }

    #[test]
    fn large_collection_with_repeated_artist_returns_it() {
        let (refs, index) = index_of(&[
            Some("A"), Some("B"), Some("C"), Some("B"), Some("D"), Some("E"),
        ]);
        assert_eq!(infer_main_artist(&refs, &index, 6), named("B"));
    }

    #[test]
    fn declared_total_drives_the_rule_not_resolved_count() {
        // Only three songs loaded, but the album declares twelve
        let (refs, index) = index_of(&[Some("A"), Some("B"), Some("C")]);
        assert_eq!(infer_main_artist(&refs, &index, 12), None);
        assert_eq!(infer_main_artist(&refs, &index, 3), named("A"));
    }

    // ── Empty and unresolved input ────────────────────────────────────────────

    #[test]
    fn empty_collection_returns_none() {
        let index = SongIndex::new();
        assert_eq!(infer_main_artist(&[], &index, 0), None);
    }

    #[test]
    fn all_unresolved_returns_none_and_counts_skips() {
        let index = SongIndex::new();
        let album = Album::new("Ghosts", vec!["x".into(), "y".into()]);
        let report = ArtistInferer::default().infer(&album, &index);
        assert_eq!(report.main_artist, None);
        assert_eq!(report.resolved, 0);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.top_count, 0);
    }

    #[test]
    fn unresolved_references_do_not_change_the_winner() {
        let (refs, index) = index_of(&[Some("A"), Some("B"), Some("A")]);
        let mut interleaved = Vec::new();
        for r in &refs {
            interleaved.push(SongRef::new("missing-before"));
            interleaved.push(r.clone());
        }
        interleaved.push(SongRef::new("missing-after"));

        assert_eq!(
            infer_main_artist(&interleaved, &index, 3),
            infer_main_artist(&refs, &index, 3)
        );
    }

    #[test]
    fn empty_references_are_skipped() {
        let (mut refs, index) = index_of(&[Some("A")]);
        refs.insert(0, SongRef::new(""));
        let album = Album::new("Gaps", refs).with_declared_count(2);
        let report = ArtistInferer::default().infer(&album, &index);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.resolved, 1);
        assert_eq!(report.main_artist, named("A"));
    }

    #[test]
    fn whitespace_reference_is_resolved_like_any_other() {
        let mut index = SongIndex::new();
        index.insert(Song::new(" ", "Blank").with_artist("A"));
        let refs = vec![SongRef::new(" ")];
        assert_eq!(infer_main_artist(&refs, &index, 1), named("A"));

        let playlist = Playlist::new("Blank", refs);
        let report = ArtistInferer::default().infer(&playlist, &index);
        assert_eq!(report.resolved, 1);
        assert_eq!(report.skipped, 0);
    }

    // ── Logging ───────────────────────────────────────────────────────────────

    #[test]
    fn skipped_references_are_logged() {
        let (mut refs, index) = index_of(&[Some("A")]);
        refs.push(SongRef::new("ghost"));
        refs.push(SongRef::new(""));
        let album = Album::new("Haunted", refs);

        let logs = capture_logs(|| {
            ArtistInferer::default().infer(&album, &index);
        });

        assert!(logs.contains("skipping unresolved song reference ghost"), "logs: {}", logs);
        assert!(logs.contains("album 'Haunted' contains an empty song reference"), "logs: {}", logs);
        assert!(logs.contains("WARN"), "logs: {}", logs);
    }

    // ── Untagged songs ────────────────────────────────────────────────────────

    #[test]
    fn dominant_untagged_songs_win() {
        let (refs, index) = index_of(&[None, Some("A"), None]);
        assert_eq!(infer_main_artist(&refs, &index, 3), Some(MainArtist::Untagged));
    }

    // ── Tie-break ─────────────────────────────────────────────────────────────

    #[test]
    fn ties_go_to_first_artist_in_song_order() {
        let (refs, index) = index_of(&[Some("B"), Some("A"), Some("A"), Some("B")]);
        assert_eq!(infer_main_artist(&refs, &index, 4), named("B"));
    }

    // ── Collections and settings ──────────────────────────────────────────────

    #[test]
    fn playlist_and_album_share_the_same_rule() {
        let (refs, index) = index_of(&[Some("A"), Some("A"), Some("B")]);
        let inferer = ArtistInferer::default();
        let album = Album::new("LP", refs.clone());
        let playlist = Playlist::new("Mix", refs);
        assert_eq!(inferer.main_artist(&album, &index), named("A"));
        assert_eq!(inferer.main_artist(&playlist, &index), named("A"));
    }

    #[test]
    fn report_exposes_decision_numbers() {
        let (refs, index) = index_of(&[Some("A"), Some("A"), Some("B")]);
        let playlist = Playlist::new("Mix", refs).with_declared_count(7);
        let report = ArtistInferer::default().infer(&playlist, &index);
        assert_eq!(report.resolved, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.top_count, 2);
        assert_eq!(report.declared_total, 7);
        assert_eq!(report.main_artist, named("A"));
    }

    #[test]
    fn stricter_settings_raise_the_bar() {
        let (refs, index) = index_of(&[Some("A"), Some("A"), Some("B")]);
        let inferer = ArtistInferer::new(ArtistSettings {
            small_collection_max: 2,
            min_dominant_occurrences: 3,
        });
        let playlist = Playlist::new("Mix", refs);
        assert_eq!(inferer.main_artist(&playlist, &index), None);
    }

    #[test]
    fn works_with_plain_song_vec_resolver() {
        let songs = vec![
            Song::new("a", "One").with_artist("Queen"),
            Song::new("b", "Two").with_artist("Queen"),
        ];
        let refs: Vec<SongRef> = vec!["a".into(), "b".into()];
        assert_eq!(infer_main_artist(&refs, &songs, 2), named("Queen"));
    }
}

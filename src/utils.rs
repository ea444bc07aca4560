pub const APP_NAME: &str = "music-core";

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Collections with at most this many declared songs accept any winning artist
pub const SMALL_COLLECTION_MAX: usize = 5;

/// Larger collections need the winner to appear at least this often
pub const MIN_DOMINANT_OCCURRENCES: usize = 2;

/// Shown for track lengths under one second
pub const TRACK_LENGTH_PLACEHOLDER: &str = "N/A";

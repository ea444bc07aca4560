use std::fmt;
use std::time::Duration;
use tracing::trace;

use crate::config::DurationSettings;
use crate::utils::TRACK_LENGTH_PLACEHOLDER;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Formats a track length given in milliseconds
///
/// - `01:48:24` when at least one hour
/// - `24:02` when at least one minute
/// - `52s` when at least one second
/// - `N/A` otherwise
///
/// Negative lengths are treated as 0 and therefore show as `N/A`.
pub fn format_track_length(millis: i64) -> String {
    format_millis(clamp_millis(millis), TRACK_LENGTH_PLACEHOLDER)
}

/// Formats a `Duration` with the same rules as `format_track_length`
pub fn format_duration(duration: Duration) -> String {
    format_millis(duration_millis(duration), TRACK_LENGTH_PLACEHOLDER)
}

/// Formats the combined length of a track list, e.g. for an album header
pub fn format_total_length<I>(lengths: I) -> String
where
    I: IntoIterator<Item = Duration>,
{
    format_duration(total_of(lengths))
}

fn total_of<I>(lengths: I) -> Duration
where
    I: IntoIterator<Item = Duration>,
{
    lengths
        .into_iter()
        .fold(Duration::ZERO, |acc, d| acc.saturating_add(d))
}

fn clamp_millis(millis: i64) -> u64 {
    if millis < 0 {
        trace!("clamping negative track length {}ms to 0", millis);
    }
    millis.max(0) as u64
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn format_millis(millis: u64, placeholder: &str) -> String {
    let hours = millis / MS_PER_HOUR;
    let minutes = (millis % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (millis % MS_PER_MINUTE) / MS_PER_SECOND;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{:02}:{:02}", minutes, seconds)
    } else if seconds > 0 {
        format!("{:02}s", seconds)
    } else {
        placeholder.to_string()
    }
}

/// Track length formatter carrying a configurable placeholder for sub-second lengths
#[derive(Debug, Clone)]
pub struct TrackLengthFormatter {
    placeholder: String,
}

impl TrackLengthFormatter {
    pub fn new(settings: &DurationSettings) -> Self {
        Self {
            placeholder: settings.placeholder.clone(),
        }
    }

    pub fn format(&self, millis: i64) -> String {
        format_millis(clamp_millis(millis), &self.placeholder)
    }

    pub fn format_duration(&self, duration: Duration) -> String {
        format_millis(duration_millis(duration), &self.placeholder)
    }

    /// Combined length of a track list, with the configured placeholder when it is under a second
    pub fn format_total<I>(&self, lengths: I) -> String
    where
        I: IntoIterator<Item = Duration>,
    {
        self.format_duration(total_of(lengths))
    }
}

impl Default for TrackLengthFormatter {
    fn default() -> Self {
        Self::new(&DurationSettings::default())
    }
}

/// Display wrapper so a length can go straight into `format!`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrackLength(Duration);

impl TrackLength {
    /// Negative values clamp to zero
    pub fn from_millis(millis: i64) -> Self {
        Self(Duration::from_millis(clamp_millis(millis)))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for TrackLength {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for TrackLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

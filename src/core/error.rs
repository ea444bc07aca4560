use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised synchronously by the core helpers
///
/// A missing main artist is not an error; inference returns `None` for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// RMS over zero frames would divide by zero
    #[error("invalid argument: frame count must be greater than zero")]
    ZeroFrameCount,

    #[error("invalid argument: frame count {frame_count} exceeds the {available} available samples")]
    FrameCountExceedsWindow { frame_count: usize, available: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl CoreError {
    /// True for the argument errors a caller should treat as "no reading" (e.g. silence)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CoreError::ZeroFrameCount | CoreError::FrameCountExceedsWindow { .. }
        )
    }
}

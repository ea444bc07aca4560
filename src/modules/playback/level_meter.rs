use crate::core::error::{CoreError, Result};

/// Calculates the RMS level of the first `frame_count` samples of a PCM window
///
/// The window mean is taken with integer division (truncating toward zero) before
/// the squared deviations are accumulated in floating point; the result is the
/// square root of their mean, rounded half up.
///
/// # Arguments
/// * `samples` - Signed 16-bit PCM samples
/// * `frame_count` - How many leading samples take part; trailing samples are ignored
///
/// # Returns
/// * `Ok(level)` - Non-negative RMS level
/// * `Err(CoreError::ZeroFrameCount)` if `frame_count` is 0
/// * `Err(CoreError::FrameCountExceedsWindow)` if `frame_count` is larger than `samples`
pub fn compute_rms_level(samples: &[i16], frame_count: usize) -> Result<u32> {
    if frame_count == 0 {
        return Err(CoreError::ZeroFrameCount);
    }
    if frame_count > samples.len() {
        return Err(CoreError::FrameCountExceedsWindow {
            frame_count,
            available: samples.len(),
        });
    }

    let frames = &samples[..frame_count];
    let sum: i64 = frames.iter().map(|&s| i64::from(s)).sum();
    let mean = (sum / frame_count as i64) as f64;

    let sum_mean_square: f64 = frames
        .iter()
        .map(|&s| {
            let deviation = f64::from(s) - mean;
            deviation * deviation
        })
        .sum();
    let mean_square = sum_mean_square / frame_count as f64;

    Ok((mean_square.sqrt() + 0.5) as u32)
}

/// Rolling window of the most recent samples fed by a playback pipeline
///
/// Owned by whichever component drives the meter; feed it with `push` and read
/// `level` whenever the UI wants a new value.
#[derive(Debug, Clone)]
pub struct LevelMeter {
    window: Vec<i16>,
    capacity: usize,
}

impl LevelMeter {
    /// Creates a meter that keeps the last `capacity` samples
    /// A zero capacity could never produce a level and is rejected
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CoreError::ZeroFrameCount);
        }
        Ok(Self {
            window: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Appends samples, dropping the oldest ones beyond capacity
    pub fn push(&mut self, samples: &[i16]) {
        if samples.len() >= self.capacity {
            self.window.clear();
            self.window
                .extend_from_slice(&samples[samples.len() - self.capacity..]);
            return;
        }

        self.window.extend_from_slice(samples);
        if self.window.len() > self.capacity {
            let excess = self.window.len() - self.capacity;
            self.window.drain(..excess);
        }
    }

    /// RMS level over every buffered sample
    /// Fails with `ZeroFrameCount` until something has been pushed
    pub fn level(&self) -> Result<u32> {
        compute_rms_level(&self.window, self.window.len())
    }

    /// Level for display, treating an empty window as silence
    pub fn level_or_silence(&self) -> u32 {
        self.level().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn samples(&self) -> &[i16] {
        &self.window
    }
}

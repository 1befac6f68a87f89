//! Analysis window types
//!
//! A window is a fixed-length extract of recent signal used as one unit of
//! analysis. Windows are short-lived value objects: each pipeline invocation
//! produces a fresh snapshot that never aliases the buffer it was taken from.

/// Samples per analysis window: 10 seconds at 250 Hz, the length the
/// reconstruction model was trained on
pub const WINDOW_LEN: usize = 2500;

/// An immutable snapshot of the most recent buffered samples
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisWindow {
    samples: Vec<f32>,
}

impl AnalysisWindow {
    /// Wrap a snapshot of samples as an analysis window
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// The window's samples, oldest first
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Window length in samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the window, yielding its backing storage
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

/// An analysis window after sanitize → detrend → smooth
///
/// Same length as the window it was derived from; freshly allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionedWindow {
    samples: Vec<f32>,
}

impl ConditionedWindow {
    /// Wrap conditioned samples
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// The conditioned samples, oldest first
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Window length in samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recent `n` samples (the whole window if shorter)
    ///
    /// Presentation consumers render only the freshest stretch of signal.
    pub fn tail(&self, n: usize) -> &[f32] {
        let start = self.samples.len().saturating_sub(n);
        &self.samples[start..]
    }

    /// Consume the window, yielding its backing storage
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

//! Types produced by anomaly scoring

use std::fmt;

/// Outcome of scoring one conditioned window
///
/// Pairs the interpreted reconstruction error with the centered signal it
/// was computed from, so a consumer can render exactly what the model saw.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    raw_error: f32,
    final_error: f32,
    is_structural: bool,
    centered: Vec<f32>,
}

impl ScoreResult {
    /// Create a new score result
    pub fn new(raw_error: f32, final_error: f32, is_structural: bool, centered: Vec<f32>) -> Self {
        Self {
            raw_error,
            final_error,
            is_structural,
            centered,
        }
    }

    /// Mean squared reconstruction error before suppression
    pub fn raw_error(&self) -> f32 {
        self.raw_error
    }

    /// Error after structural false-positive suppression
    ///
    /// Equal to [`raw_error`](Self::raw_error) unless the error was diffuse
    /// (non-structural) above the threshold, in which case it is 0.0.
    pub fn final_error(&self) -> f32 {
        self.final_error
    }

    /// Whether the reconstruction error is concentrated in the QRS-like
    /// high-amplitude regions of the signal
    pub fn is_structural(&self) -> bool {
        self.is_structural
    }

    /// Whether suppression zeroed the score
    pub fn was_suppressed(&self) -> bool {
        self.final_error != self.raw_error
    }

    /// The mean-centered window the oracle reconstructed
    pub fn centered(&self) -> &[f32] {
        &self.centered
    }

    /// Consume the result, yielding the centered window
    pub fn into_centered(self) -> Vec<f32> {
        self.centered
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScoreResult {{ raw: {:.4}, final: {:.4}, structural: {} }}",
            self.raw_error, self.final_error, self.is_structural
        )
    }
}

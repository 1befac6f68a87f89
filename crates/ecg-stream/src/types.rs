//! Decision records emitted by the pipeline

use std::fmt;

/// Per-window classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Reconstruction error at or below the anomaly threshold
    Normal,
    /// Reconstruction error above the threshold and structurally plausible
    Anomalous,
    /// Window dropped before or during scoring: quality-gate artifact or a
    /// failed inference
    ArtifactRejected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Normal => write!(f, "Normal Rhythm"),
            Verdict::Anomalous => write!(f, "Anomaly Detected"),
            Verdict::ArtifactRejected => write!(f, "Artifact Rejected"),
        }
    }
}

/// One decision per emitted analysis window
///
/// Immutable; consumed by the presentation collaborator and then discarded.
/// The structural flag is only meaningful for scored windows; rejected
/// windows carry `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    final_error: f32,
    is_structural: bool,
    verdict: Verdict,
    latency_ms: f64,
}

impl Decision {
    /// Create a decision record
    pub fn new(final_error: f32, is_structural: bool, verdict: Verdict, latency_ms: f64) -> Self {
        Self {
            final_error,
            is_structural,
            verdict,
            latency_ms,
        }
    }

    /// Decision for a window rejected before a score existed
    pub fn artifact_rejected(latency_ms: f64) -> Self {
        Self::new(0.0, false, Verdict::ArtifactRejected, latency_ms)
    }

    /// Final (post-suppression) reconstruction error
    pub fn final_error(&self) -> f32 {
        self.final_error
    }

    /// Whether the error was concentrated in QRS-like regions
    pub fn is_structural(&self) -> bool {
        self.is_structural
    }

    /// The per-window classification
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Milliseconds spent conditioning, gating and scoring this window
    pub fn latency_ms(&self) -> f64 {
        self.latency_ms
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | MSE: {:.4} | Structural: {} | {:.1} ms",
            self.verdict, self.final_error, self.is_structural, self.latency_ms
        )
    }
}

//! Anomaly scoring from reconstruction error
//!
//! The scorer centers a conditioned window, asks the oracle for a
//! reconstruction, interprets the mean squared error, and then applies a
//! structural-plausibility heuristic that suppresses likely false positives.
//!
//! ## The structural check
//!
//! A reconstruction model trained on normal rhythm makes small errors
//! everywhere on normal input. On genuinely anomalous morphology its error
//! concentrates where the heartbeat complex actually is: the QRS-like,
//! high-amplitude stretches of the window. Diffuse error spread evenly over
//! the window is instead the signature of residual noise the gate did not
//! catch. Windows whose error exceeds the threshold but is NOT concentrated
//! in QRS-like regions therefore have their score suppressed to zero.

use crate::traits::InferenceOracle;
use crate::types::ScoreResult;
use ecg_core::{ConditionedWindow, Error, Result};

/// Tunable thresholds for anomaly scoring
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerParameters {
    /// Reconstruction-MSE threshold separating normal from anomalous
    pub error_threshold: f32,
    /// Centered amplitude above which a sample counts as QRS-like
    pub qrs_magnitude: f32,
}

impl Default for ScorerParameters {
    fn default() -> Self {
        Self {
            error_threshold: 0.30,
            qrs_magnitude: 0.4,
        }
    }
}

/// Interprets oracle reconstructions into anomaly scores
///
/// The oracle is passed per call rather than owned, so one scorer can serve
/// any model and scorers stay trivially cloneable.
#[derive(Debug, Clone, Default)]
pub struct AnomalyScorer {
    params: ScorerParameters,
}

impl AnomalyScorer {
    /// Create a scorer with the canonical thresholds (0.30 / 0.4)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with explicit thresholds
    pub fn with_parameters(params: ScorerParameters) -> Self {
        Self { params }
    }

    /// The scorer's thresholds
    pub fn parameters(&self) -> &ScorerParameters {
        &self.params
    }

    /// Score one conditioned window against the oracle
    ///
    /// Centering subtracts the window's own mean: plain DC removal, not a
    /// z-score. The fixed thresholds in [`ScorerParameters`] were tuned
    /// against mean-centered input, so the two must not be mixed.
    ///
    /// # Errors
    /// - [`Error::Inference`] if the oracle call fails
    /// - [`Error::LengthMismatch`] if the reconstruction length differs
    ///   from the window length
    /// - `InsufficientData` for an empty window
    pub fn score<O: InferenceOracle>(
        &self,
        window: &ConditionedWindow,
        oracle: &O,
    ) -> Result<ScoreResult> {
        let samples = window.samples();
        if samples.is_empty() {
            return Err(Error::empty_input());
        }

        let mean = samples.iter().sum::<f32>() / samples.len() as f32;
        let centered: Vec<f32> = samples.iter().map(|&v| v - mean).collect();

        let reconstruction = oracle.infer(&centered)?;
        if reconstruction.len() != centered.len() {
            return Err(Error::length_mismatch(centered.len(), reconstruction.len()));
        }

        let raw_error = mean_squared_error(&centered, &reconstruction);
        let is_structural = if raw_error <= self.params.error_threshold {
            // Low error is structurally consistent by definition
            true
        } else {
            self.error_is_structural(&centered, &reconstruction)
        };

        let final_error = if raw_error > self.params.error_threshold && !is_structural {
            0.0
        } else {
            raw_error
        };

        Ok(ScoreResult::new(
            raw_error,
            final_error,
            is_structural,
            centered,
        ))
    }

    /// Decide whether reconstruction error concentrates in QRS-like regions
    ///
    /// Partitions indices by centered amplitude and compares the mean
    /// absolute error inside the QRS-like subset against the mean absolute
    /// error over the whole window. An empty subset counts as structural:
    /// with no QRS evidence either way, a potential anomaly is not
    /// suppressed.
    fn error_is_structural(&self, centered: &[f32], reconstruction: &[f32]) -> bool {
        let mut qrs_error_sum = 0.0f32;
        let mut qrs_count = 0usize;
        let mut total_error_sum = 0.0f32;

        for (&input, &recon) in centered.iter().zip(reconstruction) {
            let diff = (input - recon).abs();
            total_error_sum += diff;

            if input.abs() > self.params.qrs_magnitude {
                qrs_error_sum += diff;
                qrs_count += 1;
            }
        }

        if qrs_count == 0 {
            return true;
        }

        let error_in_qrs = qrs_error_sum / qrs_count as f32;
        let error_total = total_error_sum / centered.len() as f32;
        error_in_qrs > error_total
    }
}

/// Mean squared difference between two equal-length signals
fn mean_squared_error(a: &[f32], b: &[f32]) -> f32 {
    let sum: f32 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum();
    sum / a.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Oracle returning its input unchanged
    struct IdentityOracle;

    impl InferenceOracle for IdentityOracle {
        fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
            Ok(window.to_vec())
        }

        fn model_name(&self) -> &'static str {
            "identity"
        }
    }

    /// Oracle that reconstructs low-amplitude samples perfectly and zeroes
    /// everything above the QRS magnitude
    struct ClippingOracle;

    impl InferenceOracle for ClippingOracle {
        fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
            Ok(window
                .iter()
                .map(|&v| if v.abs() <= 0.4 { v } else { 0.0 })
                .collect())
        }
    }

    /// Oracle that always fails
    struct FailingOracle;

    impl InferenceOracle for FailingOracle {
        fn infer(&self, _window: &[f32]) -> Result<Vec<f32>> {
            Err(Error::inference("session closed"))
        }
    }

    /// Oracle returning the wrong length
    struct TruncatingOracle;

    impl InferenceOracle for TruncatingOracle {
        fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
            Ok(window[..window.len() / 2].to_vec())
        }
    }

    fn sine_window(amplitude: f32) -> ConditionedWindow {
        use std::f32::consts::PI;
        ConditionedWindow::new(
            (0..2500)
                .map(|i| amplitude * (2.0 * PI * i as f32 / 250.0).sin())
                .collect(),
        )
    }

    #[test]
    fn test_perfect_reconstruction_scores_zero() {
        let scorer = AnomalyScorer::new();
        let result = scorer.score(&sine_window(1.0), &IdentityOracle).unwrap();

        assert_abs_diff_eq!(result.raw_error(), 0.0);
        assert_abs_diff_eq!(result.final_error(), 0.0);
        assert!(result.is_structural());
        assert!(!result.was_suppressed());
    }

    #[test]
    fn test_centering_removes_dc_offset() {
        let scorer = AnomalyScorer::new();
        let offset = ConditionedWindow::new(vec![5.0; 100]);
        let result = scorer.score(&offset, &IdentityOracle).unwrap();

        // After centering a constant window, everything is zero
        assert!(result.centered().iter().all(|&v| v == 0.0));
        assert_abs_diff_eq!(result.raw_error(), 0.0);
    }

    #[test]
    fn test_qrs_concentrated_error_is_structural() {
        // The clipping oracle wipes out every sample above 0.4, so all the
        // error lands exactly in the QRS-like subset. Amplitude chosen to
        // push the MSE over the threshold.
        let scorer = AnomalyScorer::new();
        let result = scorer.score(&sine_window(1.8), &ClippingOracle).unwrap();

        assert!(
            result.raw_error() > 0.30,
            "test premise: raw error {} must exceed threshold",
            result.raw_error()
        );
        assert!(result.is_structural());
        assert_abs_diff_eq!(result.final_error(), result.raw_error());
    }

    #[test]
    fn test_diffuse_error_is_suppressed() {
        // Uniform shift: reconstruction misses every sample by the same
        // amount, so the error is diffuse rather than QRS-concentrated.
        struct ShiftOracle;
        impl InferenceOracle for ShiftOracle {
            fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
                Ok(window.iter().map(|&v| v + 0.8).collect())
            }
        }

        let scorer = AnomalyScorer::new();
        let result = scorer.score(&sine_window(1.0), &ShiftOracle).unwrap();

        assert!(result.raw_error() > 0.30);
        assert!(!result.is_structural());
        assert_abs_diff_eq!(result.final_error(), 0.0);
        assert!(result.was_suppressed());
    }

    #[test]
    fn test_empty_qrs_subset_counts_as_structural() {
        // Low-amplitude window: no sample exceeds 0.4 after centering, and a
        // broken oracle drives the error over the threshold anyway.
        struct NoisyOracle;
        impl InferenceOracle for NoisyOracle {
            fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
                Ok(window
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| v + if i % 2 == 0 { 1.2 } else { -1.2 })
                    .collect())
            }
        }

        let scorer = AnomalyScorer::new();
        let result = scorer.score(&sine_window(0.3), &NoisyOracle).unwrap();

        assert!(result.raw_error() > 0.30);
        assert!(result.is_structural(), "empty QRS subset must not suppress");
        assert_abs_diff_eq!(result.final_error(), result.raw_error());
    }

    #[test]
    fn test_oracle_failure_propagates_as_inference_error() {
        let scorer = AnomalyScorer::new();
        let err = scorer.score(&sine_window(1.0), &FailingOracle).unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let scorer = AnomalyScorer::new();
        let err = scorer
            .score(&sine_window(1.0), &TruncatingOracle)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 2500,
                actual: 1250
            }
        ));
    }

    #[test]
    fn test_empty_window_rejected() {
        let scorer = AnomalyScorer::new();
        let err = scorer
            .score(&ConditionedWindow::new(vec![]), &IdentityOracle)
            .unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
    }
}

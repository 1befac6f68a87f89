//! Statistical quality gate
//!
//! A fast O(n) pre-filter that keeps mechanically invalid windows away from
//! the expensive inference oracle. It runs on the conditioned window, after
//! detrending, so its thresholds see the signal the scorer would see.

use ecg_core::ConditionedWindow;
use std::fmt;

/// Why a window was rejected by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Standard deviation below the flatline floor: disconnected lead or
    /// dead sensor
    Flatline,
    /// Too many extreme-magnitude samples: motion artifact or amplifier
    /// saturation
    ExcessOutliers,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Flatline => write!(f, "flatline / disconnected lead"),
            ArtifactKind::ExcessOutliers => write!(f, "motion artifact / saturation"),
        }
    }
}

/// Thresholds for the quality gate
#[derive(Debug, Clone, PartialEq)]
pub struct GateParameters {
    /// Minimum population standard deviation; anything quieter is a flatline
    pub min_std_dev: f32,
    /// Absolute amplitude above which a sample counts as an outlier
    pub outlier_magnitude: f32,
    /// Maximum tolerated fraction of outlier samples
    pub max_outlier_fraction: f32,
}

impl Default for GateParameters {
    fn default() -> Self {
        Self {
            min_std_dev: 0.001,
            outlier_magnitude: 3.0,
            max_outlier_fraction: 0.1,
        }
    }
}

/// Statistical check rejecting flatline or motion-corrupted windows
#[derive(Debug, Clone, Default)]
pub struct QualityGate {
    params: GateParameters,
}

impl QualityGate {
    /// Create a gate with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate with explicit thresholds
    pub fn with_parameters(params: GateParameters) -> Self {
        Self { params }
    }

    /// The gate's thresholds
    pub fn parameters(&self) -> &GateParameters {
        &self.params
    }

    /// Classify a window, returning the artifact kind if it must be rejected
    ///
    /// A single pass computes the population mean/variance and the outlier
    /// count. Empty windows are rejected as [`ArtifactKind::Flatline`].
    pub fn evaluate(&self, window: &ConditionedWindow) -> Option<ArtifactKind> {
        let samples = window.samples();
        if samples.is_empty() {
            return Some(ArtifactKind::Flatline);
        }

        let n = samples.len() as f64;
        let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;

        let mut variance_sum = 0.0f64;
        let mut outlier_count = 0usize;
        for &v in samples {
            let d = v as f64 - mean;
            variance_sum += d * d;
            if v.abs() > self.params.outlier_magnitude {
                outlier_count += 1;
            }
        }

        let std_dev = (variance_sum / n).sqrt();
        if std_dev < self.params.min_std_dev as f64 {
            return Some(ArtifactKind::Flatline);
        }

        let outlier_fraction = outlier_count as f64 / n;
        if outlier_fraction > self.params.max_outlier_fraction as f64 {
            return Some(ArtifactKind::ExcessOutliers);
        }

        None
    }

    /// Whether the window may proceed to scoring
    pub fn is_acceptable(&self, window: &ConditionedWindow) -> bool {
        self.evaluate(window).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(samples: Vec<f32>) -> ConditionedWindow {
        ConditionedWindow::new(samples)
    }

    #[test]
    fn test_constant_window_rejected_as_flatline() {
        let gate = QualityGate::new();
        assert_eq!(
            gate.evaluate(&window(vec![0.5; 2500])),
            Some(ArtifactKind::Flatline)
        );
        assert!(!gate.is_acceptable(&window(vec![0.0; 2500])));
    }

    #[test]
    fn test_empty_window_rejected() {
        let gate = QualityGate::new();
        assert_eq!(gate.evaluate(&window(vec![])), Some(ArtifactKind::Flatline));
    }

    #[test]
    fn test_excess_outliers_rejected() {
        let gate = QualityGate::new();
        // 11% of samples thrash beyond ±3.0
        let mut samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.7).sin()).collect();
        for v in samples.iter_mut().take(110) {
            *v = 5.0;
        }
        assert_eq!(
            gate.evaluate(&window(samples)),
            Some(ArtifactKind::ExcessOutliers)
        );
    }

    #[test]
    fn test_unit_variance_window_accepted() {
        let gate = QualityGate::new();
        // Alternating ±1 has population std dev exactly 1 and no outliers
        let samples: Vec<f32> = (0..2500).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        assert!(gate.is_acceptable(&window(samples)));
    }

    #[test]
    fn test_outlier_fraction_at_threshold_accepted() {
        let gate = QualityGate::new();
        // Exactly 10% outliers is the boundary: the gate rejects only above it
        let mut samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.7).sin()).collect();
        for v in samples.iter_mut().take(100) {
            *v = 5.0;
        }
        assert!(gate.is_acceptable(&window(samples)));
    }
}

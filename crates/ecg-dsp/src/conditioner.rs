//! Deterministic signal conditioning: sanitize → detrend → smooth
//!
//! The conditioning chain prepares a raw analysis window for scoring. The
//! stages run in a fixed order and are individually pure, so the whole chain
//! is deterministic: identical input bytes produce identical output bytes.
//!
//! ## Stages
//!
//! 1. **Sanitize**: non-finite samples (NaN, ±∞) become 0.0. Wireless links
//!    occasionally deliver garbage counts; downstream math must never see
//!    them.
//! 2. **Linear detrend**: an ordinary least-squares line over the sample
//!    index is fitted and subtracted. This removes baseline wander (the slow
//!    drift caused by respiration and electrode movement) without touching
//!    the cardiac morphology.
//! 3. **Savitzky-Golay smoothing**: an 11-tap quadratic/cubic kernel
//!    suppresses high-frequency noise while preserving the sharp QRS peaks
//!    that a plain moving average would flatten.
//!
//! The Savitzky-Golay coefficients are the classical integer tableau for
//! window 11 divided by 429. The anomaly thresholds downstream were tuned
//! against exactly these ratios, so they are hardcoded rather than derived.

use ecg_core::{AnalysisWindow, ConditionedWindow};

/// Integer Savitzky-Golay tableau for window 11, quadratic/cubic fit
const SAVGOL_COEFFS: [f32; 11] = [
    -36.0, 9.0, 44.0, 69.0, 84.0, 89.0, 84.0, 69.0, 44.0, 9.0, -36.0,
];

/// Common denominator of the window-11 tableau
const SAVGOL_NORM: f32 = 429.0;

/// Half-width of the smoothing kernel: (11 - 1) / 2
const SAVGOL_HALF: usize = 5;

/// Deterministic DSP chain applied to every analysis window before scoring
///
/// The conditioner is stateless; one instance can be reused across windows
/// and sessions.
#[derive(Debug, Clone, Default)]
pub struct SignalConditioner;

impl SignalConditioner {
    /// Create a new conditioner
    pub fn new() -> Self {
        Self
    }

    /// Run the full chain on an analysis window
    ///
    /// The output window has the same length as the input and never aliases
    /// it.
    pub fn condition(&self, window: &AnalysisWindow) -> ConditionedWindow {
        let sanitized = self.sanitize(window.samples());
        let detrended = self.detrend_linear(&sanitized);
        ConditionedWindow::new(self.smooth(&detrended))
    }

    /// Replace non-finite samples with 0.0
    ///
    /// Values at finite positions pass through unchanged. Never fails.
    pub fn sanitize(&self, samples: &[f32]) -> Vec<f32> {
        samples
            .iter()
            .map(|&s| if s.is_finite() { s } else { 0.0 })
            .collect()
    }

    /// Subtract the ordinary least-squares line fitted over the sample index
    ///
    /// Fits `y = m·i + c` using the closed-form sums of `i`, `y`, `i·y` and
    /// `i²`, then subtracts the fitted line from every sample. Sums are
    /// accumulated in `f64`: at 2500 samples Σi² is on the order of 5e9,
    /// beyond what `f32` can hold exactly.
    ///
    /// If the denominator `n·Σi² − (Σi)²` is exactly zero (window length
    /// ≤ 1) the input is returned unchanged.
    pub fn detrend_linear(&self, samples: &[f32]) -> Vec<f32> {
        let n = samples.len() as f64;
        let mut sum_x = 0.0f64;
        let mut sum_y = 0.0f64;
        let mut sum_xy = 0.0f64;
        let mut sum_xx = 0.0f64;

        for (i, &y) in samples.iter().enumerate() {
            let x = i as f64;
            let y = y as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            return samples.to_vec();
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        samples
            .iter()
            .enumerate()
            .map(|(i, &y)| y - (slope * i as f64 + intercept) as f32)
            .collect()
    }

    /// Apply the 11-tap Savitzky-Golay smoothing kernel
    ///
    /// The convolution is centered. At the first and last five positions
    /// the kernel index is clamped to the nearest valid boundary sample
    /// instead of zero-padding, which avoids the artificial amplitude decay
    /// zero-padding would introduce at the window edges.
    pub fn smooth(&self, samples: &[f32]) -> Vec<f32> {
        if samples.is_empty() {
            return Vec::new();
        }

        let last = samples.len() - 1;
        let mut out = Vec::with_capacity(samples.len());

        for i in 0..samples.len() {
            let mut acc = 0.0f32;
            for (j, &coeff) in SAVGOL_COEFFS.iter().enumerate() {
                // Signed offset in [-5, 5], clamped to the window bounds
                let idx = (i as isize + j as isize - SAVGOL_HALF as isize)
                    .clamp(0, last as isize) as usize;
                acc += samples[idx] * coeff;
            }
            out.push(acc / SAVGOL_NORM);
        }

        out
    }
}

/// Convenience function running the full chain on a bare sample slice
pub fn condition(samples: &[f32]) -> Vec<f32> {
    SignalConditioner::new()
        .condition(&AnalysisWindow::new(samples.to_vec()))
        .into_samples()
}

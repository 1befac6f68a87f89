//! The inference-oracle seam
//!
//! The scorer treats the reconstruction model as a black box behind this
//! trait. Model loading, tensor-runtime lifecycle and hardware acceleration
//! all live with the implementor; the pipeline only ever sees a
//! vector-in/vector-out call that may fail.

use ecg_core::Result;

/// A black-box reconstruction model
///
/// Given a mean-centered signal vector the oracle returns a same-length
/// reconstruction of it. The scorer derives the anomaly signal from how far
/// the reconstruction lands from the input.
///
/// Implementations may block or suspend inside [`infer`](Self::infer); the
/// pipeline scores one window at a time, so callers who cannot tolerate a
/// stalled model should impose their own timeout around the call.
pub trait InferenceOracle {
    /// Reconstruct a centered window
    ///
    /// # Errors
    /// Any failure (runtime fault, session teardown, device loss) is
    /// reported as [`ecg_core::Error::Inference`]. A failed call abandons
    /// scoring for this window only; the pipeline continues with the next.
    fn infer(&self, window: &[f32]) -> Result<Vec<f32>>;

    /// Short human-readable model identifier for diagnostics
    fn model_name(&self) -> &'static str {
        "unnamed-oracle"
    }
}

// Allow passing oracles by reference
impl<O: InferenceOracle + ?Sized> InferenceOracle for &O {
    fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
        (**self).infer(window)
    }

    fn model_name(&self) -> &'static str {
        (**self).model_name()
    }
}

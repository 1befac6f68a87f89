//! # ecg-guard
//!
//! Streaming anomaly detection for single-lead ECG: a sliding-window
//! buffer, a deterministic conditioning chain, a statistical quality gate,
//! and reconstruction-error scoring with structural false-positive
//! suppression.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`ecg_core`] — shared error type, raw batch decoding, window types
//! - [`ecg_dsp`] — sanitize → detrend → smooth conditioning and the gate
//! - [`ecg_anomaly`] — the inference-oracle seam and the anomaly scorer
//! - [`ecg_stream`] — window buffer, pipeline orchestration, session
//!   ingestion
//!
//! ## Quick start
//!
//! ```rust
//! use ecg_guard::{InferenceOracle, RawBatch, Result, StreamPipeline, Verdict};
//!
//! struct Identity;
//!
//! impl InferenceOracle for Identity {
//!     fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
//!         Ok(window.to_vec())
//!     }
//! }
//!
//! let mut pipeline = StreamPipeline::new(Identity);
//! let counts: Vec<i16> = (0..2500)
//!     .map(|i| ((i as f32 * 0.0251).sin() * 1000.0) as i16)
//!     .collect();
//!
//! let decision = pipeline.push_batch(&RawBatch::from_samples(counts)).unwrap();
//! assert_eq!(decision.verdict(), Verdict::Normal);
//! ```

pub use ecg_anomaly;
pub use ecg_core;
pub use ecg_dsp;
pub use ecg_stream;

pub use ecg_anomaly::{AnomalyScorer, InferenceOracle, ScoreResult, ScorerParameters};
pub use ecg_core::{
    AnalysisWindow, ConditionedWindow, Error, RawBatch, Result, DEFAULT_ADC_SCALE, WINDOW_LEN,
};
pub use ecg_dsp::{ArtifactKind, GateParameters, QualityGate, SignalConditioner};
pub use ecg_stream::{
    batch_channel, BatchReceiver, BatchSender, BufferParameters, Decision, PipelineParameters,
    SampleWindowBuffer, StreamPipeline, StreamSession, Verdict,
};

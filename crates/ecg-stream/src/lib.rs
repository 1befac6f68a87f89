//! Streaming orchestration for the ecg-guard pipeline
//!
//! Accumulates raw transport batches into a sliding window buffer, runs
//! each produced window through conditioning, quality gating and anomaly
//! scoring, and emits one [`Decision`] per window.
//!
//! ## Usage
//!
//! ```rust
//! use ecg_core::{RawBatch, Result};
//! use ecg_stream::{StreamPipeline, Verdict};
//! use ecg_anomaly::InferenceOracle;
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
//!
//! // A sensor batch: 1 mV sine in raw ADC counts
//! let counts: Vec<i16> = (0..2500)
//!     .map(|i| ((i as f32 * 0.0251).sin() * 1000.0) as i16)
//!     .collect();
//!
//! let decision = pipeline.push_batch(&RawBatch::from_samples(counts)).unwrap();
//! assert_eq!(decision.verdict(), Verdict::Normal);
//! ```

pub mod buffer;
pub mod pipeline;
pub mod session;
pub mod types;

pub use buffer::{BufferParameters, SampleWindowBuffer};
pub use pipeline::{PipelineParameters, StreamPipeline};
pub use session::{batch_channel, BatchReceiver, BatchSender, StreamSession};
pub use types::{Decision, Verdict};

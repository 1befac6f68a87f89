//! Pipeline orchestration
//!
//! Wires buffer → conditioner → gate → scorer for every arriving batch and
//! emits one [`Decision`] per produced window. This is the sole layer that
//! decides how failures surface: the DSP, gate and scorer stay pure, and
//! every fault here degrades to "no score this cycle" rather than stopping
//! the stream.

use crate::buffer::{BufferParameters, SampleWindowBuffer};
use crate::types::{Decision, Verdict};
use ecg_anomaly::{AnomalyScorer, InferenceOracle, ScorerParameters};
use ecg_core::{AnalysisWindow, RawBatch, Result, DEFAULT_ADC_SCALE};
use ecg_dsp::{GateParameters, QualityGate, SignalConditioner};
use std::time::Instant;
use tracing::{debug, warn};

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParameters {
    /// Fixed-point scale applied to raw ADC counts (counts → millivolts)
    pub adc_scale: f32,
    /// Window buffer thresholds
    pub buffer: BufferParameters,
    /// Quality gate thresholds
    pub gate: GateParameters,
    /// Anomaly scorer thresholds
    pub scorer: ScorerParameters,
}

impl Default for PipelineParameters {
    fn default() -> Self {
        Self {
            adc_scale: DEFAULT_ADC_SCALE,
            buffer: BufferParameters::default(),
            gate: GateParameters::default(),
            scorer: ScorerParameters::default(),
        }
    }
}

/// Streaming pipeline: one instance per active session
///
/// Owns the buffer exclusively and scores one window at a time, so latency
/// semantics stay well defined: each decision's `latency_ms` covers exactly
/// the conditioning, gating and scoring of its own window.
pub struct StreamPipeline<O: InferenceOracle> {
    oracle: O,
    buffer: SampleWindowBuffer,
    conditioner: SignalConditioner,
    gate: QualityGate,
    scorer: AnomalyScorer,
    adc_scale: f32,
    latest_window: Option<Vec<f32>>,
}

impl<O: InferenceOracle> StreamPipeline<O> {
    /// Create a pipeline with default parameters around the given oracle
    pub fn new(oracle: O) -> Self {
        // Default parameters are statically valid
        Self::with_parameters(oracle, PipelineParameters::default()).unwrap()
    }

    /// Create a pipeline with explicit parameters
    pub fn with_parameters(oracle: O, params: PipelineParameters) -> Result<Self> {
        Ok(Self {
            oracle,
            buffer: SampleWindowBuffer::with_parameters(params.buffer)?,
            conditioner: SignalConditioner::new(),
            gate: QualityGate::with_parameters(params.gate),
            scorer: AnomalyScorer::with_parameters(params.scorer),
            adc_scale: params.adc_scale,
            latest_window: None,
        })
    }

    /// Ingest one raw transport batch
    ///
    /// Applies the ADC scale, appends to the buffer, and — once the buffer
    /// has reached the required size — takes and processes a window.
    /// Returns `None` while still buffering; afterwards every batch yields
    /// a decision (the overlapping-window cadence).
    pub fn push_batch(&mut self, batch: &RawBatch) -> Option<Decision> {
        let scaled = batch.to_scaled(self.adc_scale);
        self.push_samples(&scaled)
    }

    /// Ingest pre-scaled samples directly
    pub fn push_samples(&mut self, samples: &[f32]) -> Option<Decision> {
        self.buffer.append(samples);
        let window = self.buffer.try_take_window()?;
        Some(self.process_window(&window))
    }

    /// Condition, gate and score one window
    fn process_window(&mut self, window: &AnalysisWindow) -> Decision {
        let started = Instant::now();

        let conditioned = self.conditioner.condition(window);

        if let Some(artifact) = self.gate.evaluate(&conditioned) {
            warn!(%artifact, "signal dropped by gatekeeper");
            return Decision::artifact_rejected(elapsed_ms(started));
        }

        match self.scorer.score(&conditioned, &self.oracle) {
            Ok(result) => {
                let verdict = if result.final_error() > self.scorer.parameters().error_threshold {
                    Verdict::Anomalous
                } else {
                    Verdict::Normal
                };
                debug!(
                    mse = result.final_error(),
                    structural = result.is_structural(),
                    %verdict,
                    "window scored"
                );
                let decision = Decision::new(
                    result.final_error(),
                    result.is_structural(),
                    verdict,
                    elapsed_ms(started),
                );
                self.latest_window = Some(result.into_centered());
                decision
            }
            Err(error) => {
                // A single failed inference must never stop the stream
                warn!(model = self.oracle.model_name(), %error, "inference failed");
                Decision::artifact_rejected(elapsed_ms(started))
            }
        }
    }

    /// The most recent centered window that reached scoring, for rendering
    pub fn latest_window(&self) -> Option<&[f32]> {
        self.latest_window.as_deref()
    }

    /// Atomic session reset: clears buffer, counters and the presentation
    /// snapshot
    ///
    /// Exclusive access is guaranteed by `&mut self`, so no decision from a
    /// prior session can be attributed to the new one.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.latest_window = None;
        debug!("pipeline reset for new session");
    }

    /// Buffer diagnostics (packet counters, arrival timestamps)
    pub fn buffer(&self) -> &SampleWindowBuffer {
        &self.buffer
    }

    /// The oracle this pipeline scores against
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1_000.0
}

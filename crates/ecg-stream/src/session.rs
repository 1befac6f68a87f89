//! Session ingestion channel
//!
//! When the transport collaborator delivers batches on a different thread
//! than the one running conditioning and inference, the handoff goes
//! through a bounded, ordered channel: batches arrive at the pipeline in
//! exactly the order the sensor produced them, and a slow consumer applies
//! backpressure to the producer instead of reordering or dropping silently.

use crate::pipeline::StreamPipeline;
use crate::types::Decision;
use ecg_anomaly::InferenceOracle;
use ecg_core::{Error, RawBatch, Result};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use tracing::debug;

/// Producer half of the batch handoff
///
/// Cloneable handle given to the transport collaborator. Sending blocks
/// once the channel is full.
#[derive(Debug, Clone)]
pub struct BatchSender {
    inner: SyncSender<RawBatch>,
}

impl BatchSender {
    /// Enqueue one batch for the session
    ///
    /// # Errors
    /// [`Error::Stream`] if the session has ended and the receiver is gone.
    pub fn send(&self, batch: RawBatch) -> Result<()> {
        self.inner
            .send(batch)
            .map_err(|_| Error::Stream("session receiver dropped".to_string()))
    }
}

/// Consumer half of the batch handoff
#[derive(Debug)]
pub struct BatchReceiver {
    inner: Receiver<RawBatch>,
}

/// Create a bounded FIFO handoff for raw batches
///
/// `capacity` bounds how many undelivered batches may queue up; sensor
/// packets are small, so a few dozen slots is plenty.
pub fn batch_channel(capacity: usize) -> (BatchSender, BatchReceiver) {
    let (tx, rx) = sync_channel(capacity);
    (BatchSender { inner: tx }, BatchReceiver { inner: rx })
}

/// One active stream session: a pipeline fed from a batch channel
///
/// Constructing a session resets the pipeline, so decisions can never be
/// attributed across a reconnect.
pub struct StreamSession<O: InferenceOracle> {
    pipeline: StreamPipeline<O>,
    receiver: BatchReceiver,
}

impl<O: InferenceOracle> StreamSession<O> {
    /// Start a session with a default pipeline around the given oracle
    pub fn new(oracle: O, receiver: BatchReceiver) -> Self {
        Self::with_pipeline(StreamPipeline::new(oracle), receiver)
    }

    /// Start a session reusing an existing pipeline (cleared first)
    pub fn with_pipeline(mut pipeline: StreamPipeline<O>, receiver: BatchReceiver) -> Self {
        pipeline.reset();
        Self { pipeline, receiver }
    }

    /// Process batches in arrival order until the sender disconnects
    ///
    /// Each produced decision is handed to `on_decision` before the next
    /// batch is taken off the channel. Returns the pipeline so the caller
    /// can read end-of-session diagnostics.
    pub fn run(mut self, mut on_decision: impl FnMut(Decision)) -> StreamPipeline<O> {
        for batch in self.receiver.inner.iter() {
            if let Some(decision) = self.pipeline.push_batch(&batch) {
                on_decision(decision);
            }
        }
        debug!(
            packets = self.pipeline.buffer().packet_count(),
            "session ended"
        );
        self.pipeline
    }
}

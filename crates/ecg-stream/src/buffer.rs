//! Sliding sample window buffer
//!
//! Accumulates scaled samples from irregular transport batches and exposes
//! fixed-length analysis windows over the most recent signal. The buffer is
//! the single owner of its backing storage; the orchestrator holds it by
//! exclusive reference and no other component mutates it.

use ecg_core::{AnalysisWindow, Error, Result};
use std::collections::VecDeque;
use std::time::Instant;
use tracing::trace;

/// Sizing thresholds for the window buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferParameters {
    /// Minimum buffered length before a window can be taken (10 s @ 250 Hz)
    pub required_size: usize,
    /// Hard cap on buffered length
    pub max_size: usize,
    /// Fixed eviction quantum removed from the head per eviction event (1 s)
    pub trim_chunk: usize,
}

impl Default for BufferParameters {
    fn default() -> Self {
        Self {
            required_size: 2500,
            max_size: 3000,
            trim_chunk: 250,
        }
    }
}

impl BufferParameters {
    fn validate(&self) -> Result<()> {
        if self.required_size == 0 || self.required_size > self.max_size {
            return Err(Error::InvalidParameter(format!(
                "required_size {} must be in 1..={}",
                self.required_size, self.max_size
            )));
        }
        if self.trim_chunk == 0 || self.trim_chunk > self.max_size {
            return Err(Error::InvalidParameter(format!(
                "trim_chunk {} must be in 1..={}",
                self.trim_chunk, self.max_size
            )));
        }
        Ok(())
    }
}

/// Append-only sliding buffer of floating-point ECG samples
///
/// Invariant: `len ≤ max_size` after every append. When an append pushes the
/// length past the cap, exactly one `trim_chunk` of the oldest samples is
/// dropped per eviction event until the invariant holds again.
///
/// The packet counter and arrival timestamps are transport-level
/// diagnostics: maintained here because the buffer sees every batch, but
/// only exposed, never interpreted.
#[derive(Debug)]
pub struct SampleWindowBuffer {
    samples: VecDeque<f32>,
    params: BufferParameters,
    packet_count: u64,
    first_packet_at: Option<Instant>,
    last_packet_at: Option<Instant>,
}

impl Default for SampleWindowBuffer {
    fn default() -> Self {
        // Default parameters are statically valid
        Self::with_parameters(BufferParameters::default()).unwrap()
    }
}

impl SampleWindowBuffer {
    /// Create a buffer with the default 2500/3000/250 thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with explicit thresholds
    pub fn with_parameters(params: BufferParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            samples: VecDeque::with_capacity(params.max_size),
            params,
            packet_count: 0,
            first_packet_at: None,
            last_packet_at: None,
        })
    }

    /// Append one batch worth of scaled samples at the tail
    ///
    /// The caller has already applied any fixed-point scale factor. Updates
    /// the packet counter and arrival timestamps, then evicts from the head
    /// in `trim_chunk` quanta while the length exceeds `max_size`.
    pub fn append(&mut self, samples: &[f32]) {
        let now = Instant::now();
        self.first_packet_at.get_or_insert(now);
        self.last_packet_at = Some(now);
        self.packet_count += 1;

        self.samples.extend(samples.iter().copied());

        while self.samples.len() > self.params.max_size {
            self.samples.drain(..self.params.trim_chunk);
            trace!(
                evicted = self.params.trim_chunk,
                remaining = self.samples.len(),
                "buffer trimmed"
            );
        }
    }

    /// Snapshot the most recent `required_size` samples as a window
    ///
    /// Returns `None` while the buffer is still filling. Does not mutate
    /// the buffer: the orchestrator calls this once per append, so
    /// consecutive windows overlap, sliding by the batch size.
    pub fn try_take_window(&self) -> Option<AnalysisWindow> {
        if self.samples.len() < self.params.required_size {
            return None;
        }
        let start = self.samples.len() - self.params.required_size;
        Some(AnalysisWindow::new(
            self.samples.iter().skip(start).copied().collect(),
        ))
    }

    /// Empty the buffer and reset all counters (session reset)
    pub fn clear(&mut self) {
        self.samples.clear();
        self.packet_count = 0;
        self.first_packet_at = None;
        self.last_packet_at = None;
    }

    /// Current buffered length in samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of batches appended this session
    pub fn packet_count(&self) -> u64 {
        self.packet_count
    }

    /// Arrival instant of the first batch this session
    pub fn first_packet_at(&self) -> Option<Instant> {
        self.first_packet_at
    }

    /// Arrival instant of the most recent batch
    pub fn last_packet_at(&self) -> Option<Instant> {
        self.last_packet_at
    }

    /// The buffer's sizing thresholds
    pub fn parameters(&self) -> &BufferParameters {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_buffer() -> SampleWindowBuffer {
        SampleWindowBuffer::with_parameters(BufferParameters {
            required_size: 10,
            max_size: 16,
            trim_chunk: 4,
        })
        .unwrap()
    }

    #[test]
    fn test_no_window_while_filling() {
        let mut buffer = small_buffer();
        buffer.append(&[1.0; 9]);
        assert!(buffer.try_take_window().is_none());
        buffer.append(&[1.0]);
        assert_eq!(buffer.try_take_window().unwrap().len(), 10);
    }

    #[test]
    fn test_window_is_most_recent_samples() {
        let mut buffer = small_buffer();
        let samples: Vec<f32> = (0..12).map(|i| i as f32).collect();
        buffer.append(&samples);
        let window = buffer.try_take_window().unwrap();
        assert_eq!(window.samples()[0], 2.0);
        assert_eq!(window.samples()[9], 11.0);
    }

    #[test]
    fn test_take_window_does_not_mutate() {
        let mut buffer = small_buffer();
        buffer.append(&[0.5; 12]);
        let _ = buffer.try_take_window();
        let _ = buffer.try_take_window();
        assert_eq!(buffer.len(), 12);
    }

    #[test]
    fn test_eviction_removes_exactly_one_chunk() {
        let mut buffer = small_buffer();
        buffer.append(&[0.0; 16]);
        assert_eq!(buffer.len(), 16);
        // One sample over the cap still costs a full trim_chunk
        buffer.append(&[1.0]);
        assert_eq!(buffer.len(), 13);
    }

    #[test]
    fn test_len_never_exceeds_max_size() {
        let mut buffer = small_buffer();
        for _ in 0..50 {
            buffer.append(&[0.25; 7]);
            assert!(buffer.len() <= 16, "len {} exceeded max_size", buffer.len());
        }
    }

    #[test]
    fn test_oversized_batch_trims_in_chunks() {
        let mut buffer = small_buffer();
        let samples: Vec<f32> = (0..40).map(|i| i as f32).collect();
        buffer.append(&samples);
        // 40 → 36 → ... → 16: six eviction events of exactly 4
        assert_eq!(buffer.len(), 16);
        // The newest samples survive
        let window = buffer.try_take_window().unwrap();
        assert_eq!(*window.samples().last().unwrap(), 39.0);
    }

    #[test]
    fn test_packet_diagnostics() {
        let mut buffer = small_buffer();
        assert_eq!(buffer.packet_count(), 0);
        assert!(buffer.first_packet_at().is_none());

        buffer.append(&[1.0, 2.0]);
        buffer.append(&[3.0]);
        assert_eq!(buffer.packet_count(), 2);
        assert!(buffer.first_packet_at().is_some());
        assert!(buffer.last_packet_at() >= buffer.first_packet_at());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut buffer = small_buffer();
        buffer.append(&[1.0; 12]);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.packet_count(), 0);
        assert!(buffer.first_packet_at().is_none());
        assert!(buffer.try_take_window().is_none());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let result = SampleWindowBuffer::with_parameters(BufferParameters {
            required_size: 20,
            max_size: 16,
            trim_chunk: 4,
        });
        assert!(result.is_err());

        let result = SampleWindowBuffer::with_parameters(BufferParameters {
            required_size: 10,
            max_size: 16,
            trim_chunk: 0,
        });
        assert!(result.is_err());
    }
}

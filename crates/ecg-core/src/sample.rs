//! Raw sample batches as delivered by the transport collaborator
//!
//! A wireless sensor notification carries a small payload of little-endian
//! signed 16-bit ADC counts. The transport layer hands each payload to the
//! pipeline as one [`RawBatch`]; batch sizes vary from a single sample to a
//! few dozen and carry no cadence guarantee.

/// Default fixed-point scale converting raw ADC counts to millivolts
pub const DEFAULT_ADC_SCALE: f32 = 1e-3;

/// One transport notification's worth of raw ECG samples
///
/// Immutable once built. Decoding consumes complete little-endian pairs
/// only; a trailing odd byte is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBatch {
    samples: Vec<i16>,
}

impl RawBatch {
    /// Decode a notification payload of little-endian i16 pairs
    pub fn from_payload(payload: &[u8]) -> Self {
        let samples = payload
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Self { samples }
    }

    /// Build a batch from already-decoded samples
    pub fn from_samples(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// The decoded samples, in arrival order
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Number of samples in this batch
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the batch carries no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Convert to floating point with a fixed-point scale applied
    ///
    /// The sensor emits integer ADC counts; `scale` maps them to the
    /// physical unit the downstream thresholds were tuned against
    /// (millivolts, via [`DEFAULT_ADC_SCALE`]).
    pub fn to_scaled(&self, scale: f32) -> Vec<f32> {
        self.samples.iter().map(|&s| s as f32 * scale).collect()
    }
}

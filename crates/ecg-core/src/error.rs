//! Error types for the ecg-guard pipeline
//!
//! Provides a unified error type shared by all ecg-guard crates.

use thiserror::Error;

/// Core error type for pipeline operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor or function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Signal length doesn't match the expected window length
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The inference oracle failed for this window (recoverable)
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Ingestion channel closed or otherwise unusable
    #[error("Stream error: {0}")]
    Stream(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for mismatched signal lengths
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an error for a failed oracle call
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }
}

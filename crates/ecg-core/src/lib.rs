//! Shared types for the ecg-guard streaming pipeline
//!
//! This crate holds what every other ecg-guard crate needs: the unified
//! error type, decoding of raw transport sample batches, and the window
//! value types that flow through the pipeline.

pub mod error;
pub mod sample;
pub mod window;

pub use error::{Error, Result};
pub use sample::{RawBatch, DEFAULT_ADC_SCALE};
pub use window::{AnalysisWindow, ConditionedWindow, WINDOW_LEN};

//! Deterministic ECG signal conditioning and quality gating
//!
//! This crate holds the purely deterministic part of the ecg-guard pipeline:
//! the sanitize → detrend → smooth conditioning chain and the statistical
//! gate that rejects mechanically invalid windows before scoring.
//!
//! ## Usage
//!
//! ```rust
//! use ecg_core::AnalysisWindow;
//! use ecg_dsp::{QualityGate, SignalConditioner};
//!
//! let raw: Vec<f32> = (0..2500)
//!     .map(|i| (i as f32 * 0.05).sin() + 0.001 * i as f32)
//!     .collect();
//!
//! let conditioner = SignalConditioner::new();
//! let conditioned = conditioner.condition(&AnalysisWindow::new(raw));
//!
//! let gate = QualityGate::new();
//! assert!(gate.is_acceptable(&conditioned));
//! ```

pub mod conditioner;
pub mod gate;

pub use conditioner::{condition, SignalConditioner};
pub use gate::{ArtifactKind, GateParameters, QualityGate};

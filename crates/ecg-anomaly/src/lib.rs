//! Reconstruction-error anomaly scoring
//!
//! Scores conditioned ECG windows against a black-box reconstruction model:
//! center → infer → interpret the mean squared error → suppress diffuse
//! (non-structural) false positives.
//!
//! The model itself lives behind the [`InferenceOracle`] trait; this crate
//! knows nothing about tensors, runtimes or hardware.
//!
//! ## Usage
//!
//! ```rust
//! use ecg_anomaly::{AnomalyScorer, InferenceOracle};
//! use ecg_core::{ConditionedWindow, Result};
//!
//! struct Identity;
//!
//! impl InferenceOracle for Identity {
//!     fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
//!         Ok(window.to_vec())
//!     }
//! }
//!
//! let window = ConditionedWindow::new(vec![0.1, -0.2, 0.3, -0.1]);
//! let result = AnomalyScorer::new().score(&window, &Identity).unwrap();
//! assert_eq!(result.final_error(), 0.0);
//! ```

pub mod scorer;
pub mod traits;
pub mod types;

pub use scorer::{AnomalyScorer, ScorerParameters};
pub use traits::InferenceOracle;
pub use types::ScoreResult;

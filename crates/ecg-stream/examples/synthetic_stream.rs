//! Synthetic sensor stream driving the full pipeline
//!
//! Simulates a wireless ECG sensor on a producer thread: irregular batch
//! sizes, a clean stretch, a motion-artifact stretch, and a morphology
//! change the mock oracle cannot reconstruct.

use ecg_anomaly::InferenceOracle;
use ecg_core::{RawBatch, Result};
use ecg_stream::{batch_channel, StreamSession, Verdict};
use rand::prelude::*;
use rand_distr::Normal;
use std::f32::consts::PI;
use std::thread;

/// Mock reconstruction model: faithful below QRS amplitude, blind above it
///
/// A stand-in for the autoencoder with the same failure signature a real
/// model shows on unseen morphology.
struct MockAutoencoder;

impl InferenceOracle for MockAutoencoder {
    fn infer(&self, window: &[f32]) -> Result<Vec<f32>> {
        Ok(window
            .iter()
            .map(|&v| if v.abs() <= 0.4 { v } else { 0.0 })
            .collect())
    }

    fn model_name(&self) -> &'static str {
        "mock-autoencoder"
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ecg_stream=debug".into()),
        )
        .init();

    let (tx, rx) = batch_channel(32);

    let producer = thread::spawn(move || {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = Normal::new(0.0f32, 20.0).unwrap();
        let mut t = 0usize;

        // Phase 1: ~12 s of quiet normal rhythm (low amplitude, noisy)
        // Phase 2: ~4 s of high-amplitude beats the mock model cannot track
        // Phase 3: ~4 s of railed signal (electrode motion)
        let mut emit = |amplitude_counts: f32, seconds: usize, railed: bool| {
            let mut remaining = seconds * 250;
            while remaining > 0 {
                let batch_len = rng.gen_range(1..=24).min(remaining);
                let samples: Vec<i16> = (0..batch_len)
                    .map(|_| {
                        let value = if railed {
                            8000.0
                        } else {
                            amplitude_counts * (2.0 * PI * t as f32 / 250.0).sin()
                                + noise.sample(&mut rng)
                        };
                        t += 1;
                        value as i16
                    })
                    .collect();
                remaining -= batch_len;
                if tx.send(RawBatch::from_samples(samples)).is_err() {
                    return;
                }
            }
        };

        emit(300.0, 12, false);
        emit(1800.0, 4, false);
        emit(0.0, 4, true);
    });

    let mut counts = [0usize; 3];
    let pipeline = StreamSession::new(MockAutoencoder, rx).run(|decision| {
        match decision.verdict() {
            Verdict::Normal => counts[0] += 1,
            Verdict::Anomalous => counts[1] += 1,
            Verdict::ArtifactRejected => counts[2] += 1,
        }
        println!("{decision}");
    });
    producer.join().expect("producer thread panicked");

    println!("\n=== Session summary ===");
    println!("Packets received:  {}", pipeline.buffer().packet_count());
    println!("Normal windows:    {}", counts[0]);
    println!("Anomalous windows: {}", counts[1]);
    println!("Rejected windows:  {}", counts[2]);

    Ok(())
}

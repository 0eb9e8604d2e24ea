use serde::{Serialize, Deserialize};
use std::f32::consts::PI;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Square,
    Triangle,
    Noise,
}

/// Number of samples spanning `[0, duration)` at the given rate.
///
/// The cast saturates to zero for non-positive durations, so degenerate
/// inputs produce an empty buffer.
fn sample_count(duration: f32, sample_rate: u32) -> usize {
    (sample_rate as f32 * duration) as usize
}

/// Bipolar square wave: `amplitude * sign(sin(2π f t))`.
pub fn square_wave(frequency: f32, duration: f32, amplitude: f32, sample_rate: u32) -> Vec<f32> {
    (0..sample_count(duration, sample_rate))
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            amplitude * (2.0 * PI * frequency * t).sin().signum()
        })
        .collect()
}

/// Triangle wave ramping linearly between `-amplitude` and `amplitude`,
/// period `1/frequency`, starting at the trough.
pub fn triangle_wave(frequency: f32, duration: f32, amplitude: f32, sample_rate: u32) -> Vec<f32> {
    (0..sample_count(duration, sample_rate))
        .map(|i| {
            let x = frequency * i as f32 / sample_rate as f32;
            amplitude * (2.0 * (2.0 * (x - (x + 0.5).floor())).abs() - 1.0)
        })
        .collect()
}

/// White noise: each sample drawn independently from `[-amplitude, amplitude)`.
pub fn noise<R: Rng>(duration: f32, amplitude: f32, sample_rate: u32, rng: &mut R) -> Vec<f32> {
    (0..sample_count(duration, sample_rate))
        .map(|_| amplitude * (rng.random::<f32>() * 2.0 - 1.0))
        .collect()
}

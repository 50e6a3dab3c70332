// src/core/analysis/spectral.rs
//
// Whole-recording spectral centroid.
// One real FFT over the full (windowed) signal, no framing.

use log::warn;
use num_complex::Complex;
use realfft::RealFftPlanner;

use crate::core::decoder::Signal;
use crate::core::dsp::{apply_window, WindowType};

/// Spectral centroid in Hz using a Hann window.
///
/// Returns 0.0 for an empty signal, a zero sample rate, or a spectrum with
/// no energy.
pub fn compute_centroid(signal: &Signal) -> f64 {
    compute_centroid_with_window(signal, WindowType::Hann)
}

/// Spectral centroid in Hz using the given window
pub fn compute_centroid_with_window(signal: &Signal, window: WindowType) -> f64 {
    let n = signal.len();
    if n == 0 || signal.sample_rate == 0 {
        return 0.0;
    }

    let magnitudes = magnitude_spectrum(&signal.samples, window);
    let total: f64 = magnitudes.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let bin_hz = signal.sample_rate as f64 / n as f64;
    let weighted: f64 = magnitudes
        .iter()
        .enumerate()
        .map(|(k, &m)| k as f64 * bin_hz * m)
        .sum();

    weighted / total
}

/// One-sided magnitude spectrum (`n / 2 + 1` bins) of the windowed samples
pub fn magnitude_spectrum(samples: &[f64], window: WindowType) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut planner = RealFftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(samples.len());

    let mut input = apply_window(samples, window);
    let mut spectrum: Vec<Complex<f64>> = fft.make_output_vec();

    if let Err(e) = fft.process(&mut input, &mut spectrum) {
        warn!("real FFT of {} samples failed: {}", samples.len(), e);
        return Vec::new();
    }

    spectrum.iter().map(|c| c.norm()).collect()
}

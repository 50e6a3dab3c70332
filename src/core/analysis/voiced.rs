// src/core/analysis/voiced.rs
//
// Energy-gated voiced duration: counts whole 20 ms frames whose RMS clears
// a silence threshold. This is a coarse activity estimate, not a speech
// detector.

use crate::core::decoder::Signal;
use crate::core::dsp::rms;

/// Frame RMS (16-bit PCM scale) below which a frame counts as silent
pub const DEFAULT_SILENCE_THRESHOLD: f64 = 100.0;

/// Analysis frame length in seconds
pub const FRAME_SECONDS: f64 = 0.020;

/// Samples per analysis frame for the given rate
pub fn frame_length(sample_rate: u32) -> usize {
    let truncated = (sample_rate as f64 * FRAME_SECONDS) as usize;
    if truncated > 0 {
        truncated
    } else {
        ((sample_rate / 50) as usize).max(1)
    }
}

/// Voiced duration in seconds with the default silence threshold
pub fn effective_duration(signal: &Signal) -> f64 {
    effective_duration_with_threshold(signal, DEFAULT_SILENCE_THRESHOLD)
}

/// Sum of the durations of complete frames whose RMS is at least
/// `silence_threshold`. A trailing partial frame is never counted.
pub fn effective_duration_with_threshold(signal: &Signal, silence_threshold: f64) -> f64 {
    if signal.is_empty() || signal.sample_rate == 0 {
        return 0.0;
    }

    let frame = frame_length(signal.sample_rate);
    let voiced_frames = signal
        .samples
        .chunks_exact(frame)
        .filter(|chunk| rms(chunk) >= silence_threshold)
        .count();

    (voiced_frames * frame) as f64 / signal.sample_rate as f64
}

//! Audio analysis algorithms
//!
//! - Spectral centroid of a whole recording
//! - Voiced (energy-gated) duration
//! - Basic amplitude, clipping and frame statistics

mod base;
mod spectral;
mod voiced;

pub use base::{
    BaseAnalysis, BaseAnalyzer, BaseStats, FrameStats, PcmBaseAnalyzer,
    STATS_FRAME_SAMPLES, STATS_SILENCE_RMS,
};
pub use spectral::{compute_centroid, compute_centroid_with_window, magnitude_spectrum};
pub use voiced::{
    effective_duration, effective_duration_with_threshold, frame_length,
    DEFAULT_SILENCE_THRESHOLD, FRAME_SECONDS,
};

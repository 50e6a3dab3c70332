// src/core/descriptor.rs
//
// Per-recording descriptor: spectral centroid, DC offset and voiced
// duration packaged with the sample count and rate.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::analysis::{compute_centroid_with_window, effective_duration_with_threshold};
use super::decoder::{SampleSource, Signal};
use super::dsp::mean;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Descriptor of a single recording
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingDescriptor {
    pub spectral_centroid_hz: f64,
    /// Mean sample amplitude
    pub dc_offset: f64,
    pub effective_duration_s: f64,
    #[serde(rename = "length_samples")]
    pub sample_count: usize,
    pub sample_rate: u32,
}

impl RecordingDescriptor {
    /// Total playable duration from sample count and rate
    pub fn total_duration_s(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count as f64 / self.sample_rate as f64
    }
}

/// Describe a signal with the default analysis settings
pub fn describe(signal: &Signal) -> RecordingDescriptor {
    describe_with(signal, &AnalysisConfig::default())
}

/// Describe a signal. Degenerate input (no samples, zero rate) yields zeros.
pub fn describe_with(signal: &Signal, config: &AnalysisConfig) -> RecordingDescriptor {
    if signal.is_empty() || signal.sample_rate == 0 {
        warn!(
            "degenerate signal ({} samples at {} Hz); descriptor will be zero-valued",
            signal.len(),
            signal.sample_rate
        );
    }

    RecordingDescriptor {
        spectral_centroid_hz: compute_centroid_with_window(signal, config.window),
        dc_offset: mean(&signal.samples),
        effective_duration_s: effective_duration_with_threshold(signal, config.silence_threshold),
        sample_count: signal.len(),
        sample_rate: signal.sample_rate,
    }
}

/// Decode `path` through `source` and describe it
pub fn describe_path(
    source: &dyn SampleSource,
    path: &Path,
    config: &AnalysisConfig,
) -> Result<RecordingDescriptor> {
    let pcm = source.decode(path)?;
    let descriptor = describe_with(&pcm.to_signal(), config);
    debug!("{}: {:?}", path.display(), descriptor);
    Ok(descriptor)
}

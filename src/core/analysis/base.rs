// src/core/analysis/base.rs
//
// Basic amplitude and fixed-size frame statistics of a decoded recording.

use serde::{Deserialize, Serialize};

use crate::core::decoder::{HeaderInfo, Pcm16};
use crate::core::dsp::{mean, peak_amplitude, rms};

/// Samples per frame for the frame statistics
pub const STATS_FRAME_SAMPLES: usize = 1024;

/// Frame RMS below which a stats frame is silent
pub const STATS_SILENCE_RMS: f64 = 100.0;

/// Whole-recording amplitude statistics (16-bit PCM scale)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub mean: f64,
    pub rms: f64,
    pub peak: f64,
    /// Samples sitting on either 16-bit rail
    pub clip_count: u64,
    pub clip_ratio: f64,
}

/// Statistics over complete fixed-size frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    pub frame_samples: usize,
    pub frame_count: usize,
    pub silent_frames: usize,
    pub silence_ratio: f64,
    pub min_rms: f64,
    pub max_rms: f64,
    pub mean_rms: f64,
}

/// Header, amplitude and frame statistics of one recording
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseAnalysis {
    pub header: HeaderInfo,
    pub base: BaseStats,
    pub frames: FrameStats,
}

/// Produces [`BaseAnalysis`] for a decoded recording
pub trait BaseAnalyzer: Send + Sync {
    fn analyze(&self, pcm: &Pcm16) -> BaseAnalysis;
}

/// Default analyzer working directly on the PCM16 samples
#[derive(Debug, Clone, Copy)]
pub struct PcmBaseAnalyzer {
    frame_samples: usize,
    silence_rms: f64,
}

impl Default for PcmBaseAnalyzer {
    fn default() -> Self {
        Self {
            frame_samples: STATS_FRAME_SAMPLES,
            silence_rms: STATS_SILENCE_RMS,
        }
    }
}

impl PcmBaseAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_samples(mut self, frame_samples: usize) -> Self {
        self.frame_samples = frame_samples.max(1);
        self
    }

    pub fn with_silence_rms(mut self, silence_rms: f64) -> Self {
        self.silence_rms = silence_rms;
        self
    }
}

impl BaseAnalyzer for PcmBaseAnalyzer {
    fn analyze(&self, pcm: &Pcm16) -> BaseAnalysis {
        let samples: Vec<f64> = pcm.samples.iter().map(|&s| s as f64).collect();
        BaseAnalysis {
            header: pcm.header.clone(),
            base: base_stats(&pcm.samples, &samples),
            frames: frame_stats(&samples, self.frame_samples, self.silence_rms),
        }
    }
}

fn is_clipped(sample: i16) -> bool {
    sample == i16::MAX || sample == i16::MIN
}

fn base_stats(raw: &[i16], samples: &[f64]) -> BaseStats {
    if raw.is_empty() {
        return BaseStats::default();
    }

    let clip_count = raw.iter().filter(|&&s| is_clipped(s)).count() as u64;

    BaseStats {
        mean: mean(samples),
        rms: rms(samples),
        peak: peak_amplitude(samples),
        clip_count,
        clip_ratio: clip_count as f64 / raw.len() as f64,
    }
}

fn frame_stats(samples: &[f64], frame_samples: usize, silence_rms: f64) -> FrameStats {
    let levels: Vec<f64> = samples.chunks_exact(frame_samples).map(rms).collect();

    if levels.is_empty() {
        return FrameStats {
            frame_samples,
            ..FrameStats::default()
        };
    }

    let silent_frames = levels.iter().filter(|&&l| l < silence_rms).count();

    FrameStats {
        frame_samples,
        frame_count: levels.len(),
        silent_frames,
        silence_ratio: silent_frames as f64 / levels.len() as f64,
        min_rms: levels.iter().cloned().fold(f64::INFINITY, f64::min),
        max_rms: levels.iter().cloned().fold(0.0, f64::max),
        mean_rms: mean(&levels),
    }
}

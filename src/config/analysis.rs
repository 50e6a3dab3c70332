// src/config/analysis.rs
//
// Analysis settings. Defaults reproduce the fixed diagnostic policy; the
// observation thresholds themselves live in `core::compare` and are not
// configurable.

use serde::{Deserialize, Serialize};

use crate::core::analysis::DEFAULT_SILENCE_THRESHOLD;
use crate::core::dsp::WindowType;

/// Settings for computing per-recording descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Frame RMS below which a voiced-duration frame is silent
    pub silence_threshold: f64,
    /// Window applied before the spectral transform
    pub window: WindowType,
    /// Compute inbound and outbound descriptors on separate threads
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            silence_threshold: DEFAULT_SILENCE_THRESHOLD,
            window: WindowType::Hann,
            parallel: true,
        }
    }
}

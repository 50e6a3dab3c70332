//! Window function implementations

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window applied to the whole recording before the spectral transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// All-ones window (no tapering)
    Rectangular,
    /// Symmetric raised-cosine window
    #[default]
    Hann,
}

/// Create window coefficients of the given length.
///
/// The Hann window is the symmetric form (zero at both ends), so a
/// single-sample window is `[1.0]` and an empty one is empty.
pub fn create_window(size: usize, window_type: WindowType) -> Vec<f64> {
    match window_type {
        WindowType::Rectangular => vec![1.0; size],
        WindowType::Hann => {
            if size <= 1 {
                return vec![1.0; size];
            }
            let denom = (size - 1) as f64;
            (0..size)
                .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / denom).cos())
                .collect()
        }
    }
}

/// Return the samples multiplied element-wise by a window of the same length.
pub fn apply_window(samples: &[f64], window_type: WindowType) -> Vec<f64> {
    let window = create_window(samples.len(), window_type);
    samples.iter().zip(&window).map(|(s, w)| s * w).collect()
}

//! Digital Signal Processing utilities

mod stats;
mod windows;

pub use stats::{mean, peak_amplitude, rms, safe_ratio, RatioGuard};
pub use windows::{apply_window, create_window, WindowType};

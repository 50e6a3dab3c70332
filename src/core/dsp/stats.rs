//! Amplitude statistics and guarded ratios

/// Arithmetic mean, 0 for an empty slice
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Compute RMS (Root Mean Square)
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Compute peak absolute amplitude
pub fn peak_amplitude(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0f64, f64::max)
}

/// How a ratio protects itself against a small or zero denominator.
///
/// The guards are intentionally distinct per metric; the numbers they
/// produce are part of the report format and must not be unified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioGuard {
    /// `num / max(floor, den)`
    Floor(f64),
    /// `num / den` when `den > 0`, otherwise 0
    PositiveOrZero,
    /// `num / max(floor, den)` when `den != 0`, otherwise 0
    NonZeroFloor(f64),
}

/// Divide with the given guard; never returns NaN or infinity for finite inputs.
pub fn safe_ratio(num: f64, den: f64, guard: RatioGuard) -> f64 {
    match guard {
        RatioGuard::Floor(floor) => num / den.max(floor),
        RatioGuard::PositiveOrZero => {
            if den > 0.0 {
                num / den
            } else {
                0.0
            }
        }
        RatioGuard::NonZeroFloor(floor) => {
            if den != 0.0 {
                num / den.max(floor)
            } else {
                0.0
            }
        }
    }
}

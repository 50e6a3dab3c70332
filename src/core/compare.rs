// src/core/compare.rs
//
// Inbound/outbound comparison: ratio metrics plus a fixed rule set that
// turns them into human-readable observations.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::analysis::BaseStats;
use super::descriptor::RecordingDescriptor;
use super::dsp::{safe_ratio, RatioGuard};

/// Floor for the total-duration denominator
pub const DURATION_EPSILON: f64 = 1e-9;
/// Floor for the RMS denominator (integer PCM scale)
pub const RMS_FLOOR: f64 = 1.0;

/// |DC offset| above which a channel is reported as biased
pub const DC_OFFSET_LIMIT: f64 = 600.0;
/// Outbound clip ratio above which saturation is reported
pub const CLIP_RATIO_LIMIT: f64 = 5e-4;
/// Centroid ratio above which the outbound spectrum is skewed high
pub const CENTROID_RATIO_LIMIT: f64 = 1.3;
/// Voiced-duration ratio below which outbound frames are ending early
pub const VOICED_RATIO_FLOOR: f64 = 0.9;

/// Everything the engine needs to know about one side of the call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMetrics {
    pub descriptor: RecordingDescriptor,
    pub base: BaseStats,
}

impl ChannelMetrics {
    pub fn new(descriptor: RecordingDescriptor, base: BaseStats) -> Self {
        Self { descriptor, base }
    }
}

/// Outbound-relative-to-inbound metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub duration_ratio: f64,
    pub effective_duration_ratio: f64,
    pub spectral_centroid_ratio: f64,
    pub rms_ratio: f64,
    pub dc_offset_diff: f64,
}

/// Which rule produced an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationKind {
    InboundDcBias,
    OutboundDcBias,
    Saturation,
    SpectralSkew,
    VoicedShrink,
}

/// One triggered diagnostic rule.
///
/// Serialises as its message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub kind: ObservationKind,
    pub message: String,
}

impl Observation {
    fn new(kind: ObservationKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Serialize for Observation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}

/// Derive the ratio metrics for an inbound/outbound pair
pub fn compare(inbound: &ChannelMetrics, outbound: &ChannelMetrics) -> ComparisonResult {
    let (din, dout) = (&inbound.descriptor, &outbound.descriptor);

    ComparisonResult {
        duration_ratio: safe_ratio(
            dout.total_duration_s(),
            din.total_duration_s(),
            RatioGuard::Floor(DURATION_EPSILON),
        ),
        effective_duration_ratio: safe_ratio(
            dout.effective_duration_s,
            din.effective_duration_s,
            RatioGuard::PositiveOrZero,
        ),
        spectral_centroid_ratio: safe_ratio(
            dout.spectral_centroid_hz,
            din.spectral_centroid_hz,
            RatioGuard::PositiveOrZero,
        ),
        rms_ratio: safe_ratio(
            outbound.base.rms,
            inbound.base.rms,
            RatioGuard::NonZeroFloor(RMS_FLOOR),
        ),
        dc_offset_diff: dout.dc_offset - din.dc_offset,
    }
}

/// Apply the diagnostic rules in order. Every rule is evaluated; the result
/// is in rule order, not sorted by severity.
pub fn observe(
    inbound: &ChannelMetrics,
    outbound: &ChannelMetrics,
    comparison: &ComparisonResult,
) -> Vec<Observation> {
    let mut notes = Vec::new();

    let dc_in = inbound.descriptor.dc_offset;
    if dc_in.abs() > DC_OFFSET_LIMIT {
        notes.push(Observation::new(
            ObservationKind::InboundDcBias,
            format!("Inbound DC offset {:.1} exceeds ±600 (possible upstream bias).", dc_in),
        ));
    }

    let dc_out = outbound.descriptor.dc_offset;
    if dc_out.abs() > DC_OFFSET_LIMIT {
        notes.push(Observation::new(
            ObservationKind::OutboundDcBias,
            format!(
                "Outbound DC offset {:.1} exceeds ±600 (likely audible hum / clipping).",
                dc_out
            ),
        ));
    }

    let clip_ratio = outbound.base.clip_ratio;
    if clip_ratio > CLIP_RATIO_LIMIT {
        notes.push(Observation::new(
            ObservationKind::Saturation,
            format!(
                "Outbound clipping ratio {:.5} indicates repeated saturation.",
                clip_ratio
            ),
        ));
    }

    let centroid_ratio = comparison.spectral_centroid_ratio;
    if centroid_ratio > CENTROID_RATIO_LIMIT {
        notes.push(Observation::new(
            ObservationKind::SpectralSkew,
            format!(
                "Outbound spectrum skewed high (centroid ratio {:.2}); playback likely fast/bright.",
                centroid_ratio
            ),
        ));
    }

    let voiced_ratio = comparison.effective_duration_ratio;
    if voiced_ratio < VOICED_RATIO_FLOOR {
        notes.push(Observation::new(
            ObservationKind::VoicedShrink,
            format!(
                "Outbound voiced duration is {:.1}% of inbound; frames are ending early (check pacer/drift).",
                voiced_ratio * 100.0
            ),
        ));
    }

    notes
}

// tests/compare_test.rs
//
// End-to-end comparisons on WAV files written to a scratch directory.

mod test_utils;

use callcheckr::core::decoder::{decode_wav, FileSource, SampleSource};
use callcheckr::{CallCheckError, CallComparator, ObservationKind};
use test_utils::*;

fn kinds(report: &callcheckr::PairReport) -> Vec<ObservationKind> {
    report.observations.iter().map(|o| o.kind).collect()
}

#[test]
fn test_identical_recordings_are_clean() {
    let dir = ScratchDir::new();
    let path = dir.join("call.wav");
    write_wav(&path, &generate_tone(440.0, 8000, 2.0, 6000.0, 0.0), 8000);

    let report = CallComparator::new().compare_pair(&path, &path).unwrap();

    assert_eq!(report.comparison.duration_ratio, 1.0);
    assert_eq!(report.comparison.effective_duration_ratio, 1.0);
    assert_eq!(report.comparison.spectral_centroid_ratio, 1.0);
    assert_eq!(report.comparison.rms_ratio, 1.0);
    assert_eq!(report.comparison.dc_offset_diff, 0.0);
    assert!(report.observations.is_empty());
}

#[test]
fn test_tone_centroid_from_file() {
    let dir = ScratchDir::new();
    let path = dir.join("tone.wav");
    write_wav(&path, &generate_tone(1000.0, 16000, 1.0, 8000.0, 0.0), 16000);

    let channel = CallComparator::new().analyze_recording(&path).unwrap();
    assert!(
        (channel.extra.spectral_centroid_hz - 1000.0).abs() < 10.0,
        "centroid = {}",
        channel.extra.spectral_centroid_hz
    );
    assert_eq!(channel.extra.sample_rate, 16000);
    assert_eq!(channel.extra.sample_count, 16000);
    assert!((channel.analysis.header.duration_s - 1.0).abs() < 1e-9);
}

#[test]
fn test_outbound_dc_bias() {
    let dir = ScratchDir::new();
    let inbound = dir.join("in.wav");
    let outbound = dir.join("out.wav");
    write_wav(&inbound, &generate_tone(400.0, 8000, 1.0, 3000.0, 50.0), 8000);
    write_wav(&outbound, &generate_tone(400.0, 8000, 1.0, 3000.0, 700.0), 8000);

    let report = CallComparator::new().compare_pair(&inbound, &outbound).unwrap();

    assert_eq!(kinds(&report), vec![ObservationKind::OutboundDcBias]);
    assert!((report.comparison.dc_offset_diff - 650.0).abs() < 1.0);
}

#[test]
fn test_clipped_outbound() {
    let dir = ScratchDir::new();
    let inbound = dir.join("in.wav");
    let outbound = dir.join("out.wav");
    let clean = generate_tone(400.0, 8000, 1.0, 3000.0, 0.0);
    // Same tone driven hard into the rails
    let clipped: Vec<i16> = generate_tone(400.0, 8000, 1.0, 3000.0, 0.0)
        .into_iter()
        .map(|s| (s as i32 * 20).clamp(-32768, 32767) as i16)
        .collect();
    write_wav(&inbound, &clean, 8000);
    write_wav(&outbound, &clipped, 8000);

    let report = CallComparator::new().compare_pair(&inbound, &outbound).unwrap();

    assert!(report.outbound.analysis.base.clip_ratio > 5e-4);
    assert!(kinds(&report).contains(&ObservationKind::Saturation));
    assert!(!kinds(&report).contains(&ObservationKind::OutboundDcBias));
}

#[test]
fn test_truncated_outbound_voice() {
    let dir = ScratchDir::new();
    let inbound = dir.join("in.wav");
    let outbound = dir.join("out.wav");

    let speech = generate_tone(300.0, 8000, 2.0, 4000.0, 0.0);
    let mut half = generate_tone(300.0, 8000, 1.0, 4000.0, 0.0);
    half.extend(generate_silence(8000, 1.0));

    write_wav(&inbound, &speech, 8000);
    write_wav(&outbound, &half, 8000);

    let report = CallComparator::new().compare_pair(&inbound, &outbound).unwrap();

    assert_eq!(report.comparison.duration_ratio, 1.0);
    assert!((report.comparison.effective_duration_ratio - 0.5).abs() < 1e-9);
    let shrink = report
        .observations
        .iter()
        .find(|o| o.kind == ObservationKind::VoicedShrink)
        .expect("voiced shrink observation");
    assert!(shrink.message.contains("50.0%"));
}

#[test]
fn test_stereo_is_downmixed() {
    let dir = ScratchDir::new();
    let path = dir.join("stereo.wav");
    let interleaved: Vec<i16> = (0..1600).flat_map(|_| [1000i16, 3000]).collect();
    write_wav_channels(&path, &interleaved, 8000, 2);

    let pcm = decode_wav(&path).unwrap();
    assert_eq!(pcm.header.channels, 2);
    assert_eq!(pcm.header.frames, 1600);
    assert_eq!(pcm.samples.len(), 1600);
    assert!(pcm.samples.iter().all(|&s| s == 2000));
}

#[test]
fn test_float_wav_is_rescaled() {
    let dir = ScratchDir::new();
    let path = dir.join("float.wav");
    write_float_wav(&path, &[0.0, 0.5, -0.5, 1.0], 8000);

    let pcm = decode_wav(&path).unwrap();
    assert_eq!(pcm.samples, vec![0, 16384, -16384, 32767]);
    assert_eq!(pcm.header.bits_per_sample, 32);
}

#[test]
fn test_empty_wav_gives_zero_descriptors() {
    let dir = ScratchDir::new();
    let path = dir.join("empty.wav");
    write_wav(&path, &[], 8000);

    let channel = CallComparator::new().analyze_recording(&path).unwrap();
    assert_eq!(channel.extra.spectral_centroid_hz, 0.0);
    assert_eq!(channel.extra.effective_duration_s, 0.0);
    assert_eq!(channel.extra.dc_offset, 0.0);
    assert_eq!(channel.analysis.base.clip_ratio, 0.0);
}

#[test]
fn test_missing_outbound_fails() {
    let dir = ScratchDir::new();
    let inbound = dir.join("in.wav");
    write_wav(&inbound, &generate_tone(300.0, 8000, 0.5, 4000.0, 0.0), 8000);

    let err = CallComparator::new()
        .compare_pair(&inbound, &dir.join("missing.wav"))
        .unwrap_err();
    assert!(matches!(err, CallCheckError::Decode { .. }));
}

#[test]
fn test_garbage_wav_fails() {
    let dir = ScratchDir::new();
    let path = dir.join("garbage.wav");
    std::fs::write(&path, b"definitely not a riff file").unwrap();

    let err = FileSource.decode(&path).unwrap_err();
    assert!(matches!(err, CallCheckError::Decode { .. }));
}

#[test]
fn test_wav_detected_by_signature() {
    let dir = ScratchDir::new();
    let path = dir.join("recording.bin");
    write_wav(&path, &generate_tone(300.0, 8000, 0.1, 4000.0, 0.0), 8000);

    assert!(FileSource.check_support(&path).is_ok());
    let pcm = FileSource.decode(&path).unwrap();
    assert_eq!(pcm.samples.len(), 800);
}

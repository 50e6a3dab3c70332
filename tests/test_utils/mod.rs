#![allow(dead_code)]

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Unique scratch directory under the system temp dir
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("callcheckr-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).expect("Failed to create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_callcheckr"))
}

/// Sine tone on the 16-bit scale, with an optional DC bias
pub fn generate_tone(frequency: f64, sample_rate: u32, duration_secs: f64, amplitude: f64, dc: f64) -> Vec<i16> {
    let num_samples = (sample_rate as f64 * duration_secs) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            let v = dc + amplitude * (2.0 * PI * frequency * t).sin();
            v.round().clamp(-32768.0, 32767.0) as i16
        })
        .collect()
}

pub fn generate_silence(sample_rate: u32, duration_secs: f64) -> Vec<i16> {
    vec![0; (sample_rate as f64 * duration_secs) as usize]
}

/// Write mono 16-bit PCM
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) {
    write_wav_channels(path, samples, sample_rate, 1);
}

/// Write interleaved 16-bit PCM with the given channel count
pub fn write_wav_channels(path: &Path, samples: &[i16], sample_rate: u32, channels: u16) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// Write mono 32-bit float PCM
pub fn write_float_wav(path: &Path, samples: &[f32], sample_rate: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

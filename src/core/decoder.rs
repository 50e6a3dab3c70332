// src/core/decoder.rs
//
// Sample sources: turn a stored recording into mono 16-bit PCM.
// WAV goes through hound; other containers through Symphonia when the
// `symphonia` feature is compiled in.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{CallCheckError, Result};

/// Amplitude samples on the 16-bit PCM scale, widened to f64
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    pub samples: Vec<f64>,
    /// Samples per second; 0 is tolerated and yields zero-valued descriptors
    pub sample_rate: u32,
}

impl Signal {
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self { samples, sample_rate }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total playable duration implied by sample count and rate
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Container-level metadata of a recording
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    /// Frames (samples per channel) declared by the container
    pub frames: u64,
    pub duration_s: f64,
}

impl HeaderInfo {
    pub fn new(sample_rate: u32, channels: u16, bits_per_sample: u16, frames: u64) -> Self {
        let duration_s = if sample_rate > 0 {
            frames as f64 / sample_rate as f64
        } else {
            0.0
        };
        Self {
            sample_rate,
            channels,
            bits_per_sample,
            frames,
            duration_s,
        }
    }
}

/// Decoded mono PCM16 recording
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pcm16 {
    pub samples: Vec<i16>,
    pub header: HeaderInfo,
}

impl Pcm16 {
    /// Build a mono recording whose header matches the samples exactly.
    pub fn mono(samples: Vec<i16>, sample_rate: u32) -> Self {
        let header = HeaderInfo::new(sample_rate, 1, 16, samples.len() as u64);
        Self { samples, header }
    }

    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    pub fn to_signal(&self) -> Signal {
        Signal::new(
            self.samples.iter().map(|&s| s as f64).collect(),
            self.header.sample_rate,
        )
    }
}

/// Capability for loading recordings.
///
/// The comparison pipeline only talks to this trait, so it can run against
/// synthetic in-memory recordings as well as files on disk.
pub trait SampleSource: Send + Sync {
    /// Fail with `MissingDependency` if this source cannot handle `path` at all.
    fn check_support(&self, path: &Path) -> Result<()>;

    /// Decode `path` into mono PCM16.
    fn decode(&self, path: &Path) -> Result<Pcm16>;
}

/// Reads recordings from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl SampleSource for FileSource {
    fn check_support(&self, path: &Path) -> Result<()> {
        if is_wav(path) || cfg!(feature = "symphonia") {
            return Ok(());
        }
        Err(CallCheckError::MissingDependency(format!(
            "{} is not a WAV file; decoding other containers requires the `symphonia` feature",
            path.display()
        )))
    }

    fn decode(&self, path: &Path) -> Result<Pcm16> {
        if is_wav(path) {
            return decode_wav(path);
        }
        decode_other(path)
    }
}

/// Serves pre-decoded recordings keyed by path
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    recordings: HashMap<PathBuf, Pcm16>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recording(mut self, path: impl Into<PathBuf>, pcm: Pcm16) -> Self {
        self.recordings.insert(path.into(), pcm);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, pcm: Pcm16) {
        self.recordings.insert(path.into(), pcm);
    }
}

impl SampleSource for InMemorySource {
    fn check_support(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn decode(&self, path: &Path) -> Result<Pcm16> {
        self.recordings
            .get(path)
            .cloned()
            .ok_or_else(|| CallCheckError::decode(path, "no such recording"))
    }
}

/// True for `.wav`/`.wave` files or anything with a RIFF/WAVE signature
fn is_wav(path: &Path) -> bool {
    let by_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("wav") || e.eq_ignore_ascii_case("wave"))
        .unwrap_or(false);
    if by_extension {
        return true;
    }

    let mut magic = [0u8; 12];
    match File::open(path).and_then(|mut f| f.read_exact(&mut magic)) {
        Ok(()) => &magic[..4] == b"RIFF" && &magic[8..] == b"WAVE",
        Err(_) => false,
    }
}

/// Decode a WAV file with hound
pub fn decode_wav(path: &Path) -> Result<Pcm16> {
    let mut reader =
        hound::WavReader::open(path).map_err(|e| CallCheckError::decode(path, e))?;
    let spec = reader.spec();

    if spec.channels == 0 {
        return Err(CallCheckError::decode(path, "file reports 0 audio channels"));
    }

    let interleaved: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Int => reader
            .samples::<i32>()
            .map(|s| s.map(|v| int_to_pcm16(v, spec.bits_per_sample)))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| CallCheckError::decode(path, e))?,
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(float_to_pcm16))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| CallCheckError::decode(path, e))?,
    };

    debug!(
        "{}: WAV {} Hz, {} ch, {}-bit {:?}, {} interleaved samples",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format,
        interleaved.len()
    );

    let header = HeaderInfo::new(
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        reader.duration() as u64,
    );

    Ok(Pcm16 {
        samples: downmix_to_mono(&interleaved, spec.channels as usize),
        header,
    })
}

#[cfg(feature = "symphonia")]
fn decode_other(path: &Path) -> Result<Pcm16> {
    use symphonia::core::audio::SampleBuffer;
    use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
    use symphonia::core::errors::Error as SymphoniaError;
    use symphonia::core::formats::FormatOptions;
    use symphonia::core::io::MediaSourceStream;
    use symphonia::core::meta::MetadataOptions;
    use symphonia::core::probe::Hint;

    let file = File::open(path).map_err(|e| CallCheckError::decode(path, e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| CallCheckError::decode(path, format!("unrecognised container: {e}")))?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| CallCheckError::decode(path, "no supported audio track found"))?;

    let track_id = track.id;
    let params = track.codec_params.clone();
    let sample_rate = params
        .sample_rate
        .ok_or_else(|| CallCheckError::decode(path, "file does not specify sample rate"))?;
    let channels = params.channels.map(|c| c.count()).unwrap_or(1);
    if channels == 0 {
        return Err(CallCheckError::decode(path, "file reports 0 audio channels"));
    }
    let bits = params
        .bits_per_sample
        .or(params.bits_per_coded_sample)
        .unwrap_or(16);

    let mut decoder = symphonia::default::get_codecs()
        .make(&params, &DecoderOptions::default())
        .map_err(|e| CallCheckError::decode(path, e))?;

    let mut interleaved: Vec<i16> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<i16>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(CallCheckError::decode(path, e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(CallCheckError::decode(path, e)),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            interleaved.extend_from_slice(buf.samples());
        }
    }

    let frames = params
        .n_frames
        .unwrap_or((interleaved.len() / channels) as u64);

    debug!(
        "{}: {:?} {} Hz, {} ch, {} interleaved samples",
        path.display(),
        params.codec,
        sample_rate,
        channels,
        interleaved.len()
    );

    Ok(Pcm16 {
        samples: downmix_to_mono(&interleaved, channels),
        header: HeaderInfo::new(sample_rate, channels as u16, bits as u16, frames),
    })
}

#[cfg(not(feature = "symphonia"))]
fn decode_other(path: &Path) -> Result<Pcm16> {
    Err(CallCheckError::MissingDependency(format!(
        "{} is not a WAV file; decoding other containers requires the `symphonia` feature",
        path.display()
    )))
}

/// Rescale an integer sample of `bits` width to the 16-bit range
fn int_to_pcm16(sample: i32, bits: u16) -> i16 {
    let scaled = if bits <= 16 {
        sample << (16 - bits)
    } else {
        sample >> (bits - 16)
    };
    scaled.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

fn float_to_pcm16(sample: f32) -> i16 {
    (sample * 32767.0)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Average interleaved channels into one, rounding to the nearest sample.
/// A trailing incomplete frame is dropped.
pub fn downmix_to_mono(interleaved: &[i16], channels: usize) -> Vec<i16> {
    if channels <= 1 {
        return interleaved.to_vec();
    }

    interleaved
        .chunks_exact(channels)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum as f64 / channels as f64).round() as i16
        })
        .collect()
}

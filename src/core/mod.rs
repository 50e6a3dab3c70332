//! Core analysis and comparison modules

pub mod analysis;
pub mod analyzer;
pub mod compare;
pub mod decoder;
pub mod descriptor;
pub mod dsp;

pub use analyzer::{AnalyzerBuilder, CallComparator};
pub use compare::{compare, observe, ChannelMetrics, ComparisonResult, Observation, ObservationKind};
pub use decoder::{FileSource, InMemorySource, Pcm16, SampleSource, Signal};
pub use descriptor::{describe, describe_with, RecordingDescriptor};

//! CallCheckr - Compare the two legs of a recorded phone call
//!
//! Quantitatively compares an inbound and an outbound recording of the same
//! call to spot regressions such as clipping, DC bias, spectral skew and
//! audio frames that end early.
//!
//! ## Module Structure
//!
//! - `core` - Decoding, descriptors, comparison rules and DSP utilities
//! - `cli` - Command-line interface and report formatting
//! - `config` - Analysis settings
//! - `report` - Result types shared by the reporters
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use callcheckr::CallComparator;
//! use std::path::Path;
//!
//! let comparator = CallComparator::new();
//! let report = comparator.compare_pair(Path::new("in.wav"), Path::new("out.wav"))?;
//!
//! println!("voiced ratio {:.3}", report.comparison.effective_duration_ratio);
//! for note in &report.observations {
//!     println!("- {}", note);
//! }
//! ```
//!
//! ## Diagnostic Rules
//!
//! | Rule            | Trigger                                  |
//! |-----------------|------------------------------------------|
//! | Inbound DC bias | \|inbound DC offset\| > 600              |
//! | Outbound DC bias| \|outbound DC offset\| > 600             |
//! | Saturation      | outbound clip ratio > 5e-4               |
//! | Spectral skew   | centroid ratio > 1.3                     |
//! | Voiced shrink   | voiced-duration ratio < 0.9              |

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod report;

pub use config::AnalysisConfig;
pub use crate::core::{
    compare, describe, observe, AnalyzerBuilder, CallComparator, ChannelMetrics,
    ComparisonResult, FileSource, InMemorySource, Observation, ObservationKind, Pcm16,
    RecordingDescriptor, SampleSource, Signal,
};
pub use error::{CallCheckError, Result};
pub use report::{ChannelReport, PairReport};

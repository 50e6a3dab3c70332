//! Comparison result surface consumed by the console and JSON reporters

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::core::analysis::BaseAnalysis;
use crate::core::compare::{ChannelMetrics, ComparisonResult, Observation};
use crate::core::descriptor::RecordingDescriptor;

/// Everything computed for one side of the call
#[derive(Debug, Clone, Serialize)]
pub struct ChannelReport {
    pub path: PathBuf,
    pub analysis: BaseAnalysis,
    /// Spectral/voiced descriptor
    pub extra: RecordingDescriptor,
}

impl ChannelReport {
    pub fn metrics(&self) -> ChannelMetrics {
        ChannelMetrics::new(self.extra.clone(), self.analysis.base.clone())
    }

    /// File name for display, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Result of comparing one inbound/outbound pair
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub generated_at: DateTime<Utc>,
    pub inbound: ChannelReport,
    pub outbound: ChannelReport,
    pub comparison: ComparisonResult,
    /// Triggered rules, in rule order
    pub observations: Vec<Observation>,
}

impl PairReport {
    pub fn has_observations(&self) -> bool {
        !self.observations.is_empty()
    }
}

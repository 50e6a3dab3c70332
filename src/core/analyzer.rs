// src/core/analyzer.rs
//
// High-level comparison API with builder pattern.

use chrono::Utc;
use log::{debug, info};
use std::path::Path;

use super::analysis::{BaseAnalyzer, PcmBaseAnalyzer};
use super::compare::{compare, observe};
use super::decoder::{FileSource, SampleSource};
use super::descriptor::describe_with;
use super::dsp::WindowType;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::report::{ChannelReport, PairReport};

/// Builder for CallComparator configuration
pub struct AnalyzerBuilder {
    config: AnalysisConfig,
    source: Box<dyn SampleSource>,
    base_analyzer: Box<dyn BaseAnalyzer>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
            source: Box::new(FileSource),
            base_analyzer: Box::new(PcmBaseAnalyzer::default()),
        }
    }

    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn window(mut self, window: WindowType) -> Self {
        self.config.window = window;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Replace the file-backed sample source
    pub fn source(mut self, source: impl SampleSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn base_analyzer(mut self, analyzer: impl BaseAnalyzer + 'static) -> Self {
        self.base_analyzer = Box::new(analyzer);
        self
    }

    pub fn build(self) -> CallComparator {
        CallComparator {
            config: self.config,
            source: self.source,
            base_analyzer: self.base_analyzer,
        }
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares an inbound recording against its outbound counterpart
pub struct CallComparator {
    config: AnalysisConfig,
    source: Box<dyn SampleSource>,
    base_analyzer: Box<dyn BaseAnalyzer>,
}

impl CallComparator {
    /// File-backed comparator with default settings
    pub fn new() -> Self {
        AnalyzerBuilder::new().build()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Decode and analyze a single recording
    pub fn analyze_recording(&self, path: &Path) -> Result<ChannelReport> {
        let pcm = self.source.decode(path)?;
        let analysis = self.base_analyzer.analyze(&pcm);
        let extra = describe_with(&pcm.to_signal(), &self.config);

        debug!(
            "{}: centroid {:.1} Hz, dc {:.1}, voiced {:.2}s of {:.2}s, rms {:.1}, clips {}",
            path.display(),
            extra.spectral_centroid_hz,
            extra.dc_offset,
            extra.effective_duration_s,
            extra.total_duration_s(),
            analysis.base.rms,
            analysis.base.clip_count
        );

        Ok(ChannelReport {
            path: path.to_path_buf(),
            analysis,
            extra,
        })
    }

    /// Compare one inbound/outbound pair.
    ///
    /// Both paths are checked for decoder support before either is read; any
    /// failure aborts the whole comparison.
    pub fn compare_pair(&self, inbound: &Path, outbound: &Path) -> Result<PairReport> {
        self.source.check_support(inbound)?;
        self.source.check_support(outbound)?;

        info!(
            "comparing inbound {} with outbound {}",
            inbound.display(),
            outbound.display()
        );

        let (inbound_report, outbound_report) = if self.config.parallel {
            rayon::join(
                || self.analyze_recording(inbound),
                || self.analyze_recording(outbound),
            )
        } else {
            (
                self.analyze_recording(inbound),
                self.analyze_recording(outbound),
            )
        };
        let inbound_report = inbound_report?;
        let outbound_report = outbound_report?;

        let inbound_metrics = inbound_report.metrics();
        let outbound_metrics = outbound_report.metrics();
        let comparison = compare(&inbound_metrics, &outbound_metrics);
        let observations = observe(&inbound_metrics, &outbound_metrics, &comparison);

        info!(
            "comparison done: {} observation(s), voiced ratio {:.3}, centroid ratio {:.3}",
            observations.len(),
            comparison.effective_duration_ratio,
            comparison.spectral_centroid_ratio
        );

        Ok(PairReport {
            generated_at: Utc::now(),
            inbound: inbound_report,
            outbound: outbound_report,
            comparison,
            observations,
        })
    }
}

impl Default for CallComparator {
    fn default() -> Self {
        Self::new()
    }
}

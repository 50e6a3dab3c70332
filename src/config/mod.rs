//! Configuration module for CallCheckr

mod analysis;

pub use analysis::AnalysisConfig;

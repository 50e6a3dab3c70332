//! CLI argument definitions

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "callcheckr")]
#[command(version)]
#[command(about = "Compare inbound/outbound call recordings for clipping, DC bias, spectral skew and pacing drift")]
pub struct Args {
    /// Inbound recording (path or single-file pattern)
    #[arg(long = "in", value_name = "PATTERN")]
    pub inbound: String,

    /// Outbound recording (path or single-file pattern)
    #[arg(long = "out", value_name = "PATTERN")]
    pub outbound: String,

    /// Write the full report as JSON to this path
    #[arg(long = "json", value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    /// Analyze the two recordings one after the other
    #[arg(long, env = "CALLCHECKR_SEQUENTIAL")]
    pub sequential: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

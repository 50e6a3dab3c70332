//! Output formatting for CLI results

use colorful::Colorful;
use std::fs;
use std::io;
use std::path::Path;

use crate::report::{ChannelReport, PairReport};

fn format_channel(label: &str, channel: &ChannelReport) -> String {
    let base = &channel.analysis.base;
    let extra = &channel.extra;
    format!(
        "{} {}\n  RMS {:.1} | mean {:.1} | clips {} | centroid {:.1} Hz | voiced {:.2}s\n",
        label,
        channel.display_name().cyan(),
        base.rms,
        base.mean,
        base.clip_count,
        extra.spectral_centroid_hz,
        extra.effective_duration_s
    )
}

/// Format a pair report for terminal output
pub fn format_report(report: &PairReport) -> String {
    let mut output = String::new();

    output.push_str(&format_channel("Inbound :", &report.inbound));
    output.push_str(&format_channel("Outbound:", &report.outbound));

    let comp = &report.comparison;
    output.push_str(&format!(
        "Derived : duration ratio {:.3}, effective voiced ratio {:.3}, centroid ratio {:.3}, RMS ratio {:.3}, DC diff {:.1}\n",
        comp.duration_ratio,
        comp.effective_duration_ratio,
        comp.spectral_centroid_ratio,
        comp.rms_ratio,
        comp.dc_offset_diff
    ));

    if report.has_observations() {
        output.push_str("\nObservations:\n");
        for note in &report.observations {
            output.push_str(&format!("  - {}\n", note.message.as_str().yellow()));
        }
    } else {
        output.push_str(&format!("\nObservations: {}\n", "(none)".green()));
    }

    output
}

/// Format a pair report as pretty-printed JSON
pub fn format_json(report: &PairReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write the JSON report to `path`
pub fn write_json(report: &PairReport, path: &Path) -> io::Result<()> {
    let json = format_json(report)?;
    fs::write(path, json)
}

// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use std::path::PathBuf;
use std::process::ExitCode;

use callcheckr::cli::{expand_pattern, format_report, write_json, Args};
use callcheckr::CallComparator;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            println!("{}", format!("Failed to compare recordings: {e:#}").red());
            ExitCode::from(1)
        }
    }
}

/// Resolve a single file for one side, printing the reason when that fails
fn resolve_single(pattern: &str, side: &str) -> Option<Vec<PathBuf>> {
    let files = expand_pattern(pattern);
    if files.is_empty() {
        println!("No {side} files matched: {pattern}");
        return None;
    }
    Some(files)
}

fn run(args: &Args) -> Result<ExitCode> {
    let Some(inbound_files) = resolve_single(&args.inbound, "inbound") else {
        return Ok(ExitCode::from(1));
    };
    let Some(outbound_files) = resolve_single(&args.outbound, "outbound") else {
        return Ok(ExitCode::from(1));
    };

    if inbound_files.len() > 1 || outbound_files.len() > 1 {
        println!(
            "Currently only a single inbound/outbound pair is supported. Pick the files explicitly."
        );
        return Ok(ExitCode::from(1));
    }

    let comparator = CallComparator::builder()
        .parallel(!args.sequential)
        .build();
    let inbound = &inbound_files[0];
    let outbound = &outbound_files[0];
    let report = comparator
        .compare_pair(inbound, outbound)
        .with_context(|| format!("{} vs {}", inbound.display(), outbound.display()))?;

    print!("{}", format_report(&report));

    if let Some(json_path) = &args.json_out {
        match write_json(&report, json_path) {
            Ok(()) => println!("\nWrote JSON report to {}", json_path.display()),
            Err(e) => println!("Failed to write JSON report: {e}"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;
mod patterns;

pub use args::Args;
pub use output::{format_json, format_report, write_json};
pub use patterns::{expand_pattern, wildcard_match};

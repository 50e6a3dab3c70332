// tests/cli_test.rs
//
// Runs the compiled binary against synthetic recordings.

mod test_utils;

use std::process::{Command, Output};
use test_utils::*;

fn run_callcheckr(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CALLCHECKR_SEQUENTIAL")
        .output()
        .expect("Failed to execute callcheckr")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_clean_pair_report() {
    let dir = ScratchDir::new();
    let inbound = dir.join("in-1.wav");
    let outbound = dir.join("out-1.wav");
    let tone = generate_tone(440.0, 8000, 1.0, 5000.0, 0.0);
    write_wav(&inbound, &tone, 8000);
    write_wav(&outbound, &tone, 8000);

    let output = run_callcheckr(&[
        "--in",
        inbound.to_str().unwrap(),
        "--out",
        outbound.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Inbound :"));
    assert!(text.contains("in-1.wav"));
    assert!(text.contains("Outbound:"));
    assert!(text.contains("duration ratio 1.000"));
    assert!(text.contains("(none)"));
}

#[test]
fn test_pattern_and_json_report() {
    let dir = ScratchDir::new();
    write_wav(&dir.join("in-20240101.wav"), &generate_tone(300.0, 8000, 2.0, 4000.0, 0.0), 8000);
    write_wav(&dir.join("out-20240101.wav"), &generate_tone(300.0, 8000, 1.0, 4000.0, 900.0), 8000);
    let json_path = dir.join("report.json");

    let in_pattern = dir.join("in-*.wav");
    let out_pattern = dir.join("out-*.wav");
    let output = run_callcheckr(&[
        "--in",
        in_pattern.to_str().unwrap(),
        "--out",
        out_pattern.to_str().unwrap(),
        "--json",
        json_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Outbound DC offset"));
    assert!(text.contains("Wrote JSON report to"));

    let json = std::fs::read_to_string(&json_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(report["inbound"]["path"].as_str().unwrap().ends_with("in-20240101.wav"));
    assert!((report["comparison"]["duration_ratio"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    let observations = report["observations"].as_array().unwrap();
    assert!(observations
        .iter()
        .any(|o| o.as_str().unwrap().starts_with("Outbound DC offset")));
    assert!(observations
        .iter()
        .any(|o| o.as_str().unwrap().contains("50.0% of inbound")));
}

#[test]
fn test_no_match_exits_non_zero() {
    let dir = ScratchDir::new();
    write_wav(&dir.join("out.wav"), &generate_tone(300.0, 8000, 0.5, 4000.0, 0.0), 8000);
    let missing = dir.join("in-*.wav");
    let outbound = dir.join("out.wav");

    let output = run_callcheckr(&[
        "--in",
        missing.to_str().unwrap(),
        "--out",
        outbound.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No inbound files matched"));
}

#[test]
fn test_multiple_matches_rejected() {
    let dir = ScratchDir::new();
    let tone = generate_tone(300.0, 8000, 0.5, 4000.0, 0.0);
    write_wav(&dir.join("in-1.wav"), &tone, 8000);
    write_wav(&dir.join("in-2.wav"), &tone, 8000);
    write_wav(&dir.join("out-1.wav"), &tone, 8000);

    let output = run_callcheckr(&[
        "--in",
        dir.join("in-*.wav").to_str().unwrap(),
        "--out",
        dir.join("out-1.wav").to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("only a single inbound/outbound pair"));
}

#[test]
fn test_undecodable_file_exits_non_zero() {
    let dir = ScratchDir::new();
    let inbound = dir.join("in.wav");
    std::fs::write(&inbound, b"not audio").unwrap();
    let outbound = dir.join("out.wav");
    write_wav(&outbound, &generate_tone(300.0, 8000, 0.5, 4000.0, 0.0), 8000);

    let output = run_callcheckr(&[
        "--in",
        inbound.to_str().unwrap(),
        "--out",
        outbound.to_str().unwrap(),
        "--sequential",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("Failed to compare recordings"));
    assert!(text.contains("in.wav vs"));
    assert!(text.contains("failed to decode"));
}

#![allow(dead_code)]
/// Re-export some common utilities for system tests
pub use assert_cmd::prelude::*; // Add methods on commands
pub use assert_fs::prelude::*;
pub use assert_fs::TempDir;
pub use predicates::prelude::*; // Used for writing assertions
pub use std::process::Command; // Run programs

/// Display names of every codec, in the order they are benchmarked
pub const CODEC_NAMES: [&str; 6] = ["bincode", "JSON", "XML", "protobuf", "YAML", "MessagePack"];

/// Artifact file names of every codec, in the order they are benchmarked
pub const ARTIFACT_FILES: [&str; 6] = [
    "native.bin",
    "json.json",
    "xml.xml",
    "proto.pb",
    "yaml.yaml",
    "msgpack.msgpack",
];

/// A `serbench` command with a small fixture and 3 trials, writing its artifacts into `out_dir`
pub fn small_run(out_dir: &std::path::Path) -> Result<Command, Box<dyn std::error::Error>> {
    small_run_with_trials(out_dir, 3)
}

/// A `serbench` command with a small fixture and `trials` trials, writing its artifacts into `out_dir`
pub fn small_run_with_trials(
    out_dir: &std::path::Path,
    trials: u32,
) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("serbench")?;
    cmd.arg("--service-ids")
        .arg("10")
        .arg("--additional-items")
        .arg("5")
        .arg("--dictionary-entries")
        .arg("10")
        .arg("-n")
        .arg(trials.to_string())
        .arg("-o")
        .arg(out_dir)
        .arg("-d");
    Ok(cmd)
}

/// Helper function to match the raw output of stderr or stdout, with a pattern a fixed amount of times
pub fn match_on_output(
    byte_output: &[u8],
    re_str: &str,
    match_count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    // Build regex pattern
    let re = fancy_regex::Regex::new(re_str).unwrap();
    // Make the predicate function
    let pred_regex = predicate::function(|&x| re.find_iter(x).count() == match_count);
    // Convert the output to string as utf-8
    let str_res = std::str::from_utf8(byte_output).expect("invalid utf-8 sequence");
    // Evaluate the output with the predicate
    assert!(pred_regex.eval(&str_res), "regex: {re_str} - expected match count: {match_count}");
    Ok(())
}

/// Helper function to match the raw output of stderr or stdout, with a pattern a fixed amount of times, case insensitive
pub fn match_on_out_no_case(
    byte_output: &[u8],
    re_str: &str,
    match_count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    // Build regex pattern
    let re = fancy_regex::Regex::new(&("(?i)".to_owned() + re_str)).unwrap();
    // Make the predicate function
    let pred_regex = predicate::function(|&x| re.find_iter(x).count() == match_count);
    // Convert the output to string as utf-8
    let str_res = std::str::from_utf8(byte_output).expect("invalid utf-8 sequence");
    // Evaluate the output with the predicate
    assert!(
        pred_regex.eval(&str_res),
        "regex: {} - expected match count: {match_count}\noutput:\n{str_res}",
        re_str
    );
    Ok(())
}

/// Helper function takes in the output of stderr and asserts that there are no errors or warnings
pub fn assert_no_errors_or_warn(stderr_byte_output: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match_on_out_no_case(stderr_byte_output, "error - ", 0)?;
    match_on_out_no_case(stderr_byte_output, "warn - ", 0)?;
    Ok(())
}

/// Asserts that the report on stdout has a row for each codec, in the order they are benchmarked
pub fn validate_report(stdout_byte_output: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match_on_out_no_case(stdout_byte_output, "report", 1)?;
    match_on_out_no_case(stdout_byte_output, "benchmarked in", 1)?;
    match_on_output(
        stdout_byte_output,
        "(?s)bincode.*JSON.*XML.*protobuf.*YAML.*MessagePack",
        1,
    )?;
    Ok(())
}

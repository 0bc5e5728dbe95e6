//! Integration tests for credits-gen
//!
//! Runs the binary against generated exports and checks the written table.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const EXPORT: &str = "\
Username,Subscribe Date,Current Tier
Bob,2023-01-01T00:00:00Z,1-tier
Carol,2023-02-01T00:00:00Z,3-tier
";

/// Header (3) and footer (4) chunks surround the entries
const FIXED_CHUNKS: usize = 7;

fn credits_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_credits-gen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run credits-gen")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path should be UTF-8")
}

fn index_entries(text: &str) -> usize {
    text.lines().filter(|l| l.trim_start().starts_with(".word")).count()
}

#[test]
fn test_export_with_exclusion() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("subscriber-list.csv");
    let out = dir.path().join("credits_data.i");
    fs::write(&csv, EXPORT).unwrap();

    let output = credits_gen(&["-I", path_arg(&csv), "-o", path_arg(&out), "-x", "bob"]);
    assert!(output.status.success(), "{output:?}");

    let text = fs::read_to_string(&out).expect("Failed to read output");
    assert_eq!(index_entries(&text), FIXED_CHUNKS + 1);
    assert!(text.contains("$43, $61, $72, $6F, $6C, $00"), "Carol should be encoded");
    assert!(!text.contains("$42, $6F, $62, $00"), "Bob should be excluded");
    assert_eq!(text.matches("CR_OP_ATTR, $0A").count(), 1);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Chunks in credits: 8"), "{stdout}");
}

#[test]
fn test_dummy_names_are_deterministic() {
    let dir = tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("first.i");
    let second = dir.path().join("second.i");

    assert!(credits_gen(&["--dummy", "-o", path_arg(&first)]).status.success());
    assert!(credits_gen(&["--dummy", "-o", path_arg(&second)]).status.success());

    let text = fs::read_to_string(&first).unwrap();
    assert_eq!(text, fs::read_to_string(&second).unwrap());
    assert_eq!(index_entries(&text), FIXED_CHUNKS + 33);
}

#[test]
fn test_malformed_timestamp_is_skipped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("subscriber-list.csv");
    let out = dir.path().join("credits_data.i");
    fs::write(
        &csv,
        "name,since,tier\nDave,not-a-date,2\nErin,2023-03-01T12:00:00+01:00,2\n",
    )
    .unwrap();

    let output = credits_gen(&["-i", path_arg(&csv), "-o", path_arg(&out)]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error parsing subscriber on line 2"), "{stdout}");

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(index_entries(&text), FIXED_CHUNKS + 1);
    assert!(text.contains("; Erin: Tier 2"));
    assert_eq!(text.matches("CR_OP_ATTR, $05").count(), 1);
}

#[test]
fn test_required_input_with_dummy_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("missing.csv");
    let out = dir.path().join("credits_data.i");

    let output = credits_gen(&["-I", path_arg(&csv), "--dummy", "-o", path_arg(&out)]);
    assert!(!output.status.success());
    assert!(!out.exists(), "no output should be written");
}

#[test]
fn test_required_input_missing_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("missing.csv");
    let out = dir.path().join("credits_data.i");

    let output = credits_gen(&["-I", path_arg(&csv), "-o", path_arg(&out)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(!out.exists());
}

#[test]
fn test_missing_optional_input_uses_dummy_names() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("missing.csv");
    let out = dir.path().join("credits_data.i");

    let output = credits_gen(&["-i", path_arg(&csv), "-o", path_arg(&out)]);
    assert!(output.status.success(), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Using dummy names"));
    assert_eq!(
        index_entries(&fs::read_to_string(&out).unwrap()),
        FIXED_CHUNKS + 33
    );
}

#[test]
fn test_overlong_name_fails_without_touching_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("subscriber-list.csv");
    let out = dir.path().join("credits_data.i");
    fs::write(
        &csv,
        "name,since,tier\nAVeryLongSubscriberNameThatCannotFit,2023-01-01T00:00:00Z,1\n",
    )
    .unwrap();
    fs::write(&out, "; previous build\n").unwrap();

    let output = credits_gen(&["-I", path_arg(&csv), "-o", path_arg(&out)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("tiles long"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "; previous build\n");
}

#[test]
fn test_excluded_row_is_not_parsed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let csv = dir.path().join("subscriber-list.csv");
    let out = dir.path().join("credits_data.i");
    fs::write(
        &csv,
        "name,since,tier\nBob,garbage,1\nCarol,2023-02-01T00:00:00Z,3\n",
    )
    .unwrap();

    let output = credits_gen(&["-I", path_arg(&csv), "-o", path_arg(&out), "-x", "bob"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Error parsing subscriber"), "{stdout}");
    assert_eq!(
        index_entries(&fs::read_to_string(&out).unwrap()),
        FIXED_CHUNKS + 1
    );
}

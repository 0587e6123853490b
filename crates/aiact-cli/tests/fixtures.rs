//! Golden report tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - An answers file (`answers.toml` or `answers.json`)
//! - Optionally an `aiact.toml` picked up from the working directory
//! - An expected.report.json (timestamp and tool version use placeholders)
//!
//! These tests run `aiact evaluate --format json` inside each fixture directory and compare the
//! normalized report with the expected one.

use aiact_test_util::normalize_nondeterministic;
use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Helper to get a Command for the aiact binary.
#[allow(deprecated)]
fn aiact_cmd() -> Command {
    Command::cargo_bin("aiact").expect("aiact binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("aiact-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn run_fixture(fixture_name: &str, module: &str) -> Value {
    let fixture_path = fixtures_dir().join(fixture_name);
    let answers = ["answers.toml", "answers.json"]
        .into_iter()
        .find(|name| fixture_path.join(name).exists())
        .expect("fixture should carry an answers file");

    let output = aiact_cmd()
        .current_dir(&fixture_path)
        .env_remove("RUST_LOG")
        .args([
            "evaluate",
            "--module",
            module,
            "--format",
            "json",
            "--answers",
            answers,
        ])
        .output()
        .expect("Failed to run command");
    assert!(
        output.status.success(),
        "aiact failed for {fixture_name}: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: Value =
        serde_json::from_slice(&output.stdout).expect("Failed to parse report JSON");
    normalize_nondeterministic(report)
}

fn expected(fixture_name: &str) -> Value {
    let path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let text = std::fs::read_to_string(&path).expect("Failed to read expected report");
    serde_json::from_str(&text).expect("Failed to parse expected report JSON")
}

fn assert_fixture(fixture_name: &str, module: &str) {
    let actual = run_fixture(fixture_name, module);
    assert_eq!(
        actual,
        expected(fixture_name),
        "report mismatch for fixture {fixture_name}:\n{}",
        serde_json::to_string_pretty(&actual).unwrap_or_default()
    );
}

#[test]
fn fixture_prohibited_rbi_exception() {
    assert_fixture("prohibited_rbi_exception", "prohibited-practices");
}

#[test]
fn fixture_high_risk_profiling_override() {
    assert_fixture("high_risk_profiling_override", "art6");
}

#[test]
fn fixture_gpai_v1_threshold() {
    assert_fixture("gpai_v1_threshold", "gpai");
}

#[test]
fn fixture_transparency_editing_exemption() {
    assert_fixture("transparency_editing_exemption", "transparency");
}

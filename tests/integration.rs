use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docgen")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- document generation --

#[test]
fn generates_expected_document() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("math.xml");

    cmd()
        .args(["-f", &fixture_path("math.h")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let output = fs::read_to_string(&out).unwrap();
    let expected = fs::read_to_string(fixture_path("math.expected.xml")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn groups_modules_and_infers_names() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("geometry.xml");

    cmd()
        .args(["-f", &fixture_path("geometry.h")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let output = fs::read_to_string(&out).unwrap();
    let expected = fs::read_to_string(fixture_path("geometry.expected.xml")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn empty_input_produces_bare_root() {
    let dir = TempDir::new().unwrap();
    let input = NamedTempFile::with_suffix(".h").unwrap();
    let out = dir.path().join("api.xml");

    cmd()
        .args(["-f", input.path().to_str().unwrap()])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "<api/>\n");
}

#[test]
fn output_defaults_to_api_xml() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["-f", &fixture_path("math.h")])
        .assert()
        .success();

    assert!(dir.path().join("api.xml").exists());
}

#[test]
fn completion_message_reports_count_and_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("math.xml");

    cmd()
        .args(["-f", &fixture_path("math.h")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 function(s)"))
        .stdout(predicate::str::contains("math.xml"));
}

// -- usage contract --

#[test]
fn no_arguments_prints_usage_and_exits_zero() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docgen"));

    assert!(!dir.path().join("api.xml").exists());
}

#[test]
fn unknown_flag_prints_usage_and_exits_zero() {
    cmd()
        .arg("--bogus")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docgen"));
}

#[test]
fn flag_without_value_prints_usage_and_exits_zero() {
    cmd()
        .arg("-f")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docgen"));
}

#[test]
fn help_flag_exits_zero() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate XML API documentation"));
}

// -- failures and diagnostics --

#[test]
fn missing_input_file_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["-f", "does-not-exist.h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_payload_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".h").unwrap();
    input
        .write_all(b"/***\n@function f\n@param broken payload\n*/\n")
        .unwrap();
    let out = dir.path().join("api.xml");

    cmd()
        .args(["-f", input.path().to_str().unwrap()])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));

    // The malformed field is dropped, the function survives.
    let output = fs::read_to_string(&out).unwrap();
    assert!(output.contains("<function name=\"f\"/>"));
}

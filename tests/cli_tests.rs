//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("srcbundle"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("create-rsp"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_bundle_requires_a_language() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.current_dir(dir.path());
    cmd.args(["bundle", "--output", "out.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("At least one --language must be specified"));
}

#[test]
fn test_bundle_requires_an_output() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.current_dir(dir.path());
    cmd.args(["bundle", "-l", "python"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("An --output path must be specified"));
}

#[test]
fn test_bundle_rejects_unsupported_language() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.current_dir(dir.path());
    cmd.args(["bundle", "-l", "ruby", "--output", "out.txt"]);
    cmd.assert().failure().stderr(predicate::str::contains("unsupported language 'ruby'"));
}

#[test]
fn test_bundle_rejects_missing_explicit_config() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.current_dir(dir.path());
    cmd.args(["bundle", "-l", "python", "-o", "out.txt", "--config", "nope.toml"]);
    cmd.assert().failure().stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_missing_response_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.current_dir(dir.path());
    cmd.arg("@missing.rsp");
    cmd.assert().failure().stderr(predicate::str::contains("response file"));
}

#[test]
fn test_completions_emit_script() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.args(["completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("srcbundle"));
}

//! End-to-end tests for config file discovery, explicit `--config` paths,
//! and config validation.
//!
//! These tests exercise the full flow from a config file on disk through CLI
//! invocation to the written SBOM, using `assert_cmd` and `tempfile` for
//! isolated test environments.
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a fake scanner that prints the same small document for every target.
fn write_scanner(dir: &Path) -> PathBuf {
    let path = dir.join("scanner.sh");
    let script = r#"#!/bin/sh
echo "$@" >> scan.log
cat <<'JSON'
{"bomFormat":"CycloneDX","specVersion":"1.6","components":[
  {"type":"library","name":"zlib","version":"1.3.1","purl":"pkg:generic/zlib@1.3.1"},
  {"type":"file","version":"1"},
  {"type":"file","version":"1"}
]}
JSON
"#;
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn scan_log(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("scan.log"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Discovery and explicit paths
// ============================================================================

#[test]
fn test_discovered_config_drives_targets_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let scanner = write_scanner(temp_dir.path());
    write_config(
        &temp_dir.path().join("container-sbom.config.yml"),
        &format!(
            r#"
skip_build: true
scanner: {}
scanner_format: cyclonedx-json@1.5
output: reports/bom.json
targets:
  - label: source
    args: ["dir:./src"]
  - label: runtime
    args: ["registry:shop:1.0"]
"#,
            scanner.display()
        ),
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Scanning source"))
        .stderr(predicate::str::contains("Scanning runtime"));

    assert_eq!(
        scan_log(temp_dir.path()),
        vec![
            "dir:./src -o cyclonedx-json@1.5",
            "registry:shop:1.0 -o cyclonedx-json@1.5"
        ]
    );

    let document = read_json(&temp_dir.path().join("reports/bom.json"));
    // zlib plus two unnamed components kept apart under the default policy
    assert_eq!(document["components"].as_array().unwrap().len(), 3);
    assert!(!temp_dir.path().join("sbom").exists());
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let scanner = write_scanner(temp_dir.path());
    let config_path = temp_dir.path().join("ci/sbom.yml");
    write_config(
        &config_path,
        &format!(
            "skip_build: true\nscanner: {}\ntargets:\n  - label: app\n    args: [\"dir:.\"]\n",
            scanner.display()
        ),
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(scan_log(temp_dir.path()), vec!["dir:. -o cyclonedx-json"]);
    assert!(temp_dir.path().join("sbom/sbom.json").exists());
}

#[test]
fn test_explicit_config_takes_precedence_over_discovered() {
    let temp_dir = TempDir::new().unwrap();
    let scanner = write_scanner(temp_dir.path());
    write_config(
        &temp_dir.path().join("container-sbom.config.yml"),
        "scanner: /nonexistent/discovered-scanner\n",
    );
    let explicit = temp_dir.path().join("explicit.yml");
    write_config(
        &explicit,
        &format!(
            "skip_build: true\nscanner: {}\noutput: explicit.json\n",
            scanner.display()
        ),
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .args(["-c", explicit.to_str().unwrap()])
        .assert()
        .success();

    assert!(temp_dir.path().join("explicit.json").exists());
}

#[test]
fn test_collapse_policy_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let scanner = write_scanner(temp_dir.path());
    write_config(
        &temp_dir.path().join("container-sbom.config.yml"),
        &format!(
            "skip_build: true\nscanner: {}\nanonymous_components: collapse\ntargets:\n  - label: a\n    args: [\"dir:a\"]\n  - label: b\n    args: [\"dir:b\"]\n",
            scanner.display()
        ),
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Duplicates dropped: 4"));

    let document = read_json(&temp_dir.path().join("sbom/sbom.json"));
    assert_eq!(document["components"].as_array().unwrap().len(), 2);
}

// ============================================================================
// Validation and warnings
// ============================================================================

#[test]
fn test_unknown_config_field_warns() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("container-sbom.config.yml"),
        "skip_build: true\ntargets: []\nformat: spdx\n",
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'format' will be ignored",
        ));
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("container-sbom.config.yml"),
        "targets: [[[broken",
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_anonymous_policy_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("container-sbom.config.yml"),
        "anonymous_components: merge\n",
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("anonymous_components"));

    assert!(!temp_dir.path().join("sbom").exists());
}

#[test]
fn test_empty_target_label_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir.path().join("container-sbom.config.yml"),
        "targets:\n  - label: \"\"\n    args: [\"dir:.\"]\n",
    );

    cargo_bin_cmd!("container-sbom")
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not be empty"));
}

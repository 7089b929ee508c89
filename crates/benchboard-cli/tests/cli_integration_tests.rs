// Dweve Benchboard - Benchmark Results Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/bench.json");
const UNAVAILABLE: &str =
    "Benchmark data could not be loaded. Make sure data/bench.js or data/bench.json exists.";

// Test helper to create a benchboard command
fn benchboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("benchboard").expect("Failed to find benchboard binary");
    cmd.env_remove("BENCHBOARD_MAX_FILE_SIZE").env("NO_COLOR", "1");
    cmd
}

// Test helper to lay out a site directory with the given data files
fn site_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).expect("Failed to write data file");
    }
    dir
}

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("data/bench.json")
}

// ===== Help =====

#[test]
fn test_help_output() {
    benchboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchboard - benchmark results dashboard"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_version_output() {
    benchboard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchboard"));
}

// ===== Render =====

#[test]
fn test_render_site_to_file() {
    let site = site_with(&[("data/bench.json", FIXTURE)]);
    let out = site.path().join("index.html");

    benchboard_cmd()
        .args(["render", "--data"])
        .arg(site.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Ref C (1M avg)"));
    assert!(html.contains("Runs: 4 - Commit: 3c9d2e41"));
    assert_eq!(html.matches("class=\"run-panel\"").count(), 3);
    assert!(!html.contains(UNAVAILABLE));
}

#[test]
fn test_render_prefers_data_script() {
    let script = format!("window.BENCH_DATA = {};\n", FIXTURE.replace("\"runs\": 4", "\"runs\": 9"));
    let site = site_with(&[("data/bench.js", script.as_str()), ("data/bench.json", FIXTURE)]);

    benchboard_cmd()
        .args(["render", "--data"])
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Runs: 9 - Commit"));
}

#[test]
fn test_render_title_and_viewport() {
    let site = site_with(&[("data/bench.json", FIXTURE)]);

    benchboard_cmd()
        .args(["render", "--title", "Nightly <x86>", "--width", "600", "--height", "300", "--data"])
        .arg(data_file(&site))
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Nightly &lt;x86&gt;</title>"))
        .stdout(predicate::str::contains("viewBox=\"0 0 600 300\""));
}

#[test]
fn test_render_without_data_writes_notice_page() {
    let empty = TempDir::new().unwrap();

    benchboard_cmd()
        .args(["render", "--data"])
        .arg(empty.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(UNAVAILABLE))
        .stdout(predicate::str::contains("class=\"summary-card\"").not())
        .stdout(predicate::str::contains("run-panel").not());
}

#[test]
fn test_render_invalid_json_writes_notice_page() {
    let site = site_with(&[("data/bench.json", "{ not json")]);

    benchboard_cmd()
        .args(["render", "--data"])
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(UNAVAILABLE));
}

// ===== Validate =====

#[test]
fn test_validate_fixture() {
    let site = site_with(&[("data/bench.json", FIXTURE)]);

    benchboard_cmd()
        .args(["validate", "--data"])
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Versions: Ref C, Go asm, Go purego, FP C"))
        .stdout(predicate::str::contains("Sizes:    1K, 8K, 1M"));
}

#[test]
fn test_validate_missing_data_fails() {
    let empty = TempDir::new().unwrap();

    benchboard_cmd()
        .args(["validate", "--data"])
        .arg(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No benchmark data found"));
}

#[test]
fn test_validate_invalid_json_fails() {
    let site = site_with(&[("data/bench.json", "[1, 2")]);

    benchboard_cmd()
        .args(["validate", "--data"])
        .arg(data_file(&site))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid benchmark JSON"));
}

#[test]
fn test_validate_respects_max_file_size() {
    let site = site_with(&[("data/bench.json", FIXTURE)]);

    benchboard_cmd()
        .env("BENCHBOARD_MAX_FILE_SIZE", "16")
        .args(["validate", "--data"])
        .arg(data_file(&site))
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ===== Summary =====

#[test]
fn test_summary_table() {
    let site = site_with(&[("data/bench.json", FIXTURE)]);

    benchboard_cmd()
        .args(["summary", "--size", "1M", "--data"])
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchmark Summary:"))
        .stdout(predicate::str::contains("4 runs - Commit: 3c9d2e41"))
        .stdout(predicate::str::contains("1954.40"))
        .stdout(predicate::str::contains(" 8K ").not());
}

#[test]
fn test_summary_json() {
    let site = site_with(&[("data/bench.json", FIXTURE)]);

    let output = benchboard_cmd()
        .args(["summary", "--json", "--size", "8K", "--data"])
        .arg(site.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["version"], "ref_c");
    assert_eq!(entries[0]["size"], "8K");
    assert_eq!(entries[3]["label"], "FP C");
    assert_eq!(entries[3]["stats"]["max"], 2210.9);
}

#[test]
fn test_summary_unknown_size() {
    let site = site_with(&[("data/bench.json", FIXTURE)]);

    benchboard_cmd()
        .args(["summary", "--size", "64K", "--data"])
        .arg(site.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown size '64K'. Available sizes: 1K, 8K, 1M"));
}

// ===== Completion =====

#[test]
fn test_completion_bash() {
    benchboard_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("benchboard"));
}

#[test]
fn test_completion_install_instructions() {
    benchboard_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compinit"));
}

#[test]
fn test_completion_unsupported_shell() {
    benchboard_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell: 'tcsh'"));
}

#[test]
fn test_fixture_is_valid_json() {
    let value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(value["sizes"].as_array().map(Vec::len), Some(3));
}

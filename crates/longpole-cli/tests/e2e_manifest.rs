//! E2E manifest tests: `lp releases` and the missing-manifest error path.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lp_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lp"));
    cmd.current_dir(dir);
    cmd.env("LONGPOLE_LOG", "error");
    cmd
}

const RELEASES_JSON: &str = r#"[
    {
        "version": "v1.0",
        "status": "shipped",
        "issues": [{"number": 1, "title": "Bootstrap"}],
        "createdAt": "2026-01-15T00:00:00Z"
    },
    {
        "version": "v1.1",
        "name": "Quality",
        "status": "active",
        "issues": [
            {"number": 2, "title": "Flaky tests"},
            {"number": 3, "title": "Docs refresh"}
        ],
        "createdAt": "2026-03-02T00:00:00Z"
    }
]"#;

fn init_project(dir: &Path) {
    let project = dir.join(".longpole");
    fs::create_dir_all(&project).expect("project dir");
    fs::write(project.join("releases.json"), RELEASES_JSON).expect("releases");
}

#[test]
fn releases_json_lists_manifest() {
    let dir = TempDir::new().expect("tempdir");
    init_project(dir.path());

    let output = lp_cmd(dir.path())
        .args(["releases", "--json"])
        .output()
        .expect("releases should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("releases --json must parse");
    let releases = json["releases"].as_array().expect("releases array");
    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0]["version"], "v1.0");
    assert_eq!(releases[1]["issues"].as_array().expect("issues").len(), 2);
}

#[test]
fn releases_human_lists_versions_and_counts() {
    let dir = TempDir::new().expect("tempdir");
    init_project(dir.path());

    lp_cmd(dir.path())
        .args(["releases"])
        .env("FORMAT", "pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("Releases (2)"))
        .stdout(predicate::str::contains("v1.1"))
        .stdout(predicate::str::contains("shipped"))
        .stdout(predicate::str::contains("2 issue(s)"));
}

#[test]
fn missing_manifest_reports_typed_error() {
    let dir = TempDir::new().expect("tempdir");

    lp_cmd(dir.path())
        .args(["releases"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("release manifest not found"))
        .stderr(predicate::str::contains("releases.json"));
}

#[test]
fn project_flag_points_at_another_root() {
    let project_dir = TempDir::new().expect("tempdir");
    init_project(project_dir.path());
    let elsewhere = TempDir::new().expect("tempdir");

    let project_arg = project_dir.path().to_str().expect("utf8 path");
    lp_cmd(elsewhere.path())
        .args(["releases", "--json", "--project", project_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.0"));
}

#[test]
fn completions_emit_a_script() {
    let dir = TempDir::new().expect("tempdir");
    lp_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lp"));
}

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_caselog"))
}

#[test]
fn show_renders_the_full_card() {
    let repo = TempDir::new().expect("repo");
    let output = bin()
        .arg("--root")
        .arg(repo.path())
        .arg("show")
        .arg("sso-implementation")
        .output()
        .expect("run show");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Enterprise SSO & Identity Management"));
    assert!(stdout.contains("Problem"));
    assert!(stdout.contains("Reduced authentication-related tickets by 78%"));
}

#[test]
fn show_fails_for_an_unknown_id() {
    let repo = TempDir::new().expect("repo");
    let output = bin()
        .arg("--root")
        .arg(repo.path())
        .arg("show")
        .arg("not-a-project")
        .output()
        .expect("run show");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("not-a-project"));
}

#[test]
fn facets_json_keeps_the_contract_orderings() {
    let repo = TempDir::new().expect("repo");
    let output = bin()
        .arg("--root")
        .arg(repo.path())
        .arg("facets")
        .arg("--json")
        .output()
        .expect("run facets");
    assert!(output.status.success());
    let doc: Value = serde_json::from_slice(&output.stdout).expect("parse json");

    let years: Vec<i64> = doc["years"]
        .as_array()
        .expect("years")
        .iter()
        .filter_map(|v| v.as_i64())
        .collect();
    assert_eq!(years, vec![2024, 2023]);

    let statuses: Vec<&str> = doc["statuses"]
        .as_array()
        .expect("statuses")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(statuses, vec!["Production", "UAT", "POC"]);

    let categories: Vec<&str> = doc["categories"]
        .as_array()
        .expect("categories")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(
        categories,
        vec!["Infrastructure", "Security", "DevOps", "Architecture"]
    );
}

#[test]
fn version_prints_the_crate_version() {
    let output = bin().arg("version").output().expect("run version");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with("caselog "));
}

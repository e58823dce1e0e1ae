use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_caselog"))
}

fn list_json(root: &std::path::Path, extra: &[&str]) -> Value {
    let mut cmd = bin();
    cmd.arg("--root").arg(root).arg("list").arg("--json");
    for arg in extra {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("run list");
    assert!(output.status.success(), "list failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn project_ids(doc: &Value) -> Vec<String> {
    doc["projects"]
        .as_array()
        .expect("projects array")
        .iter()
        .map(|p| p["id"].as_str().expect("id").to_string())
        .collect()
}

#[test]
fn list_falls_back_to_the_builtin_dataset() {
    let repo = TempDir::new().expect("repo");
    let doc = list_json(repo.path(), &[]);
    assert_eq!(doc["total_count"], 5);
    assert_eq!(doc["visible_count"], 5);
    assert_eq!(project_ids(&doc).len(), 5);
}

#[test]
fn status_filter_narrows_to_production_projects_in_order() {
    let repo = TempDir::new().expect("repo");
    let doc = list_json(repo.path(), &["--status", "Production"]);
    assert_eq!(
        project_ids(&doc),
        vec![
            "cloud-migration-program",
            "sso-implementation",
            "observability-platform",
        ]
    );
    assert_eq!(doc["visible_count"], 3);
    assert_eq!(doc["total_count"], 5);
    assert_eq!(doc["selection"]["status"], "Production");
}

#[test]
fn filters_combine_conjunctively() {
    let repo = TempDir::new().expect("repo");
    let doc = list_json(
        repo.path(),
        &["--status", "Production", "--category", "Infrastructure"],
    );
    assert_eq!(project_ids(&doc), vec!["cloud-migration-program"]);
    assert_eq!(doc["visible_count"], 1);
}

#[test]
fn zero_match_year_yields_an_empty_visible_set() {
    let repo = TempDir::new().expect("repo");
    let doc = list_json(repo.path(), &["--year", "1999"]);
    assert_eq!(doc["visible_count"], 0);
    assert_eq!(doc["total_count"], 5);
    assert_eq!(doc["selection"]["year"], 1999);
    assert!(project_ids(&doc).is_empty());
}

#[test]
fn human_output_carries_the_status_line_and_affordance() {
    let repo = TempDir::new().expect("repo");
    let output = bin()
        .arg("--root")
        .arg(repo.path())
        .arg("list")
        .arg("--status")
        .arg("uat")
        .output()
        .expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Showing 1 of 5 projects"));
    assert!(stdout.contains("Multi-Region Disaster Recovery Platform"));

    let output = bin()
        .arg("--root")
        .arg(repo.path())
        .arg("list")
        .arg("--year")
        .arg("1999")
        .output()
        .expect("run list");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("No projects match the current filters."));
}

#[test]
fn unknown_status_flag_fails_at_the_flag_boundary() {
    let repo = TempDir::new().expect("repo");
    let output = bin()
        .arg("--root")
        .arg(repo.path())
        .arg("list")
        .arg("--status")
        .arg("DR")
        .output()
        .expect("run list");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("DR"));
}

#[test]
fn expanded_list_includes_sections() {
    let repo = TempDir::new().expect("repo");
    let output = bin()
        .arg("--root")
        .arg(repo.path())
        .arg("list")
        .arg("--expanded")
        .output()
        .expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Problem"));
    assert!(stdout.contains("Impact"));
}

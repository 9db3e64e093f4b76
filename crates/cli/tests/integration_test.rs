use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn mlscaffold() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mlscaffold"))
}

fn create(root: &Path) {
    mlscaffold()
        .args(["create", "--quiet", "--root"])
        .arg(root)
        .assert()
        .success();
}

#[test]
fn shows_help() {
    mlscaffold()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mlscaffold"));
}

#[test]
fn create_builds_the_template() {
    let tmp = tempfile::tempdir().unwrap();

    mlscaffold()
        .args(["create", "--quiet", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));

    assert!(tmp.path().join("src/cnn_classifier/__init__.py").is_file());
    assert!(tmp.path().join("src/cnn_classifier/pipeline/__init__.py").is_file());
    assert!(tmp.path().join(".github/workflows/.gitkeep").is_file());
    assert!(tmp.path().join("dvc.yaml").is_file());
}

#[test]
fn create_honors_project_name() {
    let tmp = tempfile::tempdir().unwrap();

    mlscaffold()
        .args(["create", "--quiet", "--name", "segmenter", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("src/segmenter/entity/__init__.py").is_file());
    assert!(!tmp.path().join("src/cnn_classifier").exists());
}

#[test]
fn create_twice_reports_no_failures() {
    let tmp = tempfile::tempdir().unwrap();
    create(tmp.path());

    mlscaffold()
        .args(["create", "--quiet", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("failure").not());
}

#[test]
fn clean_removes_template_tree() {
    let tmp = tempfile::tempdir().unwrap();
    create(tmp.path());

    mlscaffold()
        .args(["clean", "--quiet", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    assert!(!tmp.path().join("src").exists());
    assert!(!tmp.path().join(".github").exists());
    assert!(!tmp.path().join("dvc.yaml").exists());
}

#[test]
fn clean_preserves_user_files() {
    let tmp = tempfile::tempdir().unwrap();
    create(tmp.path());
    let kept = tmp.path().join("src/cnn_classifier/utils/common.py");
    fs::write(&kept, "def read_yaml(): ...\n").unwrap();

    mlscaffold()
        .args(["clean", "--quiet", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    assert!(kept.is_file());
    assert!(tmp.path().join("src").is_dir());
}

#[test]
fn json_report_carries_outcomes() {
    let tmp = tempfile::tempdir().unwrap();

    let output = mlscaffold()
        .args(["create", "--quiet", "--format", "json", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcomes\""))
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["operation"], "create");
    assert_eq!(value["created"], 17);
    assert_eq!(value["failed"], 0);
}

#[test]
fn path_failure_still_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    // A file where the template expects the config directory.
    fs::write(tmp.path().join("config"), "blocker").unwrap();

    mlscaffold()
        .args(["create", "--quiet", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("failure"));
}

#[test]
fn strict_flag_exits_nonzero_on_path_failure() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("config"), "blocker").unwrap();

    mlscaffold()
        .args(["create", "--quiet", "--strict", "--root"])
        .arg(tmp.path())
        .assert()
        .failure();
}

#[test]
fn rejects_invalid_project_name() {
    let tmp = tempfile::tempdir().unwrap();

    mlscaffold()
        .args(["create", "--quiet", "--name=-bad-", "--root"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn writes_a_dated_log_file() {
    let tmp = tempfile::tempdir().unwrap();
    create(tmp.path());

    let logs: Vec<_> = fs::read_dir(tmp.path().join("logs"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        logs.iter().any(|n| n.starts_with("mlscaffold.log")),
        "no log file in {logs:?}"
    );
}

//! Runs the built `contentmap` binary against a temp workspace.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::test_utils::{write_content, ROLE_CONTENT};

fn contentmap(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_contentmap"))
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .env_remove("CONTENTMAP_LOG")
        .env_remove("CONTENTMAP_CONTENT_PACKAGE")
        .env("XDG_CONFIG_HOME", workspace.join("xdg"))
        .output()
        .unwrap()
}

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_content(&temp_dir.path().join("content"), "", "Banner", ROLE_CONTENT);
    temp_dir
}

#[test]
fn test_eval_prints_json_records() {
    let temp_dir = workspace();
    let output = contentmap(
        temp_dir.path(),
        &["eval", "--name", "Banner", "--attr", "msg", "--attr", "title", "--cond", "role=admin"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["msg"], "hi admin");
    assert_eq!(records[1]["title"], "Admin");
}

#[test]
fn test_eval_text_format_marks_absent() {
    let temp_dir = workspace();
    let output = contentmap(
        temp_dir.path(),
        &[
            "eval", "--name", "Banner", "--attr", "title", "--cond", "role=guest", "--format", "text",
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Selected records: 2"));
    assert!(stdout.contains("title: (absent)"));
}

#[test]
fn test_inspect_by_path() {
    let temp_dir = workspace();
    let path = temp_dir.path().join("content").join("Banner.json");
    let output = contentmap(temp_dir.path(), &["inspect", "--content", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resultType: Banner"));
    assert!(stdout.contains("selectionNodes: 3 (1 unconditional)"));
}

#[test]
fn test_traversing_name_is_rejected() {
    let temp_dir = workspace();
    let output = contentmap(temp_dir.path(), &["eval", "--name", "../content/Banner", "--attr", "msg"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error (invalid arguments)"), "stderr: {}", stderr);
}

#[test]
fn test_missing_content_exits_with_error() {
    let temp_dir = workspace();
    let output = contentmap(temp_dir.path(), &["eval", "--name", "Absent", "--attr", "msg"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error (content not found)"));
}

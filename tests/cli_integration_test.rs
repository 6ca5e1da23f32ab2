//! End-to-end tests of the `seqflow` binary.

use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn seqflow() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seqflow"));
    cmd.env_remove("SEQFLOW_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_run_reduction_plain() {
    let output = seqflow()
        .args(["run", "reduction", "--plain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("== Reduction ==\n"));
    assert!(stdout.contains("Sum = 109\n"));
    assert!(stdout.contains("Min value is = 1\n"));
    assert!(stdout.contains("Max value is = 54\n"));
}

#[test]
fn test_list_names_every_demo() {
    let output = seqflow().arg("list").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["basics", "reduction", "functional-interfaces", "employees"] {
        assert!(stdout.contains(name), "missing {}", name);
    }
}

#[test]
fn test_unknown_demo_fails() {
    seqflow().args(["run", "missing"]).assert().failure();
}

#[test]
fn test_explicit_config_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        indoc! {"
            [output]
            color = false
        "},
    )
    .unwrap();

    let output = seqflow()
        .arg("--config")
        .arg(&path)
        .args(["run", "basics"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("== Basics ==\nAll numbers\n"));
}

#[test]
fn test_invalid_config_reports_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[pipeline]\nunknown_key = 1\n").unwrap();

    let output = seqflow()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("bad.toml"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    seqflow()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join(".seqflow.toml").exists());

    seqflow()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    seqflow()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

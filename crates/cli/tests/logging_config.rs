use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file_from_flag() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let vault = root.join("Vault");
    fs::create_dir_all(&vault).unwrap();
    fs::write(vault.join("note.md"), "").unwrap();
    let log_file = root.join("mdindex.log");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.arg("--vault")
        .arg(&vault)
        .arg("--output")
        .arg(root.join("index.md"))
        .arg("--log-file")
        .arg(&log_file)
        .arg("--log-level")
        .arg("debug")
        .assert()
        .success();

    assert!(log_file.exists(), "Log file should be created");
}

#[test]
fn test_logging_section_in_config() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let vault = root.join("Vault");
    fs::create_dir_all(&vault).unwrap();
    let log_file = root.join("split.log");

    let config_path = root.join("config.json");
    let config_content = format!(
        r#"{{
  "vault_path": "{}",
  "output_path": "{}",
  "logging": {{ "level": "info", "file_level": "trace", "file": "{}" }}
}}"#,
        vault.display(),
        root.join("index.md").display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.arg("--config").arg(&config_path).assert().success();

    assert!(log_file.exists());
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.arg("--vault")
        .arg(root)
        .arg("--output")
        .arg(root.join("index.md"))
        .arg("--log-level")
        .arg("trace")
        .assert()
        .success();

    // If it didn't crash, the level parsing worked.
}

#[test]
fn test_log_file_keeps_scan_lines_when_write_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let vault = root.join("Vault");
    fs::create_dir_all(vault.join("Daily")).unwrap();
    fs::write(vault.join("Daily/2024-01-15.md"), "").unwrap();
    let blocker = root.join("blocker");
    fs::write(&blocker, "").unwrap();
    let log_file = root.join("mdindex.log");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.arg("--vault")
        .arg(&vault)
        .arg("--output")
        .arg(blocker.join("out.md"))
        .arg("--log-level")
        .arg("debug")
        .arg("--log-file")
        .arg(&log_file)
        .assert()
        .failure()
        .code(1);

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Folder Daily: 1 files"), "log was: {log}");
    assert!(log.contains("Scanned Vault: 1 folders, 1 files"), "log was: {log}");
    assert!(log.contains("Rendered markdown report"), "log was: {log}");
}

#[test]
fn test_uncreatable_log_file_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.arg("--vault")
        .arg(root)
        .arg("--output")
        .arg(root.join("index.md"))
        .arg("--log-file")
        .arg(root.join("missing/dir/mdindex.log"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("failed to create log file"));
}

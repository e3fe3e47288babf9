use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn index_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("Vault");
    write_file(&vault.join("Daily/2024-01-15.md"), "");
    let output = tmp.path().join("index.md");

    let cfg = tmp.path().join("config.json");
    let json = format!(
        r#"{{ "vault_path": "{}", "output_path": "{}" }}"#,
        vault.display(),
        output.display()
    );
    write_file(&cfg, &json);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.args(["--config", cfg.to_str().unwrap()]);
    cmd.assert().success().stdout(predicate::str::contains("Found 1 folders, 1 files"));

    assert!(fs::read_to_string(&output).unwrap().contains("📁 Daily/ (1 files)"));
}

#[test]
fn index_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("Vault");
    write_file(&vault.join("note.md"), "");
    let output = tmp.path().join("index.md");

    let cfg_path = tmp.path().join("mdindex").join("config.json");
    write_file(
        &cfg_path,
        &format!(
            r#"{{ "vault_path": "{}", "output_path": "{}" }}"#,
            vault.display(),
            output.display()
        ),
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("--batch");
    cmd.assert().success().stdout(predicate::str::contains("Index saved to:"));
    assert!(output.exists());
}

#[test]
fn index_fails_when_config_missing_key() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.json");
    write_file(&cfg, r#"{ "vault_path": "/tmp/v" }"#);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.args(["--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required key: output_path"));
}

#[test]
fn index_fails_when_config_file_missing() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("absent.json");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdindex"));
    cmd.args(["--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}

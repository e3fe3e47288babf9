use mdindex_core::config::{ConfigError, ConfigLoader};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn missing_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.json");
    let err = ConfigLoader::load(&cfg_path).unwrap_err();
    match err {
        ConfigError::NotFound(_) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn invalid_json_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.json");
    write_file(&cfg_path, "vault_path = \"/tmp/v\"\n");

    let err = ConfigLoader::load(&cfg_path).unwrap_err();
    match err {
        ConfigError::ParseError(..) => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn missing_vault_path_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.json");
    write_file(&cfg_path, r#"{"output_path": "/tmp/index.md"}"#);

    let err = ConfigLoader::load(&cfg_path).unwrap_err();
    match err {
        ConfigError::MissingKey { key: "vault_path", .. } => {}
        other => panic!("expected MissingKey(vault_path), got {other:?}"),
    }
}

#[test]
fn missing_output_path_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.json");
    write_file(&cfg_path, r#"{"vault_path": "/tmp/vault"}"#);

    let err = ConfigLoader::load(&cfg_path).unwrap_err();
    assert!(err.to_string().contains("missing required key: output_path"));
}

#[test]
fn wrong_value_type_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.json");
    write_file(&cfg_path, r#"{"vault_path": 42, "output_path": "/o.md"}"#);

    let err = ConfigLoader::load(&cfg_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(..)));
}

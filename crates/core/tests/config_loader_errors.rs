use mdmeta_core::config::loader::{ConfigError, ConfigLoader};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn missing_config_file() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope.toml");

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn bad_version_is_rejected() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 2

[profiles.default]
vault_root = "/tmp/vault"
"#,
    );

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    assert!(matches!(err, ConfigError::BadVersion(2)));
}

#[test]
fn unknown_profile_is_rejected() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1

[profiles.default]
vault_root = "/tmp/vault"
"#,
    );

    let err = ConfigLoader::load(Some(&cfg_path), Some("work")).unwrap_err();
    assert!(matches!(err, ConfigError::ProfileNotFound(p) if p == "work"));
}

#[test]
fn invalid_toml_is_rejected() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = [nope");

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(..)));
}

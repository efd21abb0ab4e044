use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write(dir: &Path, rel: &str, content: impl AsRef<str>) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content.as_ref()).unwrap();
}

fn make_config(vault_root: &str) -> String {
    format!(
        r#"
version = 1
profile = "test"

[profiles.test]
vault_root = "{vault_root}"
"#
    )
}

fn mdm(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdm"));
    cmd.arg("--config").arg(root.join("config.toml"));
    cmd
}

#[test]
fn focused_note_is_the_default_target() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    let vault = root.join("vault");

    write(root, "config.toml", make_config(&vault.to_string_lossy()));
    write(root, "vault/notes/today.md", "# Today\n");

    mdm(root)
        .arg("focus")
        .arg(root.join("vault/notes/today.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   mdm focus"))
        .stdout(predicate::str::contains("notes/today.md"));

    // no --note: the focused note receives the tag
    mdm(root)
        .arg("add-tag")
        .arg("--value")
        .arg("daily")
        .assert()
        .success()
        .stdout(predicate::str::contains("added \"daily\" to tags"));

    let content = fs::read_to_string(root.join("vault/notes/today.md")).unwrap();
    assert!(content.contains("tags: daily"));
}

#[test]
fn bare_focus_shows_current_state() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    let vault = root.join("vault");

    write(root, "config.toml", make_config(&vault.to_string_lossy()));
    write(root, "vault/a.md", "# A\n");

    mdm(root)
        .arg("focus")
        .assert()
        .success()
        .stdout(predicate::str::contains("no focused note"));

    mdm(root).arg("focus").arg(root.join("vault/a.md")).assert().success();

    mdm(root)
        .arg("focus")
        .assert()
        .success()
        .stdout(predicate::str::contains("focused note: a.md"));
}

#[test]
fn clear_removes_the_active_note() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    let vault = root.join("vault");

    write(root, "config.toml", make_config(&vault.to_string_lossy()));
    write(root, "vault/a.md", "# A\n");

    mdm(root).arg("focus").arg(root.join("vault/a.md")).assert().success();
    mdm(root)
        .arg("focus")
        .arg("--clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("focus cleared"));

    mdm(root)
        .arg("add-tag")
        .arg("--value")
        .arg("x")
        .assert()
        .failure()
        .stdout(predicate::str::contains("no active markdown note"));
}

#[test]
fn focusing_a_note_outside_the_vault_fails() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    let vault = root.join("vault");
    fs::create_dir_all(&vault).unwrap();

    write(root, "config.toml", make_config(&vault.to_string_lossy()));
    write(root, "elsewhere/b.md", "# B\n");

    mdm(root)
        .arg("focus")
        .arg(root.join("elsewhere/b.md"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("not inside the vault"));
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run the binary inside `dir`, isolated from any user configuration.
fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commitgate").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn init_repo(dir: &Path, message: &str) {
    let repo = git2::Repository::init(dir).unwrap();
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
        .unwrap();
}

#[test]
fn valid_message() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .args(["-m", "feat(auth): add login functionality"])
        .assert()
        .success()
        .stdout(contains("✅ Commit message is valid"));
}

#[test]
fn invalid_message_reports_first_rule() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .args(["--message", "feat: Added login."])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("❌ Invalid commit message:"))
        .stderr(contains("Subject should not end with a period"))
        .stderr(contains("lowercase").not());
}

#[test]
fn unknown_type() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .args(["-m", "feature: add x"])
        .assert()
        .code(1)
        .stderr(contains("does not follow Conventional Commits format"))
        .stderr(contains("Your message: feature: add x"));
}

#[test]
fn merge_commit_is_accepted() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .args(["-m", "Merge branch 'Release/1.0' into main."])
        .assert()
        .success();
}

#[test]
fn message_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(&path, "fix(io): handle short reads\n\n# Please enter the commit message\n").unwrap();

    cmd(dir.path()).arg(&path).assert().success();
}

#[test]
fn message_flag_wins_over_file() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .args(["does-not-exist.txt", "-m", "docs: update readme"])
        .assert()
        .success();
}

#[test]
fn unreadable_file() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .arg("missing.txt")
        .assert()
        .code(1)
        .stderr(contains("Error: File 'missing.txt' could not be read"));
}

#[test]
fn no_message_prints_usage() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .assert()
        .code(1)
        .stdout(contains("Usage"))
        .stderr(contains("No commit message provided"));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let output = cmd(dir.path())
        .args(["--format", "json", "-m", "fix: fixed the bug"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["code"], "subject-imperative");
    assert_eq!(value["subject"], "fix: fixed the bug");
}

#[test]
fn config_file_sets_length_and_emoji() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("commitgate.toml"),
        "[rules]\nmax_subject_length = 15\n\n[ui]\nemoji = false\n",
    )
    .unwrap();

    cmd(dir.path())
        .args(["-m", "fix: stop leak"])
        .assert()
        .success()
        .stdout(contains("Commit message is valid"))
        .stdout(contains("✅").not());

    cmd(dir.path())
        .args(["-m", "fix: stop a leak in io"])
        .assert()
        .code(1)
        .stderr(contains("(22 chars). Keep it under 15 characters."));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .args(["--config", "nope.toml", "-m", "fix: x"])
        .assert()
        .code(1)
        .stderr(contains("Configuration file not found"));
}

#[test]
fn validate_revision() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path(), "chore: Initial commit");

    cmd(dir.path())
        .args(["--rev", "HEAD"])
        .assert()
        .code(1)
        .stderr(contains("Subject should start with lowercase letter"));
}

#[test]
fn hook_lifecycle() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path(), "chore: initial commit");

    cmd(dir.path())
        .args(["hook", "status"])
        .assert()
        .success()
        .stdout(contains("not installed"));

    cmd(dir.path())
        .args(["hook", "install"])
        .assert()
        .success()
        .stdout(contains("Installed commit-msg hook"));

    let script = fs::read_to_string(dir.path().join(".git/hooks/commit-msg")).unwrap();
    assert!(script.contains("exec commitgate \"$1\""));

    cmd(dir.path())
        .args(["hook", "status"])
        .assert()
        .success()
        .stdout(contains("(commitgate)"));

    cmd(dir.path())
        .args(["hook", "uninstall"])
        .assert()
        .success();
    assert!(!dir.path().join(".git/hooks/commit-msg").exists());
}

#[test]
fn hook_outside_repository() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .args(["hook", "install"])
        .assert()
        .code(1)
        .stderr(contains("Not a git repository"));
}

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("commitgate.toml").exists());

    cmd(dir.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(contains("already exists"));
}

#[test]
fn version() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn broken_config_does_not_block_init_or_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commitgate.toml");
    fs::write(&path, "[rules\nbroken").unwrap();

    cmd(dir.path()).arg("version").assert().success();

    cmd(dir.path())
        .args(["init", "--force", "--no-color"])
        .assert()
        .success()
        .stdout(contains("Created"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("max_subject_length = 72"));

    cmd(dir.path())
        .args(["-m", "fix: stop leak"])
        .assert()
        .success();
}

#[test]
fn broken_config_fails_validation() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("commitgate.toml"), "[rules\nbroken").unwrap();

    cmd(dir.path())
        .args(["-m", "fix: stop leak"])
        .assert()
        .code(1)
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn empty_message_flag_falls_back_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(&path, "docs: update readme\n").unwrap();

    cmd(dir.path())
        .arg(&path)
        .args(["-m", ""])
        .assert()
        .success();

    cmd(dir.path())
        .args(["-m", ""])
        .assert()
        .code(1)
        .stdout(contains("Usage"))
        .stderr(contains("No commit message provided"));
}

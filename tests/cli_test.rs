/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary, feed commands on stdin and verify the output
mod common;

use assert_cmd::Command;
use common::{dict_root, realistic_workspace};
use predicates::prelude::*;

fn doyo(workspace: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_doyo"));
    cmd.current_dir(workspace).env_remove("DOYO_HOME").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_banner_and_exit() {
    let workspace = tempfile::TempDir::new().unwrap();

    doyo(workspace.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting DoYO version"))
        .stdout(predicate::str::contains("Available commands"));

    assert!(dict_root(workspace.path()).is_dir(), "root directory should be created");
}

#[test]
fn test_cli_quiet_skips_banner() {
    let workspace = tempfile::TempDir::new().unwrap();

    doyo(workspace.path())
        .arg("--quiet")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting DoYO").not());
}

#[test]
fn test_cli_importall_then_query() {
    let workspace = realistic_workspace();

    doyo(workspace.path())
        .arg("--quiet")
        .write_stdin("importall\nlist red\nview lemon\nregex ^[ac]\nDESC citrus\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 4 of 4 files"))
        .stdout(predicate::str::contains("Matching words : [apple, cherry, tomato]"))
        .stdout(predicate::str::contains("=== lemon ===\nTags : [fruit, sour]\n\nYellow citrus."))
        .stdout(predicate::str::contains("[apple, cherry]"))
        .stdout(predicate::str::contains("[lemon]"));
}

#[test]
fn test_cli_state_survives_restart() {
    let workspace = realistic_workspace();

    doyo(workspace.path()).arg("--quiet").write_stdin("importall\nremove apple\nexit\n").assert().success();

    doyo(workspace.path())
        .args(["view", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Undefined word."));

    doyo(workspace.path())
        .args(["list", "sour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching words : [lemon]"));
}

#[test]
fn test_cli_root_flag() {
    let workspace = realistic_workspace();
    let root = workspace.path().join("elsewhere");

    doyo(workspace.path())
        .arg("--root")
        .arg(&root)
        .args(["import", "cherry.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Importing file under key cherry"));

    assert!(root.join("dictionary").is_file());
    assert!(!dict_root(workspace.path()).exists());
}

#[test]
fn test_cli_errors_do_not_stop_the_loop() {
    let workspace = tempfile::TempDir::new().unwrap();

    doyo(workspace.path())
        .arg("--quiet")
        .write_stdin("import missing.txt\nremove ghost\nregex (\nfly away\nlist\nview ghost\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File missing.txt doesn't exist"))
        .stdout(predicate::str::contains("No such entry to remove: ghost"))
        .stdout(predicate::str::contains("Bad regex."))
        .stdout(predicate::str::contains("Unknown command. Type 'help' for help."))
        .stdout(predicate::str::contains("Missing argument for 'list'"))
        .stdout(predicate::str::contains("Undefined word."));
}

#[test]
fn test_cli_end_of_input_exits() {
    let workspace = tempfile::TempDir::new().unwrap();
    doyo(workspace.path()).arg("--quiet").write_stdin("help\n").assert().success();
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_doyo"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.2.0"));
}

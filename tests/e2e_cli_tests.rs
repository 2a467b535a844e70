//! End-to-end tests that spawn the real binary against a temporary journal.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

fn ghostwriter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ghostwriter").expect("binary");
    cmd.current_dir(dir.path())
        .env_remove("GHOSTWRITER_CONFIG_PATH")
        .env_remove("GHOSTWRITER_JOURNAL_PATH")
        .env_remove("GHOSTWRITER_ENHANCER_ENABLED")
        .args(["--no-latency", "--no-color", "--seed", "3"]);
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.arg("--json").output().expect("run ghostwriter");
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).expect("json stdout")
}

#[test]
fn write_then_show_round_trip() {
    let dir = TempDir::new().expect("tempdir");

    ghostwriter(&dir)
        .args(["write", "--mood", "2", "--note", "feeling lost", "--date", "2024-02-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved with poetic reflection"));

    ghostwriter(&dir)
        .args(["show", "2024-02-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original words: \"feeling lost\""));

    assert!(dir.path().join("journal.json").exists());
}

#[test]
fn disabled_enhancer_saves_plain_entry() {
    let dir = TempDir::new().expect("tempdir");
    let mut cmd = ghostwriter(&dir);
    cmd.env("GHOSTWRITER_ENHANCER_ENABLED", "false")
        .args(["write", "--mood", "4", "--note", "plain"]);
    let value = json_output(&mut cmd);
    assert!(value["entry"]["polishedEntry"].is_null());
}

#[test]
fn seed_stats_and_chart() {
    let dir = TempDir::new().expect("tempdir");
    ghostwriter(&dir).arg("seed").assert().success();

    let stats = json_output(ghostwriter(&dir).arg("stats"));
    assert_eq!(stats["entries"], 14);
    assert_eq!(stats["streaks"]["longest"], 14);

    ghostwriter(&dir)
        .args(["chart", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood over the last 7 entries"));
}

#[test]
fn delete_removes_entry() {
    let dir = TempDir::new().expect("tempdir");
    ghostwriter(&dir)
        .args(["write", "-m", "3", "-d", "2024-01-05", "--no-enhance"])
        .assert()
        .success();
    ghostwriter(&dir).args(["delete", "2024-01-05"]).assert().success();

    let listed = json_output(ghostwriter(&dir).arg("list"));
    assert_eq!(listed["entries"].as_array().map(Vec::len), Some(0));
}

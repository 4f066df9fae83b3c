//! End-to-end tests for the fitcoach binary.
//!
//! Every test points the config and data paths at a temp directory and
//! strips provider credentials from the environment, so plans always come
//! from the deterministic template path and no network calls happen.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn fitcoach(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fitcoach").unwrap();
    cmd.env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("FITCOACH_API_KEY")
        .env_remove("FITCOACH_VIDEO_API_KEY")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir.join("fitcoach-data"));
    cmd
}

fn onboard_beginner(dir: &Path) {
    fitcoach(dir)
        .args([
            "onboard",
            "--name",
            "Alex",
            "--age",
            "31",
            "--level",
            "beginner",
            "--goal",
            "build-muscle",
            "--equipment",
            "none",
            "--duration",
            "15",
        ])
        .assert()
        .success();
}

#[test]
fn test_help_lists_subcommands() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("onboard"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_onboard_creates_profile_and_plan() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .args([
            "onboard",
            "--name",
            "Alex",
            "--age",
            "31",
            "--goal",
            "build-muscle",
            "--equipment",
            "dumbbells",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Profile saved for Alex"))
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Sunday"));

    let data_dir = temp.path().join("fitcoach-data");
    assert!(data_dir.join("profile.json").exists());
    assert!(data_dir.join("plan.json").exists());

    let plan: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(data_dir.join("plan.json")).unwrap())
            .unwrap();
    assert_eq!(plan["weekly_schedule"].as_array().unwrap().len(), 7);
}

#[test]
fn test_onboard_rejects_bad_duration() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .args([
            "onboard",
            "--name",
            "Alex",
            "--age",
            "31",
            "--goal",
            "build-muscle",
            "--equipment",
            "none",
            "--duration",
            "20",
        ])
        .assert()
        .failure();
}

#[test]
fn test_onboard_rejects_none_mixed_with_equipment() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .args([
            "onboard",
            "--name",
            "Alex",
            "--age",
            "31",
            "--goal",
            "general-fitness",
            "--equipment",
            "none",
            "--equipment",
            "dumbbells",
        ])
        .assert()
        .failure();
}

#[test]
fn test_plan_without_profile() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile found"));
}

#[test]
fn test_plan_shows_stored_plan() {
    let temp = tempfile::tempdir().unwrap();
    onboard_beginner(temp.path());

    fitcoach(temp.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEKLY PLAN"))
        .stdout(predicate::str::contains("Muscle Building"));
}

#[test]
fn test_session_dry_run_prints_numbered_plan() {
    let temp = tempfile::tempdir().unwrap();
    onboard_beginner(temp.path());

    fitcoach(temp.path())
        .args(["session", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FULL BODY SESSION"))
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("[Dry run"));
}

#[test]
fn test_session_scales_for_beginner() {
    let temp = tempfile::tempdir().unwrap();
    onboard_beginner(temp.path());

    // Core catalog at 5 minutes: Sit-ups 3x15 rest 30s, scaled for a
    // beginner to 11 reps and 42s rest
    fitcoach(temp.path())
        .args([
            "session",
            "--workout-type",
            "core",
            "--duration",
            "5",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sit-ups: 3 sets × 11, 42s rest"));
}

#[test]
fn test_session_substitutes_pull_ups_without_bar() {
    let temp = tempfile::tempdir().unwrap();
    onboard_beginner(temp.path());

    fitcoach(temp.path())
        .args([
            "session",
            "--workout-type",
            "upper-body",
            "--duration",
            "15",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Push-ups"))
        .stdout(predicate::str::contains("Pull-ups").not());
}

#[test]
fn test_session_keeps_pull_ups_with_bar() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .args([
            "onboard",
            "--name",
            "Alex",
            "--age",
            "31",
            "--level",
            "advanced",
            "--goal",
            "build-muscle",
            "--equipment",
            "pull-up-bar",
        ])
        .assert()
        .success();

    fitcoach(temp.path())
        .args([
            "session",
            "--workout-type",
            "upper-body",
            "--duration",
            "15",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pull-ups"));
}

#[test]
fn test_unknown_workout_type_falls_back_to_full_body() {
    let temp = tempfile::tempdir().unwrap();
    onboard_beginner(temp.path());

    fitcoach(temp.path())
        .args(["session", "--workout-type", "cardio", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FULL BODY SESSION"));
}

#[test]
fn test_session_without_profile_still_works() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .args(["session", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FULL BODY SESSION"));
}

#[test]
fn test_session_log_and_history() {
    let temp = tempfile::tempdir().unwrap();
    onboard_beginner(temp.path());

    fitcoach(temp.path())
        .args(["session", "--workout-type", "core", "--log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Session logged!"));

    fitcoach(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core"))
        .stdout(predicate::str::contains("1 session(s) total"));
}

#[test]
fn test_personas_listing() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .arg("personas")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drill Sergeant (drill-sergeant)"))
        .stdout(predicate::str::contains("Hype Beast (hype-beast)"))
        .stdout(predicate::str::contains("Zen Master (zen-master)"))
        .stdout(predicate::str::contains("System prompt").not());

    fitcoach(temp.path())
        .args(["personas", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("System prompt"))
        .stdout(predicate::str::contains("Visual awareness queries"));
}

#[test]
fn test_history_empty() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .args(["history", "--days", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions in the last 30 days"));
}

#[test]
fn test_end_without_video_key_fails() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .args(["end", "c123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("video API key"));
}

#[test]
fn test_setup_personas_without_video_key_fails() {
    let temp = tempfile::tempdir().unwrap();

    fitcoach(temp.path())
        .arg("setup-personas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("video API key"));
}

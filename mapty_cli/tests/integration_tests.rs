//! Integration tests for the mapty binary.
//!
//! These tests verify end-to-end behavior including:
//! - Recording running and cycling workouts
//! - Listing and locating workouts
//! - Persistence across invocations
//! - Reset and input rejection

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to run the CLI against an isolated data and config directory
fn mapty(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mapty").expect("Failed to find mapty binary");
    cmd.env("XDG_CONFIG_HOME", data_dir.join("config"))
        .env("TZ", "UTC")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn add_run(data_dir: &Path) {
    mapty(data_dir)
        .args(["add", "running", "--lat", "39", "--lng", "-12"])
        .args(["--distance", "5", "--duration", "24", "--cadence", "178"])
        .assert()
        .success();
}

fn add_ride(data_dir: &Path) {
    mapty(data_dir)
        .args(["add", "cycling", "--lat", "39.1", "--lng", "-12.1"])
        .args(["--distance", "27", "--duration", "95", "--elevation", "523"])
        .assert()
        .success();
}

fn read_workouts(data_dir: &Path) -> Vec<serde_json::Value> {
    let content =
        fs::read_to_string(data_dir.join("workouts.json")).expect("Failed to read workouts");
    serde_json::from_str(&content).expect("Workouts should be a JSON array")
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("mapty")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Running and cycling workout journal",
        ));
}

#[test]
fn test_list_empty_journal() {
    let temp_dir = setup_test_dir();

    mapty(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts recorded yet."));
}

#[test]
fn test_default_command_lists() {
    let temp_dir = setup_test_dir();
    add_run(temp_dir.path());

    mapty(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Running on"));
}

#[test]
fn test_add_running_persists_record() {
    let temp_dir = setup_test_dir();

    mapty(temp_dir.path())
        .args(["add", "running", "--lat", "39", "--lng", "-12"])
        .args(["--distance", "5", "--duration", "24", "--cadence", "178"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Running on"))
        .stdout(predicate::str::contains("4.8 min/km"));

    let workouts = read_workouts(temp_dir.path());
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["type"], "running");
    assert_eq!(workouts[0]["pace"], 4.8);
    assert_eq!(workouts[0]["cadence"], 178.0);
    assert_eq!(workouts[0]["coords"], serde_json::json!([39.0, -12.0]));
}

#[test]
fn test_add_cycling_persists_record() {
    let temp_dir = setup_test_dir();

    mapty(temp_dir.path())
        .args(["add", "cycling", "--lat", "39.1", "--lng", "-12.1"])
        .args(["--distance", "27", "--duration", "95", "--elevation", "523"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Cycling on"))
        .stdout(predicate::str::contains("17.1 km/h"));

    let workouts = read_workouts(temp_dir.path());
    assert_eq!(workouts[0]["type"], "cycling");
    assert_eq!(workouts[0]["elevation"], 523.0);
    assert!(workouts[0].get("cadence").is_none());
}

#[test]
fn test_workouts_accumulate_across_runs() {
    let temp_dir = setup_test_dir();

    for _ in 0..3 {
        add_run(temp_dir.path());
    }
    add_ride(temp_dir.path());

    let workouts = read_workouts(temp_dir.path());
    assert_eq!(workouts.len(), 4);
    assert_eq!(workouts[3]["type"], "cycling");
}

#[test]
fn test_list_shows_newest_first() {
    let temp_dir = setup_test_dir();
    add_run(temp_dir.path());
    add_ride(temp_dir.path());

    let output = mapty(temp_dir.path()).arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ride_at = stdout.find("Cycling on").expect("ride listed");
    let run_at = stdout.find("Running on").expect("run listed");
    assert!(ride_at < run_at, "Expected newest first:\n{}", stdout);
}

#[test]
fn test_locate_known_workout() {
    let temp_dir = setup_test_dir();
    add_run(temp_dir.path());

    let workouts = read_workouts(temp_dir.path());
    let id = workouts[0]["id"].as_str().unwrap().to_string();

    mapty(temp_dir.path())
        .args(["locate", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Workout {}", id)))
        .stdout(predicate::str::contains("at 39, -12"))
        .stdout(predicate::str::contains("openstreetmap.org"));
}

#[test]
fn test_locate_unknown_workout_is_not_an_error() {
    let temp_dir = setup_test_dir();
    add_run(temp_dir.path());

    mapty(temp_dir.path())
        .args(["locate", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workout with id does-not-exist"));
}

#[test]
fn test_reset_removes_everything() {
    let temp_dir = setup_test_dir();
    add_run(temp_dir.path());
    add_ride(temp_dir.path());

    mapty(temp_dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 workouts"));

    assert!(!temp_dir.path().join("workouts.json").exists());

    mapty(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts recorded yet."));
}

#[test]
fn test_non_positive_input_rejected() {
    let temp_dir = setup_test_dir();

    mapty(temp_dir.path())
        .args(["add", "running", "--lat", "39", "--lng", "-12"])
        .args(["--distance", "5", "--duration", "24", "--cadence", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inputs have to be positive numbers"));

    assert!(!temp_dir.path().join("workouts.json").exists());
}

#[test]
fn test_negative_elevation_rejected() {
    let temp_dir = setup_test_dir();

    mapty(temp_dir.path())
        .args(["add", "cycling", "--lat", "39", "--lng", "-12"])
        .args(["--distance", "20", "--duration", "60", "--elevation", "-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inputs have to be positive numbers"));
}

#[test]
fn test_zero_elevation_accepted() {
    let temp_dir = setup_test_dir();

    mapty(temp_dir.path())
        .args(["add", "cycling", "--lat", "39", "--lng", "-12"])
        .args(["--distance", "20", "--duration", "60", "--elevation", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20.0 km/h"));
}

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".prediction-dashboard").join("config.json")
}

const BINARY_NAME: &str = "prediction-dashboard";

/// Nothing listens here; connections are refused right away.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env_remove("PREDICTION_DASHBOARD_URL");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let home = temp_home_dir();
    command(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Terminal dashboard for a prediction service"))
        .stdout(contains("clear-history"));
}

#[test]
/// Declining the confirmation exits cleanly without touching the network.
fn declined_clear_history_makes_no_request() {
    let home = temp_home_dir();
    command(&home)
        .args(["clear-history", "--url", UNREACHABLE_URL])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Clear all prediction history?"))
        .stdout(contains("Nothing was cleared."));
}

#[test]
/// A prediction against an unreachable service fails.
fn predict_against_unreachable_service_fails() {
    let home = temp_home_dir();
    command(&home)
        .args([
            "predict",
            "--url",
            UNREACHABLE_URL,
            "--timeout-secs",
            "5",
            "--features",
            "5.1",
            "3.5",
            "1.4",
            "0.2",
        ])
        .assert()
        .failure()
        .stdout(contains("Prediction failed"));
}

#[test]
/// A confirmed clear against an unreachable service reports the failure.
fn confirmed_clear_history_against_unreachable_service_fails() {
    let home = temp_home_dir();
    command(&home)
        .args([
            "clear-history",
            "--yes",
            "--url",
            UNREACHABLE_URL,
            "--timeout-secs",
            "5",
        ])
        .assert()
        .failure()
        .stdout(contains("Failed to clear history"));
}

#[test]
/// Predict needs exactly four features.
fn predict_rejects_missing_features() {
    let home = temp_home_dir();
    command(&home)
        .args(["predict", "--features", "5.1", "3.5"])
        .assert()
        .failure();
}

#[test]
/// Stats against an unreachable service exits non-zero.
fn stats_against_unreachable_service_fails() {
    let home = temp_home_dir();
    command(&home)
        .args(["stats", "--url", UNREACHABLE_URL, "--timeout-secs", "5"])
        .assert()
        .failure()
        .stdout(contains("Failed to load statistics"));
}

#[test]
/// Config init writes a default file that config show reads back.
fn config_init_then_show() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    command(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("Wrote default configuration"));
    assert!(config_path.exists());

    command(&home)
        .args(["config", "show", "--url", "http://10.0.0.7:5000"])
        .assert()
        .success()
        .stdout(contains("\"refresh_interval_secs\": 30"))
        .stdout(contains("http://10.0.0.7:5000"));
}

#[test]
/// Config init refuses to overwrite unless forced.
fn config_init_keeps_existing_file() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"refresh_interval_secs": 10}"#).unwrap();

    command(&home).args(["config", "init"]).assert().failure();
    assert!(fs::read_to_string(&config_path).unwrap().contains("10"));

    command(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&config_path).unwrap().contains("30"));
}

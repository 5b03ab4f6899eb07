use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"{
    "default_timezone": "Europe/London",
    "coordinates": [
        {"latitude": 25.95, "longitude": 32.58, "timezone": "Africa/Cairo"}
    ],
    "reference_time": "2024-01-15T12:00:00Z"
}"#;

const USER: &str = r#"{
    "id": 9,
    "first_name": "Joe",
    "last_name": "",
    "email": "joe@blow.com",
    "timezone_offset": 3600,
    "followed_projects": [1],
    "statuses": [
        {"text": "Just got here", "created_at": "2024-01-01T00:00:00Z"},
        {"text": "Taking a break", "created_at": "2024-01-03T00:00:00Z"}
    ]
}"#;

const CONTRIBUTIONS: &str = r#"[
    {"project_id": 1, "user_id": 9, "count": 5},
    {"project_id": 2, "user_id": 9, "count": 8}
]"#;

/// Helper function to create a temporary directory with config, user and
/// contribution files
fn create_cli_test_environment() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config = temp_dir.path().join("config.json");
    let user = temp_dir.path().join("user.json");
    let contributions = temp_dir.path().join("contributions.json");
    fs::write(&config, CONFIG).expect("Failed to write config");
    fs::write(&user, USER).expect("Failed to write user");
    fs::write(&contributions, CONTRIBUTIONS).expect("Failed to write contributions");
    (temp_dir, config, user, contributions)
}

/// Helper function to create a Command with --no-color and an isolated
/// config home
fn profilefmt_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("profilefmt").expect("Failed to find profilefmt binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("xdg"));
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_name() {
    let (temp_dir, _config, user, _contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["name", user.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Joe\n");
}

#[test]
fn test_cli_name_from_stdin() {
    let (temp_dir, ..) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["name", "-"])
        .write_stdin(r#"{"email": "jane@example.org"}"#)
        .assert()
        .success()
        .stdout("jane\n");
}

#[test]
fn test_cli_timezone_and_offset() {
    let (temp_dir, config, user, _contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["--config", config.to_str().unwrap(), "timezone", user.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Amsterdam\n");

    profilefmt_cmd(&temp_dir)
        .args(["--config", config.to_str().unwrap(), "offset", user.to_str().unwrap()])
        .assert()
        .success()
        .stdout("+01:00\n");
}

#[test]
fn test_cli_timezone_from_coordinates() {
    let (temp_dir, config, ..) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["--config", config.to_str().unwrap(), "--format", "json", "tz", "-"])
        .write_stdin(r#"{"latitude": 25.95, "longitude": 32.58, "timezone_offset": 3600}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""timezone": "Africa/Cairo""#));
}

#[test]
fn test_cli_unrecognized_offset_fails() {
    let (temp_dir, ..) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["timezone", "-"])
        .write_stdin(r#"{"timezone_offset": 1234}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1234"));
}

#[test]
fn test_cli_status() {
    let (temp_dir, _config, user, _contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["status", user.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<span>Taking a break</span>\n");

    profilefmt_cmd(&temp_dir)
        .args(["status", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no status"));
}

#[test]
fn test_cli_status_escapes_text() {
    let (temp_dir, _config, _user, _contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["status", "-"])
        .write_stdin(
            r#"{"statuses": [{"text": "R&D <sprint>", "created_at": "2024-01-01T00:00:00Z"}]}"#,
        )
        .assert()
        .success()
        .stdout("<span>R&amp;D &lt;sprint&gt;</span>\n");

    profilefmt_cmd(&temp_dir)
        .args(["status", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML-escaped"));
}

#[test]
fn test_cli_blank_fields() {
    let (temp_dir, _config, user, _contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["blank-fields", user.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Last name, Skills, and Bio\n");

    profilefmt_cmd(&temp_dir)
        .args(["--format", "json", "blank-fields", user.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""last_name""#))
        .stdout(predicate::str::contains(r#""sentence": "Last name, Skills, and Bio""#));
}

#[test]
fn test_cli_contributions() {
    let (temp_dir, _config, user, contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args([
            "contributions",
            user.to_str().unwrap(),
            "--contributions",
            contributions.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("- Project 1: 5 commits\n");
}

#[test]
fn test_cli_show_card() {
    let (temp_dir, config, user, contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args([
            "--config",
            config.to_str().unwrap(),
            "show",
            user.to_str().unwrap(),
            "-c",
            contributions.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Joe"))
        .stdout(predicate::str::contains("- Timezone: Amsterdam (UTC+01:00)"))
        .stdout(predicate::str::contains("- Status: Taking a break"))
        .stdout(predicate::str::contains("- Missing: Last name, Skills, and Bio"))
        .stdout(predicate::str::contains("- Project 1: 5 commits"))
        .stdout(predicate::str::contains("Project 2").not());
}

#[test]
fn test_cli_show_json() {
    let (temp_dir, config, user, _contributions) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args([
            "--config",
            config.to_str().unwrap(),
            "--format",
            "json",
            "show",
            user.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Joe""#))
        .stdout(predicate::str::contains(r#""markup": "<span>Taking a break</span>""#))
        .stdout(predicate::str::contains(r#""utc_offset": "+01:00""#));
}

#[test]
fn test_cli_missing_snapshot_file() {
    let (temp_dir, ..) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .args(["name", "/nonexistent/user.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

#[test]
fn test_cli_invalid_config() {
    let (temp_dir, _config, user, _contributions) = create_cli_test_environment();
    let bad_config = temp_dir.path().join("bad.json");
    fs::write(&bad_config, r#"{"coordinates": [{"latitude": 91, "longitude": 0, "timezone": "UTC"}]}"#)
        .unwrap();

    profilefmt_cmd(&temp_dir)
        .args(["--config", bad_config.to_str().unwrap(), "name", user.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_schema() {
    let (temp_dir, ..) = create_cli_test_environment();

    profilefmt_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("UserSnapshot"))
        .stdout(predicate::str::contains("followed_projects"));
}

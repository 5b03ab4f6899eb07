use std::{fs, path::PathBuf};

use profilefmt_core::{Presenter, PresenterBuilder, PresenterConfig};
use tempfile::TempDir;

pub const CONFIG: &str = r#"{
    "default_timezone": "Europe/London",
    "coordinates": [
        {"latitude": 34.0, "longitude": -118.0, "timezone": "America/Los_Angeles"},
        {"latitude": 25.95, "longitude": 32.58, "timezone": "Africa/Cairo"}
    ],
    "reference_time": "2024-01-15T12:00:00Z"
}"#;

/// Helper function to write a file into a temporary directory
pub fn write_file(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// Helper function to create a presenter from the shared test configuration
pub fn create_test_presenter() -> (TempDir, Presenter) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_file(&temp_dir, "config.json", CONFIG);
    let config = PresenterConfig::load(Some(config_path.as_path())).expect("Failed to load config");
    (temp_dir, PresenterBuilder::from_config(&config).build())
}

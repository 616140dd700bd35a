//! Shared fixture for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
    events_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("lumio").join("config.toml");
        let events_path = temp_dir.path().join("events.jsonl");

        Self {
            _temp_dir: temp_dir,
            config_path,
            events_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn events_path(&self) -> &PathBuf {
        &self.events_path
    }

    pub fn write_events(&self, lines: &[&str]) {
        fs::write(&self.events_path, lines.join("\n")).expect("Failed to write events");
    }

    pub fn write_config(&self, content: &str) {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// `lumio` command pointed at this fixture's config file
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("lumio").expect("Failed to find lumio binary");
        cmd.env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }
}

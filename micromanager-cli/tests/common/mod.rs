//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the user's real configuration
//! - A standard two-system configuration fixture

use assert_cmd::Command;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated configuration.
///
/// `HOME` points into the temporary directory, so the default candidate
/// paths never reach the real user configuration.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path passed to `--config`
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with no files in it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("config.json");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// Create a test environment with the standard configuration.
    ///
    /// - `sysy`: `ecommerce` with services db, backend, frontend
    /// - `systa` (default): `shipping` with app; `payments` with api, worker
    pub fn with_standard_config() -> Self {
        let env = Self::new();
        let shop = env.write_compose("shop/compose.yml", &["db", "backend", "frontend"]);
        env.write_compose("ship/compose.yaml", &["app"]);
        let pay = env.write_compose("pay/docker-compose.yml", &["api", "worker"]);

        env.write_config(&json!({
            "systems": {
                "sysy": {
                    "projects": { "ecommerce": { "compose_file_path": shop } }
                },
                "systa": {
                    "default": true,
                    "projects": {
                        "shipping": { "compose_file_path": env.path().join("ship") },
                        "payments": { "compose_file_path": pay }
                    }
                }
            }
        }));
        env
    }

    /// Get a bare command builder without `--config`.
    ///
    /// The micromanager environment variables are cleared so tests are not
    /// affected by the caller's shell.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("micromanager").expect("Failed to find binary");
        cmd.env("HOME", &self.temp_path)
            .env_remove("MICROMANAGER_CONFIG")
            .env_remove("MICROMANAGER_LOG_MODE")
            .env_remove("MICROMANAGER_OUTPUT_FORMAT");
        cmd
    }

    /// Get a command builder with `--config` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create test directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a compose file declaring `services` in order.
    pub fn write_compose(&self, relative: &str, services: &[&str]) -> PathBuf {
        let mut contents = String::from("services:\n");
        for service in services {
            contents.push_str(&format!("  {service}:\n    image: busybox\n"));
        }
        self.write(relative, &contents)
    }

    /// Write `config.json` from a JSON value.
    pub fn write_config(&self, config: &serde_json::Value) -> PathBuf {
        let contents = serde_json::to_string_pretty(config).expect("Invalid JSON");
        self.write("config.json", &contents)
    }

    /// Run a command expected to succeed and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

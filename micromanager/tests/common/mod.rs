//! Common test utilities for integration tests.
//!
//! This module provides a fixture that lays out configuration and compose
//! files in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding a configuration and its compose files.
///
/// The directory is removed when the fixture is dropped.
pub struct ConfigFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl ConfigFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The fixture's root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the fixture.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a compose file declaring `services` in order.
    pub fn write_compose(&self, relative: &str, services: &[&str]) -> PathBuf {
        let mut contents = String::from("services:\n");
        for service in services {
            contents.push_str(&format!("  {service}:\n    image: busybox\n"));
        }
        self.write(relative, &contents)
    }

    /// Writes `config.json` from a JSON value.
    pub fn write_config(&self, config: &serde_json::Value) -> PathBuf {
        self.write("config.json", &serde_json::to_string_pretty(config).unwrap())
    }

    /// The fixture's path as a JSON string, for `compose_file_path` values.
    pub fn json_path(&self, relative: &str) -> String {
        self.path(relative).to_string_lossy().into_owned()
    }
}

//! Configuration file decoding.
//!
//! The configuration is conventionally JSON; files ending in `.yaml` or
//! `.yml` are decoded as YAML into the same value tree. Objects keep their
//! document order.

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::fs::FileSystem;

/// Format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use micromanager::config::ConfigFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.json")), ConfigFormat::Json);
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.YML")), ConfigFormat::Yaml);
    /// assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Json);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Reads and decodes configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and decode the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the file cannot be read or is not
    /// a valid document in its format.
    pub fn load_file<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Value> {
        let contents = fs.read_to_string(path).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            reason: format!("failed to read configuration file: {e}"),
        })?;

        Self::decode(path, &contents, ConfigFormat::from_path(path))
    }

    /// Decode configuration contents in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the contents do not decode.
    ///
    /// # Examples
    ///
    /// ```
    /// use micromanager::config::{ConfigFormat, ConfigLoader};
    /// use std::path::Path;
    ///
    /// let value = ConfigLoader::decode(
    ///     Path::new("config.yaml"),
    ///     "systems:\n  mysys:\n    projects: {}\n",
    ///     ConfigFormat::Yaml,
    /// )
    /// .unwrap();
    /// assert!(value["systems"]["mysys"]["projects"].is_object());
    /// ```
    pub fn decode(path: &Path, contents: &str, format: ConfigFormat) -> Result<Value> {
        let decoded: std::result::Result<Value, String> = match format {
            ConfigFormat::Json => {
                serde_json::from_str(contents).map_err(|e| format!("invalid JSON: {e}"))
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|e| format!("invalid YAML: {e}"))
            }
        };

        decoded.map_err(|reason| Error::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_load_json_keeps_order() {
        let fs = MockFileSystem::new().with_file(
            "config.json",
            r#"{"systems": {"zeta": {"projects": {}}, "alpha": {"projects": {}}}}"#,
        );
        let value = ConfigLoader::load_file(&fs, Path::new("config.json")).unwrap();
        let names: Vec<_> = value["systems"].as_object().unwrap().keys().collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_load_yaml_keeps_order() {
        let fs = MockFileSystem::new().with_file(
            "config.yml",
            "systems:\n  zeta:\n    projects: {}\n  alpha:\n    default: true\n    projects: {}\n",
        );
        let value = ConfigLoader::load_file(&fs, Path::new("config.yml")).unwrap();
        let names: Vec<_> = value["systems"].as_object().unwrap().keys().collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert_eq!(value["systems"]["alpha"]["default"], Value::Bool(true));
    }

    #[test]
    fn test_invalid_json() {
        let fs = MockFileSystem::new().with_file("config.json", "{ not json");
        match ConfigLoader::load_file(&fs, Path::new("config.json")) {
            Err(Error::InvalidConfig { reason, .. }) => assert!(reason.starts_with("invalid JSON")),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let fs = MockFileSystem::new().with_file("config.yaml", "invalid: yaml: syntax:");
        match ConfigLoader::load_file(&fs, Path::new("config.yaml")) {
            Err(Error::InvalidConfig { reason, .. }) => assert!(reason.starts_with("invalid YAML")),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_file() {
        let fs = MockFileSystem::new().with_dir("confdir");
        match ConfigLoader::load_file(&fs, Path::new("confdir")) {
            Err(Error::InvalidConfig { reason, .. }) => {
                assert!(reason.starts_with("failed to read configuration file"));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }
}

//! Extraction of service names from compose files.
//!
//! Only the keys of the top-level `services` mapping are read. What each
//! service declares is not validated.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::model::Service;

/// File names tried, in order, when a compose path points at a directory.
pub const COMPOSE_FILE_NAMES: [&str; 4] = [
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// Loads the ordered service list of a compose file.
///
/// # Examples
///
/// ```
/// use micromanager::config::ComposeFileLoader;
/// use micromanager::fs::MockFileSystem;
/// use std::path::Path;
///
/// let fs = MockFileSystem::new().with_file(
///     "shop/compose.yaml",
///     "services:\n  db:\n    image: postgres\n  backend: {}\n",
/// );
///
/// // A directory is searched for a conventional compose file name
/// let services = ComposeFileLoader::load(&fs, Path::new("shop")).unwrap();
/// let names: Vec<_> = services.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["db", "backend"]);
/// ```
pub struct ComposeFileLoader;

impl ComposeFileLoader {
    /// Load the services declared in the compose file at `path`.
    ///
    /// `path` may name the compose file itself or a directory containing one
    /// of [`COMPOSE_FILE_NAMES`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComposeFile`] if no compose file can be
    /// located, the file cannot be read or decoded, or it lacks a `services`
    /// mapping with string keys.
    pub fn load<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Vec<Service>> {
        let file = Self::locate(fs, path)?;
        let contents = fs
            .read_to_string(&file)
            .map_err(|e| invalid(&file, format!("failed to read compose file: {e}")))?;

        let services = Self::parse_services(&file, &contents)?;
        log::debug!(
            "loaded {} service(s) from {}",
            services.len(),
            file.display()
        );
        Ok(services)
    }

    /// Find the compose file for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComposeFile`] if `path` is a directory that
    /// contains none of the conventional compose file names.
    pub fn locate<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<PathBuf> {
        if !fs.is_dir(path) {
            return Ok(path.to_path_buf());
        }

        COMPOSE_FILE_NAMES
            .iter()
            .map(|name| path.join(name))
            .find(|candidate| fs.exists(candidate) && !fs.is_dir(candidate))
            .ok_or_else(|| {
                invalid(
                    path,
                    format!(
                        "directory contains no compose file (looked for {})",
                        COMPOSE_FILE_NAMES.join(", ")
                    ),
                )
            })
    }

    /// Parse compose file contents into the ordered service list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComposeFile`] if the contents are not valid
    /// YAML or lack a `services` mapping with non-empty string keys.
    pub fn parse_services(path: &Path, contents: &str) -> Result<Vec<Service>> {
        let document: Value = serde_yaml::from_str(contents)
            .map_err(|e| invalid(path, format!("invalid YAML: {e}")))?;

        let top = document
            .as_mapping()
            .ok_or_else(|| invalid(path, "top level is not a mapping"))?;

        let services = top
            .get("services")
            .ok_or_else(|| invalid(path, "services field missing"))?
            .as_mapping()
            .ok_or_else(|| invalid(path, "services field is not a mapping"))?;

        services
            .keys()
            .map(|key| match key.as_str() {
                Some(name) if !name.trim().is_empty() => Ok(Service::new(name)),
                Some(_) => Err(invalid(path, "service names must be non-empty")),
                None => Err(invalid(
                    path,
                    format!("service names must be strings, found {key:?}"),
                )),
            })
            .collect()
    }
}

fn invalid(path: &Path, reason: impl Into<String>) -> Error {
    Error::InvalidComposeFile {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

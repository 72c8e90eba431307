//! Structural validation of the configuration document.
//!
//! All "is this shape valid" decisions live here. Validation is pure: it never
//! touches the filesystem, so a malformed document is rejected before any
//! project's compose file is looked at.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::schema::{
    ConfigDocument, ProjectEntry, SystemEntry, COMPOSE_FILE_PATH_KEY, DEFAULT_KEY, PROJECTS_KEY,
    SYSTEMS_KEY,
};
use crate::error::{Error, Result};

/// Validates a decoded configuration document.
///
/// # Examples
///
/// ```
/// use micromanager::config::ConfigValidator;
/// use serde_json::json;
/// use std::path::Path;
///
/// let document = json!({
///     "systems": {
///         "mysys": {
///             "default": true,
///             "projects": { "coolproj": { "compose_file_path": "." } }
///         }
///     }
/// });
///
/// let validated = ConfigValidator::validate(Path::new("config.json"), &document).unwrap();
/// assert!(validated.systems["mysys"].default);
///
/// let err = ConfigValidator::validate(Path::new("config.json"), &json!({"systemsssss": {}}));
/// assert!(err.is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete document, failing at the first violation.
    ///
    /// Systems and projects are visited in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first structural rule
    /// that failed.
    pub fn validate(path: &Path, document: &Value) -> Result<ConfigDocument> {
        let systems = document
            .get(SYSTEMS_KEY)
            .and_then(Value::as_object)
            .ok_or_else(|| invalid(path, "systems field missing or not an object"))?;

        let mut validated = ConfigDocument::default();
        for (name, attrs) in systems {
            let entry = Self::validate_system(path, name, attrs)?;
            validated.systems.insert(name.clone(), entry);
        }

        Ok(validated)
    }

    fn validate_system(path: &Path, name: &str, attrs: &Value) -> Result<SystemEntry> {
        Self::validate_identifier(path, "system", name)?;

        let attrs = attrs.as_object().ok_or_else(|| {
            invalid(
                path,
                format!("system '{name}' must be an object, found {}", kind(attrs)),
            )
        })?;

        let default = attrs.get(DEFAULT_KEY).is_some_and(truthy);

        let projects = match attrs.get(PROJECTS_KEY) {
            None => {
                return Err(invalid(
                    path,
                    format!("projects field missing from system '{name}'"),
                ))
            }
            Some(Value::Object(projects)) => projects,
            Some(other) => {
                return Err(invalid(
                    path,
                    format!(
                        "projects field of system '{name}' must be an object, found {}",
                        kind(other)
                    ),
                ))
            }
        };

        let mut entry = SystemEntry {
            default,
            ..SystemEntry::default()
        };
        for (p_name, p_attrs) in projects {
            let project = Self::validate_project(path, name, p_name, p_attrs)?;
            entry.projects.insert(p_name.clone(), project);
        }

        Ok(entry)
    }

    fn validate_project(
        path: &Path,
        system: &str,
        name: &str,
        attrs: &Value,
    ) -> Result<ProjectEntry> {
        Self::validate_identifier(path, "project", name)?;

        let attrs: &Map<String, Value> = attrs.as_object().ok_or_else(|| {
            invalid(
                path,
                format!(
                    "project '{name}' in system '{system}' must be an object, found {}",
                    kind(attrs)
                ),
            )
        })?;

        match attrs.get(COMPOSE_FILE_PATH_KEY) {
            None => Err(invalid(
                path,
                format!("compose_file_path field missing from project '{name}' in system '{system}'"),
            )),
            Some(Value::String(compose)) => Ok(ProjectEntry {
                compose_file_path: PathBuf::from(compose),
            }),
            Some(other) => Err(invalid(
                path,
                format!(
                    "compose_file_path of project '{name}' in system '{system}' must be a string, found {}",
                    kind(other)
                ),
            )),
        }
    }

    /// Validate system and project names.
    ///
    /// Checks that the name is non-empty after trimming, contains no null
    /// bytes, and is not longer than 255 characters.
    fn validate_identifier(path: &Path, what: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(invalid(
                path,
                format!("{what} name cannot be empty or only whitespace"),
            ));
        }

        if trimmed.contains('\0') {
            return Err(invalid(
                path,
                format!("{what} name '{}' cannot contain null bytes", value.escape_debug()),
            ));
        }

        if trimmed.len() > 255 {
            return Err(invalid(
                path,
                format!("{what} name cannot exceed 255 characters"),
            ));
        }

        Ok(())
    }
}

fn invalid(path: &Path, reason: impl Into<String>) -> Error {
    Error::InvalidConfig {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Truthiness of a `default` value that is not a boolean.
///
/// `null`, zero, and empty strings, arrays or objects are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

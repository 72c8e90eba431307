//! Strongly-typed intermediate representation of the configuration document.
//!
//! [`ConfigValidator`](super::ConfigValidator) turns the decoded document into
//! these types; everything downstream works on them instead of on the raw
//! value tree. No filesystem state is captured here.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Top-level key holding the systems mapping.
pub const SYSTEMS_KEY: &str = "systems";
/// System key marking the default system.
pub const DEFAULT_KEY: &str = "default";
/// System key holding the projects mapping.
pub const PROJECTS_KEY: &str = "projects";
/// Project key holding the compose file path.
pub const COMPOSE_FILE_PATH_KEY: &str = "compose_file_path";

/// A structurally valid configuration document.
///
/// # Examples
///
/// ```
/// use micromanager::config::{ConfigDocument, ProjectEntry, SystemEntry};
///
/// let mut system = SystemEntry::default();
/// system.projects.insert(
///     "coolproj".to_string(),
///     ProjectEntry { compose_file_path: ".".into() },
/// );
///
/// let mut document = ConfigDocument::default();
/// document.systems.insert("mysys".to_string(), system);
/// assert!(!document.systems["mysys"].default);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Systems in document order.
    pub systems: IndexMap<String, SystemEntry>,
}

/// One entry under `systems`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemEntry {
    /// Truthiness of `default`, `false` when absent.
    pub default: bool,
    /// Projects in document order.
    pub projects: IndexMap<String, ProjectEntry>,
}

/// One entry under a system's `projects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// The compose file path as declared.
    pub compose_file_path: PathBuf,
}

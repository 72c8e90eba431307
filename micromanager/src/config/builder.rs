//! Construction of the system graph from a configuration document.

use std::path::Path;

use serde_json::Value;

use crate::config::compose::ComposeFileLoader;
use crate::config::schema::{ConfigDocument, ProjectEntry, SystemEntry};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::model::{Project, System, Systems};

/// Validates a decoded configuration document and builds the system graph.
///
/// Building happens in two stages. The whole document is first validated
/// structurally (see [`ConfigValidator`]); only then is each project's compose
/// path checked and loaded, in document order. The first failure aborts the
/// build and no partial result is returned.
///
/// # Examples
///
/// ```
/// use micromanager::config::SystemBuilder;
/// use micromanager::fs::MockFileSystem;
/// use serde_json::json;
/// use std::path::Path;
///
/// let fs = MockFileSystem::new()
///     .with_file("shop/compose.yaml", "services:\n  db: {}\n  backend: {}\n");
/// let document = json!({
///     "systems": {
///         "mysys": {
///             "default": true,
///             "projects": { "coolproj": { "compose_file_path": "shop" } }
///         }
///     }
/// });
///
/// let systems = SystemBuilder::new(&fs)
///     .build(Path::new("config.json"), &document)
///     .unwrap();
/// let project = &systems["mysys"].projects[0];
/// assert_eq!(project.name, "coolproj");
/// assert_eq!(project.service_names().collect::<Vec<_>>(), ["db", "backend"]);
/// ```
pub struct SystemBuilder<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> SystemBuilder<'a, F> {
    /// Creates a builder checking compose files against `fs`.
    #[must_use]
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Validate `document`, read from `path`, and build the system graph.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if the document is structurally invalid
    /// - [`Error::ComposeFileNotFound`] if a project's compose path does not exist
    /// - [`Error::InvalidComposeFile`] if a compose file cannot be loaded
    pub fn build(&self, path: &Path, document: &Value) -> Result<Systems> {
        let validated = ConfigValidator::validate(path, document)?;
        self.build_validated(&validated)
    }

    /// Build the system graph from an already validated document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComposeFileNotFound`] or [`Error::InvalidComposeFile`]
    /// for the first project whose compose file cannot be used.
    pub fn build_validated(&self, document: &ConfigDocument) -> Result<Systems> {
        let mut systems = Systems::with_capacity(document.systems.len());
        for (name, entry) in &document.systems {
            let system = self.build_system(name, entry)?;
            systems.insert(name.clone(), system);
        }
        Ok(systems)
    }

    fn build_system(&self, name: &str, entry: &SystemEntry) -> Result<System> {
        let projects = entry
            .projects
            .iter()
            .map(|(p_name, p_entry)| self.build_project(p_name, p_entry))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "built system '{name}' with {} project(s){}",
            projects.len(),
            if entry.default { " (default)" } else { "" }
        );
        Ok(System::new(name, entry.default, projects))
    }

    fn build_project(&self, name: &str, entry: &ProjectEntry) -> Result<Project> {
        let compose_file_path = &entry.compose_file_path;
        if !self.fs.exists(compose_file_path) {
            return Err(Error::ComposeFileNotFound {
                project: name.to_string(),
                path: compose_file_path.clone(),
            });
        }

        let services = ComposeFileLoader::load(self.fs, compose_file_path)?;
        Ok(Project::new(name, compose_file_path.clone(), services))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::model::Service;
    use serde_json::json;
    use std::path::PathBuf;

    const APP_COMPOSE: &str = "services:\n  app: {}\n";

    fn build(fs: &impl FileSystem, document: &Value) -> Result<Systems> {
        SystemBuilder::new(fs).build(Path::new("config.json"), document)
    }

    #[test]
    fn test_one_default_system() {
        let fs = MockFileSystem::new().with_file(
            "./compose.yaml",
            "services:\n  db: {}\n  backend: {}\n  frontend: {}\n",
        );
        let document = json!({
            "systems": {
                "mysys": {
                    "default": true,
                    "projects": { "coolproj": { "compose_file_path": "." } }
                }
            }
        });

        let systems = build(&fs, &document).unwrap();
        let expected = System::new(
            "mysys",
            true,
            vec![Project::new(
                "coolproj",
                ".",
                vec![
                    Service::new("db"),
                    Service::new("backend"),
                    Service::new("frontend"),
                ],
            )],
        );
        assert_eq!(systems.len(), 1);
        assert_eq!(systems["mysys"], expected);
    }

    #[test]
    fn test_two_systems() {
        let fs = MockFileSystem::new().with_file("app.yml", APP_COMPOSE);
        let document = json!({
            "systems": {
                "sysy": { "projects": { "ecommerce": { "compose_file_path": "app.yml" } } },
                "systa": {
                    "default": true,
                    "projects": { "shipping": { "compose_file_path": "app.yml" } }
                }
            }
        });

        let systems = build(&fs, &document).unwrap();
        assert_eq!(
            systems["sysy"],
            System::new(
                "sysy",
                false,
                vec![Project::new("ecommerce", "app.yml", vec![Service::new("app")])]
            )
        );
        assert_eq!(
            systems["systa"],
            System::new(
                "systa",
                true,
                vec![Project::new("shipping", "app.yml", vec![Service::new("app")])]
            )
        );
    }

    #[test]
    fn test_multiple_projects_share_compose_file() {
        let fs = MockFileSystem::new().with_file("app.yml", APP_COMPOSE);
        let document = json!({
            "systems": {
                "sys": {
                    "default": true,
                    "projects": {
                        "ecommerce": { "compose_file_path": "app.yml" },
                        "payments": { "compose_file_path": "app.yml" }
                    }
                }
            }
        });

        let systems = build(&fs, &document).unwrap();
        let names: Vec<_> = systems["sys"].projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ecommerce", "payments"]);
        for project in &systems["sys"].projects {
            assert_eq!(project.services, [Service::new("app")]);
        }
    }

    #[test]
    fn test_missing_compose_file_names_project() {
        let fs = MockFileSystem::new();
        let document = json!({
            "systems": {
                "sys": {
                    "projects": { "ecommerce": { "compose_file_path": "some/path/to/somewhere" } }
                }
            }
        });

        match build(&fs, &document) {
            Err(Error::ComposeFileNotFound { project, path }) => {
                assert_eq!(project, "ecommerce");
                assert_eq!(path, PathBuf::from("some/path/to/somewhere"));
            }
            other => panic!("expected ComposeFileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_compose_file_path_is_not_found() {
        let fs = MockFileSystem::new().with_file("app.yml", APP_COMPOSE);
        let document = json!({
            "systems": { "sys": { "projects": { "p": { "compose_file_path": "" } } } }
        });

        match build(&fs, &document) {
            Err(Error::ComposeFileNotFound { project, path }) => {
                assert_eq!(project, "p");
                assert_eq!(path, PathBuf::new());
            }
            other => panic!("expected ComposeFileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_non_boolean_default_builds() {
        let fs = MockFileSystem::new().with_file("app.yml", APP_COMPOSE);
        let document = json!({
            "systems": {
                "sys": { "default": 1, "projects": { "p": { "compose_file_path": "app.yml" } } },
                "off": { "default": "", "projects": {} }
            }
        });

        let systems = build(&fs, &document).unwrap();
        assert_eq!(
            systems["sys"],
            System::new(
                "sys",
                true,
                vec![Project::new("p", "app.yml", vec![Service::new("app")])]
            )
        );
        assert!(!systems["off"].is_default);
    }

    #[test]
    fn test_structural_errors_precede_filesystem_checks() {
        let fs = MockFileSystem::new();
        let document = json!({
            "systems": {
                "first": { "projects": { "p": { "compose_file_path": "missing.yml" } } },
                "second": { "projectssss": {} }
            }
        });

        let err = build(&fs, &document).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }), "got {err:?}");
    }

    #[test]
    fn test_invalid_compose_file_propagates() {
        let fs = MockFileSystem::new().with_file("bad.yml", "volumes: {}\n");
        let document = json!({
            "systems": { "sys": { "projects": { "p": { "compose_file_path": "bad.yml" } } } }
        });

        let err = build(&fs, &document).unwrap_err();
        assert!(matches!(err, Error::InvalidComposeFile { .. }), "got {err:?}");
    }

    #[test]
    fn test_order_preserved_everywhere() {
        let fs = MockFileSystem::new()
            .with_file("one.yml", "services:\n  s2: {}\n  s1: {}\n")
            .with_file("two.yml", "services:\n  s1: {}\n  s2: {}\n");
        let document = json!({
            "systems": {
                "B": { "projects": {
                    "p2": { "compose_file_path": "one.yml" },
                    "p1": { "compose_file_path": "two.yml" }
                } },
                "A": { "projects": {
                    "p1": { "compose_file_path": "two.yml" },
                    "p2": { "compose_file_path": "one.yml" }
                } }
            }
        });

        let systems = build(&fs, &document).unwrap();
        assert_eq!(systems.keys().collect::<Vec<_>>(), ["B", "A"]);
        let b = &systems["B"];
        assert_eq!(
            b.projects.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["p2", "p1"]
        );
        assert_eq!(b.projects[0].service_names().collect::<Vec<_>>(), ["s2", "s1"]);
        assert_eq!(b.projects[1].service_names().collect::<Vec<_>>(), ["s1", "s2"]);
    }
}

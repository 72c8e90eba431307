//! The configured system graph.
//!
//! A [`System`] owns its [`Project`]s, which own their [`Service`]s. The
//! whole graph is built once per resolution and is read-only afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

/// Parsed configuration: system name to system, in document order.
pub type Systems = IndexMap<String, System>;

/// A service declared in a project's compose file.
///
/// # Examples
///
/// ```
/// use micromanager::Service;
///
/// let service = Service::new("db");
/// assert_eq!(service.name, "db");
/// assert_eq!(format!("{service}"), "db");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Service {
    /// Service name, as declared under `services` in the compose file.
    pub name: String,
}

impl Service {
    /// Creates a service with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A project backed by a single compose file.
///
/// # Examples
///
/// ```
/// use micromanager::{Project, Service};
///
/// let project = Project::new(
///     "coolproj",
///     ".",
///     vec![Service::new("db"), Service::new("backend")],
/// );
/// let names: Vec<_> = project.service_names().collect();
/// assert_eq!(names, ["db", "backend"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project name, unique within its system.
    pub name: String,
    /// The compose file path exactly as declared in the configuration.
    pub compose_file_path: PathBuf,
    /// Services in compose file declaration order.
    pub services: Vec<Service>,
}

impl Project {
    /// Creates a project.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        compose_file_path: impl Into<PathBuf>,
        services: Vec<Service>,
    ) -> Self {
        Self {
            name: name.into(),
            compose_file_path: compose_file_path.into(),
            services,
        }
    }

    /// The declared compose file path.
    #[must_use]
    pub fn compose_file_path(&self) -> &Path {
        &self.compose_file_path
    }

    /// Iterates over service names in declaration order.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|s| s.name.as_str())
    }
}

/// A named group of projects.
///
/// # Examples
///
/// ```
/// use micromanager::{Project, System};
///
/// let system = System::new("mysys", true, vec![Project::new("coolproj", ".", vec![])]);
/// assert!(system.is_default);
/// assert!(system.project("coolproj").is_some());
/// assert!(system.project("other").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct System {
    /// System name, unique within the configuration.
    pub name: String,
    /// Whether the configuration marks this system as the default.
    pub is_default: bool,
    /// Projects in configuration declaration order.
    pub projects: Vec<Project>,
}

impl System {
    /// Creates a system.
    #[must_use]
    pub fn new(name: impl Into<String>, is_default: bool, projects: Vec<Project>) -> Self {
        Self {
            name: name.into(),
            is_default,
            projects,
        }
    }

    /// Looks up a project by name.
    #[must_use]
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Looks up a project by name, failing if it is not part of this system.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ProjectNotFound`] if no project has that name.
    pub fn require_project(&self, name: &str) -> crate::Result<&Project> {
        self.project(name)
            .ok_or_else(|| crate::Error::ProjectNotFound {
                system: self.name.clone(),
                project: name.to_string(),
            })
    }

    /// Iterates over every service of every project, in order.
    pub fn services(&self) -> impl Iterator<Item = (&Project, &Service)> {
        self.projects
            .iter()
            .flat_map(|p| p.services.iter().map(move |s| (p, s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_system() -> System {
        System::new(
            "sys",
            false,
            vec![
                Project::new("ecommerce", ".", vec![Service::new("app")]),
                Project::new(
                    "payments",
                    "./payments",
                    vec![Service::new("api"), Service::new("worker")],
                ),
            ],
        )
    }

    #[test]
    fn test_service_equality_by_name() {
        assert_eq!(Service::new("db"), Service::new("db"));
        assert_ne!(Service::new("db"), Service::new("cache"));
    }

    #[test]
    fn test_require_project() {
        let system = sample_system();
        assert_eq!(system.require_project("payments").unwrap().services.len(), 2);

        let err = system.require_project("shipping").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::ProjectNotFound { ref system, ref project }
                if system == "sys" && project == "shipping"
        ));
    }

    #[test]
    fn test_services_flattened_in_order() {
        let system = sample_system();
        let pairs: Vec<_> = system
            .services()
            .map(|(p, s)| (p.name.as_str(), s.name.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("ecommerce", "app"),
                ("payments", "api"),
                ("payments", "worker")
            ]
        );
    }

    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(sample_system()).unwrap();
        assert_eq!(value["name"], "sys");
        assert_eq!(value["is_default"], false);
        assert_eq!(value["projects"][1]["compose_file_path"], "./payments");
        assert_eq!(value["projects"][1]["services"][1]["name"], "worker");
    }
}

#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # micromanager
//!
//! A library for resolving a micromanager configuration into a graph of
//! systems, projects and services.
//!
//! A configuration file names one or more systems. Each system groups
//! projects, and each project points at a compose file whose `services`
//! mapping lists the project's services. The library locates the file,
//! validates it and builds the graph, failing fast on the first problem.
//!
//! ## Core Types
//!
//! - [`System`], [`Project`] and [`Service`]: The configured graph
//! - [`SystemRegistry`]: Lazy, memoizing access to systems and the default
//! - [`ConfigParser`]: One resolution pass over a candidate path list
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use micromanager::fs::MockFileSystem;
//! use micromanager::SystemRegistry;
//! use std::path::PathBuf;
//!
//! let fs = MockFileSystem::new()
//!     .with_file(
//!         "config.json",
//!         r#"{"systems": {"mysys": {"default": true, "projects": {
//!             "coolproj": {"compose_file_path": "compose.yml"}}}}}"#,
//!     )
//!     .with_file("compose.yml", "services:\n  db: {}\n  backend: {}\n");
//!
//! let mut registry = SystemRegistry::with_filesystem(vec![PathBuf::from("config.json")], fs);
//! let system = registry.default_system().unwrap();
//! assert_eq!(system.name, "mysys");
//!
//! let services: Vec<_> = system.projects[0].service_names().collect();
//! assert_eq!(services, ["db", "backend"]);
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod model;
pub mod output;
pub mod path;
pub mod registry;

// Re-export key types at crate root for convenience
pub use config::{ConfigParser, LoadedConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{Project, Service, System, Systems};
pub use output::{OutputFormat, OutputFormatter};
pub use path::PathResolver;
pub use registry::{RegistryState, SystemRegistry};

//! Configuration resolution and validation.
//!
//! A resolution pass runs these stages in order, each failing fast:
//!
//! 1. [`PathResolver`](crate::path::PathResolver) picks the first existing
//!    candidate path
//! 2. [`ConfigLoader`] decodes the file (JSON, or YAML by extension)
//! 3. [`ConfigValidator`] checks the document shape and produces a
//!    [`ConfigDocument`]
//! 4. [`SystemBuilder`] checks each project's compose path and loads its
//!    services through [`ComposeFileLoader`]
//!
//! [`ConfigParser`] chains all of them.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "systems": {
//!     "<system>": {
//!       "default": true,
//!       "projects": {
//!         "<project>": { "compose_file_path": "<path>" }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use micromanager::config::ConfigParser;
//! use micromanager::fs::MockFileSystem;
//! use micromanager::Error;
//! use std::path::PathBuf;
//!
//! let fs = MockFileSystem::new().with_file("config.json", r#"{"systemsssss": {}}"#);
//! let parser = ConfigParser::with_filesystem(vec![PathBuf::from("config.json")], fs);
//!
//! assert!(matches!(parser.parse(), Err(Error::InvalidConfig { .. })));
//! ```

pub mod builder;
pub mod compose;
pub mod loader;
pub mod parser;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::SystemBuilder;
pub use compose::ComposeFileLoader;
pub use loader::{ConfigFormat, ConfigLoader};
pub use parser::{ConfigParser, LoadedConfig};
pub use schema::{ConfigDocument, ProjectEntry, SystemEntry};
pub use validator::ConfigValidator;

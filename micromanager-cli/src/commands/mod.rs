//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `systems`: List configured systems
//! - `projects`: List the projects of a system
//! - `services`: List the services of a system or project
//! - `show`: Print a system graph in various formats
//! - `show_config_path`: Show the resolved configuration file
//! - `validate`: Resolve and build the configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod projects;
pub mod services;
pub mod show;
pub mod show_config_path;
pub mod systems;
pub mod validate;

pub use completions::CompletionsCommand;
pub use projects::ProjectsCommand;
pub use services::ServicesCommand;
pub use show::ShowCommand;
pub use show_config_path::ShowConfigPathCommand;
pub use systems::SystemsCommand;
pub use validate::ValidateCommand;

//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: building the
//! system registry from the global options and picking the system a command
//! operates on.

use crate::error::CliError;
use micromanager::path::{default_candidates, expand};
use micromanager::{System, SystemRegistry};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Use this configuration file instead of searching the default locations.
    pub config: Option<PathBuf>,
}

/// The candidate configuration paths for this invocation.
///
/// An explicit `--config` path is the only candidate; otherwise the
/// conventional locations are searched.
pub fn config_candidates(global: &GlobalOptions) -> Result<Vec<PathBuf>, CliError> {
    let Some(path) = &global.config else {
        return Ok(default_candidates());
    };

    let path = expand(path);
    if path.is_dir() {
        return Err(CliError::InvalidArguments(format!(
            "--config must name a file, but {} is a directory",
            path.display()
        )));
    }
    Ok(vec![path])
}

/// Build a registry over the configuration selected by the global options.
pub fn open_registry(global: &GlobalOptions) -> Result<SystemRegistry, CliError> {
    let candidates = config_candidates(global)?;
    log::debug!("configuration candidates: {candidates:?}");
    Ok(SystemRegistry::new(candidates))
}

/// The system a command operates on: the named one, or the current system.
pub fn select_system(
    registry: &mut SystemRegistry,
    name: Option<&str>,
) -> Result<System, CliError> {
    let system = match name {
        Some(name) => registry.select_system(name)?,
        None => registry.current_system()?,
    };
    Ok(system.clone())
}

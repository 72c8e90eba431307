//! Systems command implementation.
//!
//! This module implements the `systems` command, which lists every configured
//! system in document order and marks the default one.

use crate::error::CliError;
use crate::utils::{open_registry, GlobalOptions};
use clap::Args;

/// List configured systems.
#[derive(Args)]
pub struct SystemsCommand {
    /// Print names only, without the default marker
    #[arg(long)]
    pub names_only: bool,
}

impl SystemsCommand {
    /// Execute the systems command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut registry = open_registry(global)?;
        let systems = registry.systems()?;

        if systems.is_empty() && !global.quiet {
            eprintln!("No systems configured");
        }

        for system in systems.values() {
            if system.is_default && !self.names_only {
                println!("{} (default)", system.name);
            } else {
                println!("{}", system.name);
            }
        }

        Ok(())
    }
}

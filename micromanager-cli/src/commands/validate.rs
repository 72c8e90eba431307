//! Command to validate a micromanager configuration.

use crate::error::CliError;
use crate::utils::{config_candidates, GlobalOptions};
use clap::Args;
use micromanager::{ConfigParser, LoadedConfig};
use std::path::PathBuf;

/// Resolve and build the configuration, reporting the first problem found.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to the resolved one)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let candidates = match self.config_path {
            Some(path) => vec![path],
            None => config_candidates(global)?,
        };

        let loaded = ConfigParser::new(candidates).parse()?;

        if !global.quiet {
            println!("Configuration is valid: {}", summary(&loaded));
        }
        Ok(())
    }
}

fn summary(loaded: &LoadedConfig) -> String {
    let systems = loaded.systems.len();
    let projects: usize = loaded.systems.values().map(|s| s.projects.len()).sum();
    let services: usize = loaded
        .systems
        .values()
        .map(|s| s.services().count())
        .sum();

    format!(
        "{} ({systems} system(s), {projects} project(s), {services} service(s))",
        loaded.path.display()
    )
}

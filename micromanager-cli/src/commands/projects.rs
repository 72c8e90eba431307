//! Projects command implementation.

use crate::error::CliError;
use crate::utils::{open_registry, select_system, GlobalOptions};
use clap::Args;

/// List the projects of a system.
#[derive(Args)]
pub struct ProjectsCommand {
    /// System to list (defaults to the current system)
    #[arg(long, value_name = "NAME")]
    pub system: Option<String>,

    /// Also print each project's compose file path
    #[arg(long)]
    pub paths: bool,
}

impl ProjectsCommand {
    /// Execute the projects command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut registry = open_registry(global)?;
        let system = select_system(&mut registry, self.system.as_deref())?;

        for project in &system.projects {
            if self.paths {
                println!("{}\t{}", project.name, project.compose_file_path.display());
            } else {
                println!("{}", project.name);
            }
        }

        Ok(())
    }
}

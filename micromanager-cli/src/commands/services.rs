//! Services command implementation.
//!
//! Without `--project`, services of every project in the system are listed
//! as `project/service`, in declaration order.

use crate::error::CliError;
use crate::utils::{open_registry, select_system, GlobalOptions};
use clap::Args;

/// List the services of a system or one of its projects.
#[derive(Args)]
pub struct ServicesCommand {
    /// System to list (defaults to the current system)
    #[arg(long, value_name = "NAME")]
    pub system: Option<String>,

    /// Only list services of this project
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,
}

impl ServicesCommand {
    /// Execute the services command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut registry = open_registry(global)?;
        let system = select_system(&mut registry, self.system.as_deref())?;

        match self.project.as_deref() {
            Some(name) => {
                let project = system.require_project(name)?;
                for service in project.service_names() {
                    println!("{service}");
                }
            }
            None => {
                for (project, service) in system.services() {
                    println!("{}/{}", project.name, service.name);
                }
            }
        }

        Ok(())
    }
}

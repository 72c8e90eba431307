//! Command to show the resolved configuration file.

use crate::error::CliError;
use crate::utils::{config_candidates, GlobalOptions};
use clap::Args;
use micromanager::ConfigParser;

/// Show which configuration file would be used.
#[derive(Args)]
pub struct ShowConfigPathCommand {
    /// Print every candidate path instead, marking the one that exists
    #[arg(long)]
    pub candidates: bool,
}

impl ShowConfigPathCommand {
    /// Execute the show-config-path command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let parser = ConfigParser::new(config_candidates(global)?);

        if self.candidates {
            let found = parser.resolve().ok();
            for candidate in parser.candidates() {
                let marker = if found.as_ref() == Some(candidate) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {}", candidate.display());
            }
            return Ok(());
        }

        let path = parser.resolve()?;
        println!("{}", path.display());
        Ok(())
    }
}

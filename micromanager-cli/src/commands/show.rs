//! Show command implementation.
//!
//! This module implements the `show` command, which prints a system graph
//! (or every system with `--all`) as text, JSON or YAML.

use crate::error::CliError;
use crate::utils::{open_registry, select_system, GlobalOptions};
use clap::{Args, ValueEnum};
use micromanager::OutputFormat;

/// Print a system with its projects and services.
#[derive(Args)]
pub struct ShowCommand {
    /// System to show (defaults to the current system)
    #[arg(long, value_name = "NAME", conflicts_with = "all")]
    pub system: Option<String>,

    /// Show every configured system
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "MICROMANAGER_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: FormatArg,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Indented text (human-readable)
    Human,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let formatter = OutputFormat::from(self.format).create_formatter();
        let mut registry = open_registry(global)?;

        let output = if self.all {
            formatter.format_systems(registry.systems()?)?
        } else {
            let system = select_system(&mut registry, self.system.as_deref())?;
            formatter.format_system(&system)?
        };

        println!("{output}");
        Ok(())
    }
}

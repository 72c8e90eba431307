//! Main entry point for the micromanager CLI.
//!
//! This is a read-only inspection tool over a micromanager configuration:
//! - `systems`: List configured systems
//! - `projects`: List the projects of a system
//! - `services`: List the services of a system or project
//! - `show`: Print a system graph
//! - `validate`: Check the configuration and its compose files

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = micromanager::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Systems(cmd) => cmd.execute(&global),
        cli::Command::Projects(cmd) => cmd.execute(&global),
        cli::Command::Services(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::ShowConfigPath(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

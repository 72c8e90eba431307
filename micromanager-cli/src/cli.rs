//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ProjectsCommand, ServicesCommand, ShowCommand, ShowConfigPathCommand,
    SystemsCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting micromanager system configurations.
#[derive(Parser)]
#[command(name = "micromanager")]
#[command(version, about = "Inspect micromanager system configurations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of the default locations
    #[arg(long, value_name = "PATH", global = true, env = "MICROMANAGER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List configured systems
    Systems(SystemsCommand),

    /// List the projects of a system
    Projects(ProjectsCommand),

    /// List the services of a system or project
    Services(ServicesCommand),

    /// Print a system with its projects and services
    Show(ShowCommand),

    /// Show the resolved configuration file
    ShowConfigPath(ShowConfigPathCommand),

    /// Validate the configuration
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

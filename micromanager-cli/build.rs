//! Build script for micromanager-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn system_arg() -> Arg {
    Arg::new("system")
        .long("system")
        .value_name("NAME")
        .help("System to use (defaults to the current system)")
}

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("micromanager")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect micromanager system configurations")
        .long_about(
            "Read-only inspection of the systems, projects and services declared in a \
             micromanager configuration file",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this configuration file instead of the default locations")
                .value_name("PATH")
                .global(true)
                .env("MICROMANAGER_CONFIG"),
        )
        .subcommands(vec![
            Command::new("systems")
                .about("List configured systems")
                .long_about("List every configured system in document order, marking the default"),
            Command::new("projects")
                .about("List the projects of a system")
                .arg(system_arg()),
            Command::new("services")
                .about("List the services of a system or project")
                .arg(system_arg())
                .arg(
                    Arg::new("project")
                        .long("project")
                        .value_name("NAME")
                        .help("Only list services of this project"),
                ),
            Command::new("show")
                .about("Print a system with its projects and services")
                .arg(system_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["human", "json", "yaml"])
                        .default_value("human")
                        .help("Output format"),
                ),
            Command::new("show-config-path")
                .about("Show the resolved configuration file")
                .long_about("Print the first existing configuration candidate"),
            Command::new("validate")
                .about("Validate the configuration")
                .long_about("Resolve the configuration and load every compose file it references"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("micromanager.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}

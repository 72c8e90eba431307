//! Shell completion generation command.
//!
//! The script goes to stdout; installation hints go to stderr unless
//! `--quiet` is given.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "micromanager";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable {} completions:", self.shell);
                for line in hint {
                    eprintln!("#   {line}");
                }
                eprintln!();
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static [&'static str]> {
    match shell {
        Shell::Bash => Some(&[
            "micromanager completions bash > ~/.local/share/bash-completion/completions/micromanager",
            "or add to ~/.bashrc: eval \"$(micromanager completions bash)\"",
        ]),
        Shell::Zsh => Some(&[
            "micromanager completions zsh > ~/.zsh/completions/_micromanager",
            "and make sure ~/.zsh/completions is in your $fpath",
        ]),
        Shell::Fish => Some(&[
            "micromanager completions fish > ~/.config/fish/completions/micromanager.fish",
        ]),
        Shell::PowerShell => Some(&[
            "micromanager completions powershell | Out-String | Invoke-Expression",
        ]),
        _ => None,
    }
}

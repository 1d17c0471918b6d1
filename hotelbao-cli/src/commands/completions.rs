//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "hotelbao";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; installation hints go to stderr.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Generating {} completion script", self.shell);
                eprintln!("# To enable completions:");
                eprintln!("#   {hint}");
                eprintln!();
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => {
            Some("hotelbao completions bash > ~/.local/share/bash-completion/completions/hotelbao")
        }
        Shell::Zsh => Some("hotelbao completions zsh > ~/.zsh/completions/_hotelbao"),
        Shell::Fish => Some("hotelbao completions fish > ~/.config/fish/completions/hotelbao.fish"),
        Shell::PowerShell => {
            Some("hotelbao completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}

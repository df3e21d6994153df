//! Completions command

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::{output, Cli};

const BIN_NAME: &str = "carryover";

/// Print a completion script for a shell
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");

        match &self.output {
            Some(path) => {
                let mut file = std::fs::File::create(path)?;
                write_completions(self.shell, &mut file);
                if !cli.quiet {
                    output::success(&format!("Completions written to {}", path.display()));
                }
            }
            None => write_completions(self.shell, &mut std::io::stdout()),
        }
        Ok(())
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, out);
}

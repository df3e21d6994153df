//! Extract command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use carryover_changelog::MessageParser;

use crate::cli::{output, read_input, Cli};

/// Save the change log comments of a commit message as JSON
#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Commit message file (`-` for standard input)
    pub input: PathBuf,

    /// Write the comment store to a file (default: print to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExtractCommand {
    /// Execute the extract command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = %self.input.display(), output = ?self.output, "executing extract command");
        let config = cli.config()?;
        let content = read_input(&self.input)?;
        let message = MessageParser::with_config(&config.message).parse_message(&content);
        let json = message.comments().to_json()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", json))?;
                if !cli.quiet {
                    output::success(&format!(
                        "Saved comments of {} file(s) to {}",
                        message.comments().file_count(),
                        style(path.display()).cyan()
                    ));
                }
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}

//! Parse command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use carryover_changelog::{CommitMessage, MessageParser, Section};

use crate::cli::{output, read_input, Cli, OutputFormat};

/// Split a commit message into its sections
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Commit message file (`-` for standard input)
    pub input: PathBuf,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = %self.input.display(), "executing parse command");
        let config = cli.config()?;
        let content = read_input(&self.input)?;
        let message = MessageParser::with_config(&config.message).parse_message(&content);

        if cli.quiet {
            return Ok(());
        }

        match cli.output_format(&config) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&message)?),
            OutputFormat::Text => print_sections(&message),
        }

        Ok(())
    }
}

fn print_sections(message: &CommitMessage) {
    for section in Section::ALL {
        let lines = message.section(section);
        println!("{}", output::header(section.name()));
        if lines.is_empty() {
            println!("  (empty)");
        }
        for line in lines {
            println!("  {}", line);
        }
        println!();
    }

    let comments = message.comments();
    println!("{}", output::header("Comments"));
    println!("{}", output::key_value("files", &comments.file_count().to_string()));
    println!(
        "{}",
        output::key_value("functions", &comments.function_count().to_string())
    );
}

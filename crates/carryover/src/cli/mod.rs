//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use thiserror::Error;

use carryover_core::config::load_config_or_default;
use carryover_core::Config;

use commands::{CompletionsCommand, ExtractCommand, InitCommand, ParseCommand, ReapplyCommand};

/// carryover - keep change log comments across regenerated commit messages
#[derive(Debug, Parser)]
#[command(name = "carryover")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a commit message into its sections
    Parse(ParseCommand),

    /// Save the change log comments of a commit message as JSON
    Extract(ExtractCommand),

    /// Splice saved comments into a regenerated list of modified files
    Reapply(ReapplyCommand),

    /// Write a default configuration file
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Returned when `--strict` is set and lines had to be dropped
#[derive(Debug, Error)]
#[error("{count} line(s) could not be placed")]
pub struct StrictModeError {
    pub count: usize,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Parse(ref cmd) => cmd.execute(&self),
            Commands::Extract(ref cmd) => cmd.execute(&self),
            Commands::Reapply(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the configuration for the current directory
    pub fn config(&self) -> anyhow::Result<Config> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);
        Ok(config)
    }

    /// Output format from the command line, falling back to the configuration
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(match config.output.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Read a whole input, `-` meaning standard input
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

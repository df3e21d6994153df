//! Reapply command

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tracing::info;

use carryover_changelog::{
    CollectingSink, CommentStore, DiagnosticSink, MessageParser, Reapplicator, TracingSink,
};

use crate::cli::{output, read_input, Cli, OutputFormat, StrictModeError};

/// Splice saved comments into a regenerated list of modified files
#[derive(Debug, Args)]
pub struct ReapplyCommand {
    /// Regenerated modified files list (`-` for standard input)
    pub input: PathBuf,

    /// Take the comments from this commit message
    #[arg(short, long, required_unless_present = "store", conflicts_with = "store")]
    pub message: Option<PathBuf>,

    /// Take the comments from a store written by `carryover extract`
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// Print the whole commit message with the new modified files list
    #[arg(long)]
    pub compose: bool,

    /// Fail when lines had to be dropped
    #[arg(long)]
    pub strict: bool,
}

impl ReapplyCommand {
    /// Execute the reapply command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            input = %self.input.display(),
            compose = self.compose,
            strict = self.strict,
            "executing reapply command"
        );
        if self.compose && self.message.is_none() {
            anyhow::bail!("--compose needs the commit message given with --message");
        }
        let config = cli.config()?;

        let collector = Arc::new(CollectingSink::new());
        let sink: Arc<dyn DiagnosticSink> = if self.strict {
            collector.clone()
        } else {
            Arc::new(TracingSink)
        };

        let message = match &self.message {
            Some(path) => Some(
                MessageParser::with_config(&config.message)
                    .with_sink(sink.clone())
                    .parse_file(path)?,
            ),
            None => None,
        };
        let store = match (&message, &self.store) {
            (Some(message), _) => message.comments().clone(),
            (None, Some(path)) => CommentStore::from_json(&read_input(path)?)?,
            (None, None) => anyhow::bail!("either --message or --store is required"),
        };

        let new_lines: Vec<String> = read_input(&self.input)?
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        let merged = Reapplicator::new(&store)
            .with_config(&config.message)
            .with_sink(sink)
            .apply(&new_lines);

        if self.strict && !collector.is_empty() {
            for diagnostic in collector.diagnostics() {
                output::warning(&diagnostic.to_string());
            }
            return Err(StrictModeError {
                count: collector.len(),
            }
            .into());
        }

        match (cli.output_format(&config), &message) {
            (OutputFormat::Json, _) => println!("{}", serde_json::to_string_pretty(&merged)?),
            (OutputFormat::Text, Some(message)) if self.compose => {
                print!("{}", message.compose_with(&merged));
            }
            (OutputFormat::Text, _) => output::lines(&merged),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let message = MessageParser::new()
            .parse_message("Title\n\n* a.cpp: fixed.\n(foo): tweak.\n");
        let path = temp.path().join("store.json");
        std::fs::write(&path, message.comments().to_json().unwrap()).unwrap();

        let store = CommentStore::from_json(&read_input(&path).unwrap()).unwrap();
        let merged = Reapplicator::new(&store).apply(&["* a.cpp:", "(foo):", "(bar):"]);
        assert_eq!(merged, ["* a.cpp: fixed.", "(foo): tweak.", "(bar):"]);
        assert_eq!(
            message.compose_with(&merged),
            "Title\n\n* a.cpp: fixed.\n(foo): tweak.\n(bar):\n"
        );
    }
}

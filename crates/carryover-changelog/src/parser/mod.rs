//! Commit message parsing
//!
//! Parsing happens in two passes: the segmenter splits the message into its
//! sections, then the extractor reads the modified files section and gathers
//! the comments written next to each file and function.

mod extractor;
mod segmenter;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use carryover_core::{MessageConfig, MessageError, Result};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::patterns::LineRules;
use crate::types::{CommentStore, CommitMessage};

/// Parser for free-form commit messages ending in a change log
pub struct MessageParser {
    rules: LineRules,
    sink: Arc<dyn DiagnosticSink>,
}

impl MessageParser {
    /// Create a parser with default configuration, logging diagnostics
    pub fn new() -> Self {
        Self::with_config(&MessageConfig::default())
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: &MessageConfig) -> Self {
        Self {
            rules: LineRules::new(config),
            sink: Arc::new(TracingSink),
        }
    }

    /// Send diagnostics to the given sink instead of the log
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Parse a commit message held in memory
    pub fn parse_message(&self, message: &str) -> CommitMessage {
        self.parse_lines(message.split('\n'))
    }

    /// Parse a commit message given as a sequence of lines
    #[instrument(skip_all)]
    pub fn parse_lines<I, S>(&self, lines: I) -> CommitMessage
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let buffers = segmenter::segment(lines, &self.rules);

        let title = delete_trailing_blank_lines(buffers.title);
        let description = delete_trailing_blank_lines(buffers.description);
        let modified_files = delete_trailing_blank_lines(buffers.modified_files);
        debug!(
            title = title.len(),
            reviewed_by = buffers.reviewed_by.len(),
            description = description.len(),
            tests = buffers.tests.len(),
            modified_files = modified_files.len(),
            "segmented commit message"
        );

        let comments = self.extract_comments(&modified_files);

        CommitMessage {
            title,
            reviewed_by: buffers.reviewed_by,
            description,
            tests: buffers.tests,
            modified_files,
            comments,
        }
    }

    /// Read and parse a UTF-8 commit message file
    pub fn parse_file(&self, path: &Path) -> Result<CommitMessage> {
        info!(path = %path.display(), "parsing commit message file");
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                MessageError::FileNotFound(path.to_path_buf())
            } else {
                MessageError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(self.parse_message(&content))
    }

    /// Gather the comments of a modified files buffer
    pub fn extract_comments<S: AsRef<str>>(&self, modified_files: &[S]) -> CommentStore {
        extractor::extract(modified_files, self.sink.as_ref())
    }
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove blank lines from the end of a buffer
pub fn delete_trailing_blank_lines(mut lines: Vec<String>) -> Vec<String> {
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

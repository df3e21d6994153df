//! Splices stored comments back onto a regenerated change log
//!
//! The new change log usually lists the same files and functions with empty
//! comments. Every entry whose label is found in the [`CommentStore`] gets its
//! stored comment block back; the other entries are kept as they are.

use std::sync::Arc;

use tracing::{debug, instrument};

use carryover_core::MessageConfig;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::patterns::{LineRules, Marker};
use crate::types::{CommentBlock, CommentStore, CommitMessage};

/// Merges the comments of a previous parse into a new change log
pub struct Reapplicator<'a> {
    store: &'a CommentStore,
    rules: LineRules,
    sink: Arc<dyn DiagnosticSink>,
}

impl<'a> Reapplicator<'a> {
    /// Create a reapplicator over a comment store
    pub fn new(store: &'a CommentStore) -> Self {
        Self {
            store,
            rules: LineRules::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Recognize test lines using a custom message configuration
    pub fn with_config(mut self, config: &MessageConfig) -> Self {
        self.rules = LineRules::new(config);
        self
    }

    /// Send diagnostics to the given sink instead of the log
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Apply the stored comments to a new modified files buffer.
    ///
    /// Blank, test and indented lines pass through unchanged. Right after an
    /// entry whose comments came from the store, lines equal to the next
    /// stored continuation line are skipped, so applying a store to the
    /// buffer it was extracted from gives that buffer back unchanged.
    #[instrument(skip_all, fields(lines = lines.len()))]
    pub fn apply<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut result = Vec::with_capacity(lines.len());
        let mut current_file: Option<&str> = None;
        let mut pending: &[String] = &[];

        for (index, line) in lines.iter().map(AsRef::<str>::as_ref).enumerate() {
            if let Some((expected, rest)) = pending.split_first() {
                if expected.as_str() == line {
                    pending = rest;
                    continue;
                }
            }

            if line.is_empty() || self.rules.is_tests(line) || self.rules.is_indented(line) {
                result.push(line.to_string());
                continue;
            }

            match Marker::parse(line) {
                Some(Marker::File { label, .. }) => {
                    current_file = Some(label);
                    pending = splice(label, self.store.file(label), line, &mut result);
                }
                Some(Marker::Function { label, .. }) => {
                    let Some(file) = current_file else {
                        self.sink.report(Diagnostic::OrphanFunction {
                            index,
                            line: line.to_string(),
                        });
                        continue;
                    };
                    pending = splice(label, self.store.function(file, label), line, &mut result);
                }
                None => self.sink.report(Diagnostic::UnrecognizedLine {
                    index,
                    line: line.to_string(),
                }),
            }
        }

        debug!(input = lines.len(), output = result.len(), "reapplied comments");
        result
    }
}

/// Emit an entry with its stored comments, or unchanged when none are stored.
/// Returns the stored continuation lines still expected in the new buffer.
fn splice<'s>(
    label: &str,
    block: Option<&'s CommentBlock>,
    line: &str,
    out: &mut Vec<String>,
) -> &'s [String] {
    match block {
        Some(block) => {
            out.push(format!("{}{}", label, block.inline()));
            out.extend(block.continuation().iter().cloned());
            block.continuation()
        }
        None => {
            out.push(line.to_string());
            &[]
        }
    }
}

impl CommitMessage {
    /// Apply this message's comments to a regenerated modified files buffer
    pub fn apply_comments<S: AsRef<str>>(
        &self,
        modified_files: &[S],
        sink: Arc<dyn DiagnosticSink>,
    ) -> Vec<String> {
        Reapplicator::new(&self.comments)
            .with_sink(sink)
            .apply(modified_files)
    }
}

//! Diagnostics for lines the parser had to drop
//!
//! Malformed change log lines never abort a parse. They are reported to a
//! [`DiagnosticSink`] and left out of the result.

use std::fmt;
use std::sync::Mutex;

use tracing::warn;

/// A non-fatal problem found while reading a change log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A function entry with no enclosing file entry
    OrphanFunction { index: usize, line: String },
    /// A comment line with neither file nor function context
    OrphanComment { index: usize, line: String },
    /// A line matching no known grammar during reapplication
    UnrecognizedLine { index: usize, line: String },
}

impl Diagnostic {
    /// Position of the offending line in its buffer
    pub fn index(&self) -> usize {
        match self {
            Self::OrphanFunction { index, .. }
            | Self::OrphanComment { index, .. }
            | Self::UnrecognizedLine { index, .. } => *index,
        }
    }

    /// The offending line
    pub fn line(&self) -> &str {
        match self {
            Self::OrphanFunction { line, .. }
            | Self::OrphanComment { line, .. }
            | Self::UnrecognizedLine { line, .. } => line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanFunction { line, .. } => {
                write!(f, "dropping function entry with no file entry: {}", line)
            }
            Self::OrphanComment { line, .. } => {
                write!(f, "dropping comment with no file or function entry: {}", line)
            }
            Self::UnrecognizedLine { line, .. } => write!(f, "dropping unexpected line: {}", line),
        }
    }
}

/// Receiver of parser diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// Record a diagnostic
    fn report(&self, diagnostic: Diagnostic);
}

/// Emits every diagnostic as a `tracing` warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        warn!(index = diagnostic.index(), line = diagnostic.line(), "{}", diagnostic);
    }
}

/// Discards diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps diagnostics in memory for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics().is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics().len()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match self.diagnostics.lock() {
            Ok(mut diagnostics) => diagnostics.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

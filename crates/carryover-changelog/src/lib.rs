//! Carryover Changelog - commit message parsing and comment carry-over
//!
//! A commit message is split into five sections (title, reviewed-by,
//! description, tests, modified files). The modified files section is then
//! read as a change log: every file and function entry keeps the comments
//! written next to it, so they can be spliced back onto a freshly
//! regenerated list of modified files.

mod compose;
pub mod diagnostics;
pub mod parser;
pub mod patterns;
pub mod reapply;
pub mod types;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use parser::{delete_trailing_blank_lines, MessageParser};
pub use reapply::Reapplicator;
pub use types::{CommentBlock, CommentStore, CommitMessage, Section};

//! CLI commands

mod completions;
mod extract;
mod init;
mod parse;
mod reapply;

pub use completions::CompletionsCommand;
pub use extract::ExtractCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;
pub use reapply::ReapplyCommand;

//! Reassembles a commit message from its sections

use crate::types::{CommitMessage, Section};

impl CommitMessage {
    /// Render the message back to text.
    pub fn compose(&self) -> String {
        self.compose_with(&self.modified_files)
    }

    /// Render the message with a replacement modified files section, typically
    /// the output of [`crate::Reapplicator::apply`].
    ///
    /// Non-empty sections are separated by exactly one blank line.
    pub fn compose_with<S: AsRef<str>>(&self, modified_files: &[S]) -> String {
        let modified_files: Vec<&str> = modified_files.iter().map(AsRef::<str>::as_ref).collect();

        let blocks: Vec<String> = Section::ALL
            .iter()
            .map(|section| match section {
                Section::ModifiedFiles => modified_files.clone(),
                _ => self.section(*section).iter().map(String::as_str).collect(),
            })
            .filter_map(|lines| {
                let lines = trim_blank_edges(&lines);
                (!lines.is_empty()).then(|| lines.join("\n"))
            })
            .collect();

        if blocks.is_empty() {
            return String::new();
        }
        format!("{}\n", blocks.join("\n\n"))
    }
}

fn trim_blank_edges<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let start = lines.iter().position(|line| !line.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|line| !line.is_empty()).map_or(start, |i| i + 1);
    &lines[start..end]
}

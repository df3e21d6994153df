//! Commit message types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use carryover_core::{MessageError, Result};

/// One of the five ordered regions of a commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Summary line(s)
    Title,
    /// "Reviewed by ..." lines
    ReviewedBy,
    /// Free-form description
    Description,
    /// "Tests: ..." lines and their indented bodies
    Tests,
    /// The change log: modified files and functions
    ModifiedFiles,
}

impl Section {
    /// All sections, in message order
    pub const ALL: [Section; 5] = [
        Self::Title,
        Self::ReviewedBy,
        Self::Description,
        Self::Tests,
        Self::ModifiedFiles,
    ];

    /// Human readable section name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::ReviewedBy => "Reviewed by",
            Self::Description => "Description",
            Self::Tests => "Tests",
            Self::ModifiedFiles => "Modified files",
        }
    }
}

/// Comment lines attached to a file or function label.
///
/// The first line is the inline comment written on the label line itself and
/// may be empty; the block is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CommentBlock {
    lines: Vec<String>,
}

impl CommentBlock {
    /// Create a block holding only the inline comment
    pub fn new(inline: impl Into<String>) -> Self {
        Self {
            lines: vec![inline.into()],
        }
    }

    /// Append a freestanding comment line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The comment written on the label line
    pub fn inline(&self) -> &str {
        &self.lines[0]
    }

    /// The lines that followed the label line
    pub fn continuation(&self) -> &[String] {
        &self.lines[1..]
    }

    /// All lines, inline comment first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines, never zero
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl TryFrom<Vec<String>> for CommentBlock {
    type Error = MessageError;

    fn try_from(lines: Vec<String>) -> std::result::Result<Self, Self::Error> {
        if lines.is_empty() {
            return Err(MessageError::EmptyCommentBlock);
        }
        Ok(Self { lines })
    }
}

impl From<CommentBlock> for Vec<String> {
    fn from(block: CommentBlock) -> Self {
        block.lines
    }
}

/// Comments of one change log, keyed by the verbatim label lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentStore {
    /// File label -> comment block
    files: BTreeMap<String, CommentBlock>,
    /// File label -> function label -> comment block
    functions: BTreeMap<String, BTreeMap<String, CommentBlock>>,
}

impl CommentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Comments of a file entry
    pub fn file(&self, label: &str) -> Option<&CommentBlock> {
        self.files.get(label)
    }

    /// Function comments recorded under a file entry
    pub fn functions(&self, file: &str) -> Option<&BTreeMap<String, CommentBlock>> {
        self.functions.get(file)
    }

    /// Comments of a function entry within a file
    pub fn function(&self, file: &str, function: &str) -> Option<&CommentBlock> {
        self.functions.get(file)?.get(function)
    }

    /// Iterate over file labels and their comments
    pub fn files(&self) -> impl Iterator<Item = (&str, &CommentBlock)> {
        self.files.iter().map(|(label, block)| (label.as_str(), block))
    }

    /// Number of file entries
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of function entries across all files
    pub fn function_count(&self) -> usize {
        self.functions.values().map(BTreeMap::len).sum()
    }

    /// Check if the store holds no entry
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Start a file entry. A repeated label replaces the earlier entry along
    /// with its functions.
    pub(crate) fn open_file(&mut self, label: &str, block: CommentBlock) {
        self.files.insert(label.to_string(), block);
        self.functions.insert(label.to_string(), BTreeMap::new());
    }

    /// Start a function entry under an already opened file
    pub(crate) fn open_function(&mut self, file: &str, label: &str, block: CommentBlock) {
        self.functions
            .entry(file.to_string())
            .or_default()
            .insert(label.to_string(), block);
    }

    pub(crate) fn file_mut(&mut self, label: &str) -> Option<&mut CommentBlock> {
        self.files.get_mut(label)
    }

    pub(crate) fn function_mut(&mut self, file: &str, label: &str) -> Option<&mut CommentBlock> {
        self.functions.get_mut(file)?.get_mut(label)
    }

    /// Decode a store previously written with [`CommentStore::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let store: Self = serde_json::from_str(json)?;

        if let Some(orphan) = store
            .functions
            .keys()
            .find(|file| !store.files.contains_key(file.as_str()))
        {
            return Err(MessageError::MalformedStore(format!(
                "functions recorded for unknown file '{}'",
                orphan
            ))
            .into());
        }

        Ok(store)
    }

    /// Encode the store as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A commit message split into sections, with the comments of its change log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub(crate) title: Vec<String>,
    pub(crate) reviewed_by: Vec<String>,
    pub(crate) description: Vec<String>,
    pub(crate) tests: Vec<String>,
    pub(crate) modified_files: Vec<String>,
    pub(crate) comments: CommentStore,
}

impl CommitMessage {
    pub fn title(&self) -> &[String] {
        &self.title
    }

    pub fn reviewed_by(&self) -> &[String] {
        &self.reviewed_by
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    pub fn modified_files(&self) -> &[String] {
        &self.modified_files
    }

    /// Comments extracted from the modified files section
    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    /// Lines of a given section
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Title => &self.title,
            Section::ReviewedBy => &self.reviewed_by,
            Section::Description => &self.description,
            Section::Tests => &self.tests,
            Section::ModifiedFiles => &self.modified_files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        assert!(Section::Title < Section::ReviewedBy);
        assert!(Section::ReviewedBy < Section::Description);
        assert!(Section::Description < Section::Tests);
        assert!(Section::Tests < Section::ModifiedFiles);
        assert_eq!(Section::ALL.len(), 5);
    }

    #[test]
    fn test_comment_block() {
        let mut block = CommentBlock::new("");
        assert_eq!(block.inline(), "");
        assert!(block.continuation().is_empty());

        block.push("        some comment");
        assert_eq!(block.len(), 2);
        assert_eq!(block.continuation(), ["        some comment"]);
    }

    #[test]
    fn test_empty_comment_block_rejected() {
        assert!(serde_json::from_str::<CommentBlock>("[]").is_err());

        let block: CommentBlock = serde_json::from_str(r#"["", "more"]"#).unwrap();
        assert_eq!(block.lines(), ["", "more"]);
    }

    #[test]
    fn test_open_file_resets_functions() {
        let mut store = CommentStore::new();
        store.open_file("* a.cpp:", CommentBlock::new(" first."));
        store.open_function("* a.cpp:", "(foo):", CommentBlock::new(" tweak."));
        assert_eq!(store.function_count(), 1);

        store.open_file("* a.cpp:", CommentBlock::new(" second."));
        assert_eq!(store.file("* a.cpp:").unwrap().inline(), " second.");
        assert_eq!(store.function_count(), 0);
        assert!(store.functions("* a.cpp:").unwrap().is_empty());
    }

    #[test]
    fn test_store_json() {
        let mut store = CommentStore::new();
        store.open_file("* a.cpp:", CommentBlock::new(" fixed."));
        store.open_function("* a.cpp:", "(foo):", CommentBlock::new(" tweak."));

        let json = store.to_json().unwrap();
        let decoded = CommentStore::from_json(&json).unwrap();
        assert_eq!(decoded, store);
        assert_eq!(decoded.function("* a.cpp:", "(foo):").unwrap().inline(), " tweak.");
    }

    #[test]
    fn test_store_json_rejects_orphan_functions() {
        let json = r#"{"files": {}, "functions": {"* a.cpp:": {"(foo):": [""]}}}"#;
        assert!(CommentStore::from_json(json).is_err());
    }
}

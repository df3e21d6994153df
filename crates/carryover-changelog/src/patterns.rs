//! Line grammars shared by the segmenter, the extractor and the reapplicator
//!
//! Change log entries follow the layout produced by `prepare-ChangeLog`:
//!
//! ```text
//! * Source/WebCore/dom/Node.cpp:
//! (WebCore::Node::remove): Comment about the change.
//! * Source/WebCore/dom/Old.cpp: Removed.
//! ```

use regex::Regex;
use std::sync::LazyLock;

use carryover_core::MessageConfig;

/// Generic file entry: the label runs up to and including the last colon
static MODIFIED_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>\*.*:)(?P<comment>.*)$").expect("Invalid regex")
});

static MODIFIED_FILE_ADDED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*.*: Added\.$").expect("Invalid regex"));

static MODIFIED_FILE_REMOVED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*.*: Removed\.$").expect("Invalid regex"));

/// Generic function entry: the label runs up to and including the last `):`,
/// so qualified names such as `(ns::(anonymous namespace)::f):` stay whole
static MODIFIED_FUNCTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>\(.*\):)(?P<comment>.*)$").expect("Invalid regex")
});

static MODIFIED_FUNCTION_DELETED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(.*\): Deleted\.$").expect("Invalid regex"));

static TEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Tests?: .*$").expect("Invalid regex"));

static REVIEWED_BY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Reviewed by .*$").expect("Invalid regex"));

/// A file or function entry of the modified files section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// A file entry; `label` is the key of its comment block
    File { label: &'a str, comment: &'a str },
    /// A function entry, scoped to the enclosing file
    Function { label: &'a str, comment: &'a str },
}

impl<'a> Marker<'a> {
    /// Recognize a file or function entry.
    ///
    /// `Removed.`, `Added.` and `Deleted.` entries use the whole line as their
    /// label and carry an empty inline comment.
    pub fn parse(line: &'a str) -> Option<Self> {
        if MODIFIED_FILE_REMOVED_REGEX.is_match(line) || MODIFIED_FILE_ADDED_REGEX.is_match(line)
        {
            return Some(Self::File {
                label: line,
                comment: "",
            });
        }

        if let Some(caps) = MODIFIED_FILE_REGEX.captures(line) {
            return Some(Self::File {
                label: caps.name("label")?.as_str(),
                comment: caps.name("comment")?.as_str(),
            });
        }

        if MODIFIED_FUNCTION_DELETED_REGEX.is_match(line) {
            return Some(Self::Function {
                label: line,
                comment: "",
            });
        }

        let caps = MODIFIED_FUNCTION_REGEX.captures(line)?;
        Some(Self::Function {
            label: caps.name("label")?.as_str(),
            comment: caps.name("comment")?.as_str(),
        })
    }

    /// The label used as a comment store key
    pub fn label(&self) -> &'a str {
        match self {
            Self::File { label, .. } | Self::Function { label, .. } => label,
        }
    }

    /// The inline comment following the label
    pub fn comment(&self) -> &'a str {
        match self {
            Self::File { comment, .. } | Self::Function { comment, .. } => comment,
        }
    }
}

/// Line predicates, parameterized by the message configuration
#[derive(Debug, Clone)]
pub struct LineRules {
    comment_prefix: String,
    no_tests_sentinel: String,
}

impl LineRules {
    /// Build the rules from a message configuration
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            comment_prefix: config.comment_prefix.clone(),
            no_tests_sentinel: config.no_tests_sentinel.clone(),
        }
    }

    /// Lines commented out by the editor template
    pub fn is_discarded(&self, line: &str) -> bool {
        line.starts_with(&self.comment_prefix)
    }

    pub fn is_reviewed_by(&self, line: &str) -> bool {
        REVIEWED_BY_REGEX.is_match(line)
    }

    pub fn is_modified_file(&self, line: &str) -> bool {
        MODIFIED_FILE_REGEX.is_match(line)
    }

    /// `Test: ...`, `Tests: ...` or the no-tests sentinel
    pub fn is_tests(&self, line: &str) -> bool {
        TEST_REGEX.is_match(line) || line == self.no_tests_sentinel
    }

    /// Body of a tests entry: one or more leading spaces
    pub fn is_indented(&self, line: &str) -> bool {
        line.starts_with(' ')
    }
}

impl Default for LineRules {
    fn default() -> Self {
        Self::new(&MessageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_file_entry() {
        let marker = Marker::parse("* Source/File.cpp: Did a thing.").unwrap();
        assert_eq!(
            marker,
            Marker::File {
                label: "* Source/File.cpp:",
                comment: " Did a thing."
            }
        );
    }

    #[test]
    fn test_file_entry_without_comment() {
        let marker = Marker::parse("* Source/File.cpp:").unwrap();
        assert_eq!(marker.label(), "* Source/File.cpp:");
        assert_eq!(marker.comment(), "");
    }

    #[test]
    fn test_file_label_runs_to_last_colon() {
        let marker = Marker::parse("* a.cpp: Note: more detail.").unwrap();
        assert_eq!(marker.label(), "* a.cpp: Note:");
        assert_eq!(marker.comment(), " more detail.");
    }

    #[test]
    fn test_added_and_removed_use_whole_line() {
        for line in ["* Source/New.cpp: Added.", "* Source/Old.cpp: Removed."] {
            assert_eq!(
                Marker::parse(line),
                Some(Marker::File {
                    label: line,
                    comment: ""
                })
            );
        }
    }

    #[test]
    fn test_removed_requires_literal_period() {
        let marker = Marker::parse("* Source/Old.cpp: Removedx").unwrap();
        assert_eq!(marker.label(), "* Source/Old.cpp:");
    }

    #[test]
    fn test_function_entries() {
        let marker = Marker::parse("(WebCore::Node::remove): Tweak.").unwrap();
        assert_eq!(
            marker,
            Marker::Function {
                label: "(WebCore::Node::remove):",
                comment: " Tweak."
            }
        );

        let deleted = Marker::parse("(WebCore::Node::old): Deleted.").unwrap();
        assert_eq!(deleted.label(), "(WebCore::Node::old): Deleted.");
        assert_eq!(deleted.comment(), "");
    }

    #[test]
    fn test_function_label_with_nested_parens() {
        let marker = Marker::parse("(foo(int)): Take the count.").unwrap();
        assert_eq!(marker.label(), "(foo(int)):");
        assert_eq!(marker.comment(), " Take the count.");
    }

    #[test]
    fn test_anonymous_namespace_functions_keep_distinct_labels() {
        let alpha = Marker::parse("(WebCore::(anonymous namespace)::alpha): Fix alpha.").unwrap();
        let beta = Marker::parse("(WebCore::(anonymous namespace)::beta):").unwrap();

        assert_eq!(alpha.label(), "(WebCore::(anonymous namespace)::alpha):");
        assert_eq!(alpha.comment(), " Fix alpha.");
        assert_eq!(beta.label(), "(WebCore::(anonymous namespace)::beta):");
        assert_eq!(beta.comment(), "");
    }

    #[test]
    fn test_non_entries() {
        assert!(Marker::parse("Some description.").is_none());
        assert!(Marker::parse("        * indented.cpp: no").is_none());
        assert!(Marker::parse("").is_none());
        assert!(Marker::parse("* no colon here").is_none());
    }

    #[test]
    fn test_line_rules() {
        let rules = LineRules::default();
        assert!(rules.is_discarded("# Please enter the commit message"));
        assert!(rules.is_reviewed_by("Reviewed by Jane."));
        assert!(!rules.is_reviewed_by("Reviewed by"));
        assert!(rules.is_tests("Test: fast/dom/node.html"));
        assert!(rules.is_tests("Tests: fast/dom/node.html"));
        assert!(rules.is_tests("No new tests (OOPS!)."));
        assert!(!rules.is_tests("Tests:"));
        assert!(rules.is_indented("    fast/dom/other.html"));
        assert!(!rules.is_indented("fast/dom/other.html"));
        assert!(rules.is_modified_file("* Source/File.cpp:"));
        assert!(!rules.is_modified_file("(foo): bar"));
    }

    #[test]
    fn test_custom_sentinel() {
        let rules = LineRules::new(&MessageConfig {
            comment_prefix: ";".to_string(),
            no_tests_sentinel: "Covered by existing tests.".to_string(),
        });
        assert!(rules.is_tests("Covered by existing tests."));
        assert!(!rules.is_tests("No new tests (OOPS!)."));
        assert!(rules.is_discarded("; comment"));
        assert!(!rules.is_discarded("# not a comment here"));
    }
}

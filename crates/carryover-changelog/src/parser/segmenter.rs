//! Splits a commit message into its five sections
//!
//! Sections only ever move forward (title, reviewed-by, description, tests,
//! modified files). A line that does not continue the current section opens
//! the next one that accepts it, which is how the overlapping grammars (an
//! indented test body and an indented file comment look alike) are resolved.

use crate::patterns::LineRules;
use crate::types::Section;

/// Outcome of feeding one line to the current section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Append the line to the buffer of the given section
    Append(Section),
    /// The line separates sections and is not kept
    Separator(Section),
}

impl Step {
    fn section(self) -> Section {
        match self {
            Self::Append(section) | Self::Separator(section) => section,
        }
    }
}

/// The five section buffers, in the state the segmenter leaves them
#[derive(Debug, Default)]
pub(crate) struct SectionBuffers {
    pub title: Vec<String>,
    pub reviewed_by: Vec<String>,
    pub description: Vec<String>,
    pub tests: Vec<String>,
    pub modified_files: Vec<String>,
}

impl SectionBuffers {
    fn push(&mut self, section: Section, line: &str) {
        let buffer = match section {
            Section::Title => &mut self.title,
            Section::ReviewedBy => &mut self.reviewed_by,
            Section::Description => &mut self.description,
            Section::Tests => &mut self.tests,
            Section::ModifiedFiles => &mut self.modified_files,
        };
        buffer.push(line.to_string());
    }
}

/// Run the section state machine over the lines of a message.
///
/// Lines are right-trimmed and commented-out lines are skipped before they
/// reach the state machine. Trailing blank lines are left in place.
pub(crate) fn segment<I, S>(lines: I, rules: &LineRules) -> SectionBuffers
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (_, buffers) = lines.into_iter().fold(
        (Section::Title, SectionBuffers::default()),
        |(state, mut buffers), line| {
            let line = line.as_ref().trim_end();
            if rules.is_discarded(line) {
                return (state, buffers);
            }

            let step = transition(state, line, rules);
            if let Step::Append(section) = step {
                buffers.push(section, line);
            }
            (step.section(), buffers)
        },
    );
    buffers
}

fn transition(state: Section, line: &str, rules: &LineRules) -> Step {
    match state {
        Section::Title => from_title(line, rules),
        Section::ReviewedBy => from_reviewed_by(line, rules),
        Section::Description => from_description(line, rules),
        Section::Tests => from_tests(line, rules),
        Section::ModifiedFiles => Step::Append(Section::ModifiedFiles),
    }
}

fn from_title(line: &str, rules: &LineRules) -> Step {
    if rules.is_reviewed_by(line) {
        Step::Append(Section::ReviewedBy)
    } else if rules.is_modified_file(line) {
        Step::Append(Section::ModifiedFiles)
    } else if rules.is_tests(line) {
        Step::Append(Section::Tests)
    } else {
        Step::Append(Section::Title)
    }
}

fn from_reviewed_by(line: &str, rules: &LineRules) -> Step {
    if rules.is_reviewed_by(line) {
        Step::Append(Section::ReviewedBy)
    } else if line.is_empty() {
        Step::Separator(Section::Description)
    } else {
        Step::Append(Section::Description)
    }
}

fn from_description(line: &str, rules: &LineRules) -> Step {
    if rules.is_modified_file(line) {
        Step::Append(Section::ModifiedFiles)
    } else if rules.is_tests(line) {
        Step::Append(Section::Tests)
    } else {
        Step::Append(Section::Description)
    }
}

fn from_tests(line: &str, rules: &LineRules) -> Step {
    if rules.is_tests(line) || rules.is_indented(line) {
        Step::Append(Section::Tests)
    } else if line.is_empty() {
        Step::Separator(Section::ModifiedFiles)
    } else {
        Step::Append(Section::ModifiedFiles)
    }
}

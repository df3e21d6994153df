//! Builds the comment store from a modified files section

use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::patterns::Marker;
use crate::types::{CommentBlock, CommentStore};

/// Labels of the entries currently collecting comment lines
#[derive(Debug, Default, Clone, Copy)]
struct Cursor<'a> {
    file: Option<&'a str>,
    function: Option<&'a str>,
}

/// Collect the comments of every file and function entry.
///
/// An entry's block starts with its inline comment and takes every following
/// line up to the next entry.
pub(crate) fn extract<S: AsRef<str>>(lines: &[S], sink: &dyn DiagnosticSink) -> CommentStore {
    let (store, _) = lines.iter().map(AsRef::<str>::as_ref).enumerate().fold(
        (CommentStore::new(), Cursor::default()),
        |(mut store, cursor), (index, line)| {
            let cursor = match Marker::parse(line) {
                Some(Marker::File { label, comment }) => {
                    store.open_file(label, CommentBlock::new(comment));
                    Cursor {
                        file: Some(label),
                        function: None,
                    }
                }
                Some(Marker::Function { label, comment }) => match cursor.file {
                    Some(file) => {
                        store.open_function(file, label, CommentBlock::new(comment));
                        Cursor {
                            file: Some(file),
                            function: Some(label),
                        }
                    }
                    None => {
                        sink.report(Diagnostic::OrphanFunction {
                            index,
                            line: line.to_string(),
                        });
                        cursor
                    }
                },
                None => {
                    append_comment(&mut store, &cursor, index, line, sink);
                    cursor
                }
            };
            (store, cursor)
        },
    );

    debug!(
        files = store.file_count(),
        functions = store.function_count(),
        "extracted change log comments"
    );
    store
}

fn append_comment(
    store: &mut CommentStore,
    cursor: &Cursor<'_>,
    index: usize,
    line: &str,
    sink: &dyn DiagnosticSink,
) {
    let block = match (cursor.file, cursor.function) {
        (Some(file), Some(function)) => store.function_mut(file, function),
        (Some(file), None) => store.file_mut(file),
        _ => None,
    };

    match block {
        Some(block) => block.push(line),
        None => sink.report(Diagnostic::OrphanComment {
            index,
            line: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, NullSink};

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_removed_file_with_comment() {
        let store = extract(
            &["* Source/Old.cpp: Removed.", "        some comment"],
            &NullSink,
        );
        let block = store.file("* Source/Old.cpp: Removed.").unwrap();
        assert_eq!(block.lines(), ["", "        some comment"]);
    }

    #[test]
    fn test_files_and_functions() {
        let input = lines(
            "* Source/a.cpp: Fixed the crash.\n\
             (A::run): Check for null.\n\
             (A::stop):\n\
             Also reset the timer.\n\
             (A::old): Deleted.\n\
             * Source/b.cpp:\n\
             Renamed things.",
        );
        let store = extract(&input, &NullSink);

        assert_eq!(store.file_count(), 2);
        assert_eq!(store.function_count(), 3);
        assert_eq!(
            store.file("* Source/a.cpp:").unwrap().lines(),
            [" Fixed the crash."]
        );
        assert_eq!(
            store.function("* Source/a.cpp:", "(A::stop):").unwrap().lines(),
            ["", "Also reset the timer."]
        );
        assert_eq!(
            store
                .function("* Source/a.cpp:", "(A::old): Deleted.")
                .unwrap()
                .lines(),
            [""]
        );
        assert_eq!(
            store.file("* Source/b.cpp:").unwrap().lines(),
            ["", "Renamed things."]
        );
        assert!(store.functions("* Source/b.cpp:").unwrap().is_empty());
    }

    #[test]
    fn test_function_before_any_file_is_dropped() {
        let sink = CollectingSink::new();
        let store = extract(&["(bar): note."], &sink);

        assert!(store.is_empty());
        assert_eq!(
            sink.diagnostics(),
            [Diagnostic::OrphanFunction {
                index: 0,
                line: "(bar): note.".to_string()
            }]
        );
    }

    #[test]
    fn test_deleted_function_before_any_file_is_dropped() {
        let sink = CollectingSink::new();
        let store = extract(&["(bar): Deleted.", "* a.cpp:"], &sink);

        assert_eq!(store.function_count(), 0);
        assert_eq!(store.file_count(), 1);
        assert!(matches!(
            sink.diagnostics()[0],
            Diagnostic::OrphanFunction { index: 0, .. }
        ));
    }

    #[test]
    fn test_comment_before_any_file_is_dropped() {
        let sink = CollectingSink::new();
        let store = extract(&["stray", "* a.cpp: ok."], &sink);

        assert_eq!(store.file("* a.cpp:").unwrap().lines(), [" ok."]);
        assert_eq!(sink.len(), 1);
        assert!(matches!(
            sink.diagnostics()[0],
            Diagnostic::OrphanComment { index: 0, .. }
        ));
    }

    #[test]
    fn test_new_file_closes_function() {
        let store = extract(&["* a.cpp:", "(foo): x", "* b.cpp:", "after b"], &NullSink);

        assert_eq!(store.function("* a.cpp:", "(foo):").unwrap().lines(), [" x"]);
        assert_eq!(store.file("* b.cpp:").unwrap().lines(), ["", "after b"]);
    }

    #[test]
    fn test_repeated_file_label_last_write_wins() {
        let store = extract(
            &["* a.cpp: first.", "(foo): one.", "* a.cpp: second.", "tail"],
            &NullSink,
        );

        assert_eq!(store.file_count(), 1);
        assert_eq!(store.file("* a.cpp:").unwrap().lines(), [" second.", "tail"]);
        assert!(store.function("* a.cpp:", "(foo):").is_none());
    }
}

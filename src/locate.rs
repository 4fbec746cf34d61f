//! Definition locator: scan a document for scene class definitions and
//! select the nearest one at or before the cursor.

use regex::Regex;

/// An immutable view of the active document for one locate operation.
///
/// Owned by the caller; the locator only reads it.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    /// The document text, split into lines.
    pub lines: Vec<String>,
    /// Path of the file backing the document, as the host reports it.
    pub path: String,
}

impl DocumentSnapshot {
    /// Builds a snapshot from full document text and its file path.
    #[must_use]
    pub fn new(text: &str, path: impl Into<String>) -> Self {
        Self { lines: text.lines().map(str::to_string).collect(), path: path.into() }
    }
}

/// The 0-indexed line the nearest-match search anchors against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    /// 0-indexed line number of the text cursor.
    pub line: usize,
}

/// One line that matched the definition pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionMatch {
    /// The full text of the matching line.
    pub line_text: String,
    /// 0-indexed line number of the matching line.
    pub line_number: usize,
    /// The identifier captured from the pattern's name group.
    pub name: String,
}

/// Pattern for a definition line: `class`, an identifier, an optional
/// parenthesized argument list, and a terminating colon. Single lines only;
/// multi-line signatures are not recognized.
fn definition_pattern() -> Regex {
    Regex::new(r"^class\s+(\w+)\s*(?:\([^)]*\))?\s*:").expect("definition pattern is valid")
}

/// Collects every definition line in the document, in original order.
///
/// Each line is matched independently; only the first capture per line is
/// used.
#[must_use]
pub fn scan_definitions(document: &DocumentSnapshot) -> Vec<DefinitionMatch> {
    let pattern = definition_pattern();
    document
        .lines
        .iter()
        .enumerate()
        .filter_map(|(number, line)| {
            pattern.captures(line).map(|caps| DefinitionMatch {
                line_text: line.clone(),
                line_number: number,
                name: caps[1].to_string(),
            })
        })
        .collect()
}

/// Selects the nearest definition at or before the cursor from a collected
/// list, scanning backward. Returns `None` when every collected definition
/// lies after the cursor (or the list is empty).
#[must_use]
pub fn nearest_at_or_before(
    definitions: &[DefinitionMatch],
    cursor: CursorPosition,
) -> Option<&DefinitionMatch> {
    definitions.iter().rev().find(|def| def.line_number <= cursor.line)
}

/// Finds the nearest enclosing definition for the cursor.
///
/// Nearest means textual proximity: the last definition line whose number is
/// ≤ the cursor line. Block and indentation scope are not considered.
#[must_use]
pub fn locate(document: &DocumentSnapshot, cursor: CursorPosition) -> Option<DefinitionMatch> {
    let definitions = scan_definitions(document);
    nearest_at_or_before(&definitions, cursor).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> DocumentSnapshot {
        DocumentSnapshot::new(&lines.join("\n"), "foo.py")
    }

    #[test]
    fn scans_class_lines_in_order() {
        let document = doc(&[
            "class Intro(Scene):",
            "    def construct(self):",
            "        pass",
            "class Outro(Scene):",
        ]);
        let defs = scan_definitions(&document);
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "Intro");
        assert_eq!(defs[0].line_number, 0);
        assert_eq!(defs[1].name, "Outro");
        assert_eq!(defs[1].line_number, 3);
    }

    #[test]
    fn matches_class_without_argument_list() {
        let document = doc(&["class Bare:"]);
        let defs = scan_definitions(&document);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "Bare");
    }

    #[test]
    fn ignores_indented_and_non_class_lines() {
        let document = doc(&["    class Nested(Scene):", "def construct(self):", "classy = 1"]);
        assert!(scan_definitions(&document).is_empty());
    }

    #[test]
    fn locate_returns_nearest_above_cursor() {
        let document = doc(&["class Intro(Scene):", "    def construct(self):", "        pass"]);
        let found = locate(&document, CursorPosition { line: 2 }).unwrap();
        assert_eq!(found.line_number, 0);
        assert_eq!(found.name, "Intro");
    }

    #[test]
    fn definition_on_cursor_line_counts() {
        let document = doc(&["class Intro(Scene):", "    def construct(self):", "        pass"]);
        let found = locate(&document, CursorPosition { line: 0 }).unwrap();
        assert_eq!(found.line_number, 0);
    }

    #[test]
    fn later_definition_wins_when_cursor_is_past_it() {
        let document = doc(&["class First(Scene):", "    pass", "class Second(Scene):", "    pass"]);
        let found = locate(&document, CursorPosition { line: 3 }).unwrap();
        assert_eq!(found.name, "Second");
    }

    #[test]
    fn definition_after_cursor_is_never_returned() {
        let document = doc(&["x = 1", "class Late(Scene):", "    pass"]);
        assert!(locate(&document, CursorPosition { line: 0 }).is_none());
    }

    #[test]
    fn no_definitions_yields_none() {
        let document = doc(&["def construct(self):"]);
        assert!(locate(&document, CursorPosition { line: 0 }).is_none());
        assert!(locate(&document, CursorPosition { line: 99 }).is_none());
    }

    #[test]
    fn locate_never_exceeds_cursor_line() {
        let document = doc(&[
            "class A(Scene):",
            "    pass",
            "class B(Scene):",
            "    pass",
            "class C(Scene):",
        ]);
        for line in 0..document.lines.len() {
            if let Some(found) = locate(&document, CursorPosition { line }) {
                assert!(found.line_number <= line);
            }
        }
    }

    #[test]
    fn locate_is_idempotent() {
        let document = doc(&["class Intro(Scene):", "    pass"]);
        let cursor = CursorPosition { line: 1 };
        assert_eq!(locate(&document, cursor), locate(&document, cursor));
    }
}

//! Checkpoint formatter: collapse a selection into a short replayable
//! marker command instead of pasting the full text.

/// Builds the command to send for a selection, or `None` for an empty
/// selection.
///
/// A single-line selection that is not a comment passes through verbatim
/// (single-statement execution). Anything else becomes
/// `checkpoint_paste(<extra_args>) <comment> (<N> lines)`, where the comment
/// token is the trimmed first line when it starts with `#`, else a bare `#`.
/// The real selection is expected to already be on the clipboard; the
/// terminal-side tool reads it from there.
#[must_use]
pub fn format_checkpoint(selection: &str, extra_args: &str) -> Option<String> {
    if selection.is_empty() {
        return None;
    }

    let lines: Vec<&str> = selection.split('\n').collect();
    let first = lines[0].trim();

    if lines.len() == 1 && !first.starts_with('#') {
        return Some(selection.to_string());
    }

    let comment = if first.starts_with('#') { first } else { "#" };
    Some(format!("checkpoint_paste({extra_args}) {comment} ({} lines)", lines.len()))
}

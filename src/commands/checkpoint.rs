//! `scenecast checkpoint` command: checkpoint-paste the selection.

use tracing::warn;

use crate::checkpoint::format_checkpoint;
use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::ports::MessageKind;

/// Execute the `checkpoint` command.
///
/// Copies the selection to the clipboard, then sends the placeholder
/// command (or the selection itself for a single statement) to the sink.
/// The clipboard write completes before dispatch because the terminal-side
/// tool reads the selection back from the clipboard.
///
/// # Errors
///
/// Returns an error if the editor or sink fails. A clipboard failure is
/// best-effort and only logged; an empty selection is reported through the
/// notifier and returns `Ok` without writing the clipboard.
pub fn run(ctx: &ServiceContext, extra_args: &str) -> Result<()> {
    let selection = ctx.editor.selection().map_err(Error::editor)?;
    if selection.is_empty() {
        ctx.notifier.notify(MessageKind::Info, "No text selected.");
        return Ok(());
    }

    if let Err(err) = ctx.clipboard.write(&selection) {
        warn!(error = %err, "clipboard write failed, sending the marker anyway");
    }

    let Some(command) = format_checkpoint(&selection, extra_args) else {
        ctx.notifier.notify(MessageKind::Info, "No text selected.");
        return Ok(());
    };
    ctx.sink.send(&command, true).map_err(Error::sink)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::fake::{
        journal, FakeEditor, MemoryClipboard, RecordingNotifier, RecordingSink,
    };

    fn context_with(
        editor: FakeEditor,
        clipboard: MemoryClipboard,
        sink: RecordingSink,
        notifier: RecordingNotifier,
    ) -> ServiceContext {
        ServiceContext {
            editor: Box::new(editor),
            clipboard: Box::new(clipboard),
            sink: Box::new(sink),
            notifier: Box::new(notifier),
        }
    }

    #[test]
    fn multi_line_selection_becomes_marker() {
        let editor = FakeEditor::closed().with_selection("# setup\nx = 5\ny = 6");
        let clipboard = MemoryClipboard::default();
        let sink = RecordingSink::default();
        let ctx = context_with(editor, clipboard.clone(), sink.clone(), RecordingNotifier::default());

        run(&ctx, "record=True").unwrap();

        assert_eq!(clipboard.contents(), Some("# setup\nx = 5\ny = 6".to_string()));
        assert_eq!(
            sink.sent(),
            vec![("checkpoint_paste(record=True) # setup (3 lines)".to_string(), true)]
        );
    }

    #[test]
    fn single_statement_passes_through() {
        let editor = FakeEditor::closed().with_selection("x = 5");
        let sink = RecordingSink::default();
        let ctx = context_with(
            editor,
            MemoryClipboard::default(),
            sink.clone(),
            RecordingNotifier::default(),
        );

        run(&ctx, "").unwrap();

        assert_eq!(sink.sent(), vec![("x = 5".to_string(), true)]);
    }

    #[test]
    fn empty_selection_skips_clipboard_and_sink() {
        let editor = FakeEditor::closed();
        let clipboard = MemoryClipboard::default();
        let sink = RecordingSink::default();
        let notifier = RecordingNotifier::default();
        let ctx = context_with(editor, clipboard.clone(), sink.clone(), notifier.clone());

        run(&ctx, "skip=True").unwrap();

        assert_eq!(clipboard.contents(), None);
        assert!(sink.sent().is_empty());
        assert_eq!(notifier.messages(), vec![(MessageKind::Info, "No text selected.".to_string())]);
    }

    #[test]
    fn clipboard_write_precedes_dispatch() {
        let events = journal();
        let editor = FakeEditor::closed().with_selection("x = 5\ny = 6");
        let clipboard = MemoryClipboard::with_journal(Arc::clone(&events));
        let sink = RecordingSink::with_journal(Arc::clone(&events));
        let ctx = context_with(editor, clipboard, sink, RecordingNotifier::default());

        run(&ctx, "").unwrap();

        let events = events.lock().unwrap().clone();
        assert_eq!(events.len(), 2);
        assert!(events[0].starts_with("clipboard:"));
        assert!(events[1].starts_with("sink:"));
    }

    #[test]
    fn clipboard_failure_is_best_effort() {
        let editor = FakeEditor::closed().with_selection("x = 5\ny = 6");
        let sink = RecordingSink::default();
        let ctx = context_with(
            editor,
            MemoryClipboard::failing(),
            sink.clone(),
            RecordingNotifier::default(),
        );

        run(&ctx, "").unwrap();

        assert_eq!(sink.sent(), vec![("checkpoint_paste() # (2 lines)".to_string(), true)]);
    }
}

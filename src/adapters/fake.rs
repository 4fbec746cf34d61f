//! In-memory test doubles for the port traits.
//!
//! Each fake records the calls it receives behind an `Arc` so a test can
//! keep a clone of the fake, hand a boxed copy to the service context, and
//! assert on what the workflow did. A shared [`Journal`] can additionally
//! capture cross-port ordering.

use std::sync::{Arc, Mutex};

use crate::error::BoxedError;
use crate::locate::{CursorPosition, DocumentSnapshot};
use crate::ports::{Clipboard, Editor, MessageKind, Notifier, TerminalSink};

/// Shared, ordered log of boundary events across multiple fakes.
pub type Journal = Arc<Mutex<Vec<String>>>;

/// Creates an empty event journal.
#[must_use]
pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

fn record(journal: Option<&Journal>, event: String) {
    if let Some(journal) = journal {
        journal.lock().expect("journal lock poisoned").push(event);
    }
}

/// Editor fake serving fixed document, cursor, and selection values.
#[derive(Clone, Default)]
pub struct FakeEditor {
    document: Option<DocumentSnapshot>,
    cursor: Option<CursorPosition>,
    selection: String,
    saves: Arc<Mutex<usize>>,
}

impl FakeEditor {
    /// An editor with no open document (the "no active editor" state).
    #[must_use]
    pub fn closed() -> Self {
        Self::default()
    }

    /// An editor showing `text` at `path` with the cursor on 0-based `line`.
    #[must_use]
    pub fn open(text: &str, path: &str, line: usize) -> Self {
        Self {
            document: Some(DocumentSnapshot::new(text, path)),
            cursor: Some(CursorPosition { line }),
            selection: String::new(),
            saves: Arc::new(Mutex::new(0)),
        }
    }

    /// Sets the selection text returned by the editor.
    #[must_use]
    pub fn with_selection(mut self, selection: &str) -> Self {
        self.selection = selection.to_string();
        self
    }

    /// Number of times `save` was called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock().expect("saves lock poisoned")
    }
}

impl Editor for FakeEditor {
    fn active_document(&self) -> Result<Option<DocumentSnapshot>, BoxedError> {
        Ok(self.document.clone())
    }

    fn cursor(&self) -> Option<CursorPosition> {
        self.cursor
    }

    fn selection(&self) -> Result<String, BoxedError> {
        Ok(self.selection.clone())
    }

    fn save(&self) -> Result<(), BoxedError> {
        *self.saves.lock().expect("saves lock poisoned") += 1;
        Ok(())
    }
}

/// Clipboard fake storing the last written text in memory.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    journal: Option<Journal>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard that records writes into the shared journal.
    #[must_use]
    pub fn with_journal(journal: Journal) -> Self {
        Self { journal: Some(journal), ..Self::default() }
    }

    /// A clipboard whose writes always fail, for best-effort paths.
    #[must_use]
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// The last written text, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("clipboard lock poisoned").clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&self, text: &str) -> Result<(), BoxedError> {
        if self.fail {
            return Err("clipboard unavailable".into());
        }
        *self.contents.lock().expect("clipboard lock poisoned") = Some(text.to_string());
        record(self.journal.as_ref(), format!("clipboard: {text}"));
        Ok(())
    }
}

/// Terminal sink fake recording every `send` call.
#[derive(Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<(String, bool)>>>,
    journal: Option<Journal>,
}

impl RecordingSink {
    /// A sink that records sends into the shared journal.
    #[must_use]
    pub fn with_journal(journal: Journal) -> Self {
        Self { journal: Some(journal), ..Self::default() }
    }

    /// All `(text, execute)` pairs sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, bool)> {
        self.sent.lock().expect("sink lock poisoned").clone()
    }
}

impl TerminalSink for RecordingSink {
    fn send(&self, text: &str, execute: bool) -> Result<(), BoxedError> {
        self.sent.lock().expect("sink lock poisoned").push((text.to_string(), execute));
        record(self.journal.as_ref(), format!("sink: {text}"));
        Ok(())
    }
}

/// Notifier fake recording every message.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(MessageKind, String)>>>,
}

impl RecordingNotifier {
    /// All `(kind, text)` notifications shown so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageKind, String)> {
        self.messages.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: MessageKind, text: &str) {
        self.messages.lock().expect("notifier lock poisoned").push((kind, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_recorded_state() {
        let sink = RecordingSink::default();
        let handle = sink.clone();
        sink.send("manim --renderer opengl foo.py Intro", true).unwrap();
        assert_eq!(handle.sent(), vec![("manim --renderer opengl foo.py Intro".to_string(), true)]);
    }

    #[test]
    fn journal_preserves_cross_port_order() {
        let journal = journal();
        let clipboard = MemoryClipboard::with_journal(Arc::clone(&journal));
        let sink = RecordingSink::with_journal(Arc::clone(&journal));

        clipboard.write("x = 5").unwrap();
        sink.send("x = 5", true).unwrap();

        let events = journal.lock().unwrap().clone();
        assert_eq!(events, vec!["clipboard: x = 5", "sink: x = 5"]);
    }

    #[test]
    fn failing_clipboard_reports_an_error() {
        let clipboard = MemoryClipboard::failing();
        assert!(clipboard.write("x").is_err());
        assert_eq!(clipboard.contents(), None);
    }
}

//! Live editor adapter backed by a file path and cursor flag.
//!
//! The invoking editor passes the active file and 1-based cursor line on the
//! command line and pipes the selection, if any, through stdin.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{BoxedError, Error};
use crate::locate::{CursorPosition, DocumentSnapshot};
use crate::ports::Editor;

/// Editor state reconstructed from CLI arguments and stdin.
pub struct FileEditor {
    path: Option<PathBuf>,
    /// 1-based cursor line as editors report it; converted on read.
    line: u32,
}

impl FileEditor {
    /// Creates an editor view over `path` with the cursor on 1-based `line`.
    ///
    /// A `None` path means the host has no active document.
    #[must_use]
    pub fn new(path: Option<PathBuf>, line: u32) -> Self {
        Self { path, line }
    }

    fn read_document(&self) -> Result<Option<DocumentSnapshot>, BoxedError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::DocumentRead { path: path.clone(), source })?;
        Ok(Some(DocumentSnapshot::new(&text, path.to_string_lossy())))
    }
}

impl Editor for FileEditor {
    fn active_document(&self) -> Result<Option<DocumentSnapshot>, BoxedError> {
        self.read_document()
    }

    fn cursor(&self) -> Option<CursorPosition> {
        self.path.as_ref()?;
        Some(CursorPosition { line: (self.line.saturating_sub(1)) as usize })
    }

    fn selection(&self) -> Result<String, BoxedError> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            let mut piped = String::new();
            stdin.lock().read_to_string(&mut piped)?;
            // The pipe carries a final newline that is not part of the
            // selection.
            if piped.ends_with('\n') {
                piped.pop();
                if piped.ends_with('\r') {
                    piped.pop();
                }
            }
            debug!(bytes = piped.len(), "selection read from stdin");
            return Ok(piped);
        }

        // No pipe: fall back to the full text of the cursor's line.
        let (Some(document), Some(cursor)) = (self.read_document()?, self.cursor()) else {
            return Ok(String::new());
        };
        Ok(document.lines.get(cursor.line).cloned().unwrap_or_default())
    }

    fn save(&self) -> Result<(), BoxedError> {
        // The CLI host reads the document from disk, so the file already
        // holds what the invoking editor saved before calling us.
        Ok(())
    }
}

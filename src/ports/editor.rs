//! Editor port exposing the host's document, cursor, and selection state.

use crate::error::BoxedError;
use crate::locate::{CursorPosition, DocumentSnapshot};

/// Provides read access to the host editor's state.
///
/// Every method reads a snapshot taken for the current action; nothing here
/// mutates editor state except `save`, which persists the active document so
/// the file on disk matches what a derived command will target.
pub trait Editor: Send + Sync {
    /// Returns the active document's text and file path, or `None` when no
    /// document is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read.
    fn active_document(&self) -> Result<Option<DocumentSnapshot>, BoxedError>;

    /// Returns the cursor position, or `None` when no cursor context exists.
    fn cursor(&self) -> Option<CursorPosition>;

    /// Returns the current selection text. When nothing is selected, falls
    /// back to the full text of the cursor's current line. May be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection source cannot be read.
    fn selection(&self) -> Result<String, BoxedError>;

    /// Persists the active document before command derivation.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(&self) -> Result<(), BoxedError>;
}

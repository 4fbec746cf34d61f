//! Clipboard port for transferring selections to the terminal-side tool.

use crate::error::BoxedError;

/// Writes text to the host clipboard.
///
/// Call sites treat writes as best-effort: a failure is logged but does not
/// abort the action, since the placeholder command is still useful without
/// it.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard backend is unavailable.
    fn write(&self, text: &str) -> Result<(), BoxedError>;
}

//! Live clipboard adapter using `arboard`.

use tracing::debug;

use crate::error::BoxedError;
use crate::ports::Clipboard;

/// System clipboard backed by `arboard`.
///
/// On X11 the written selection is owned by this process; a clipboard
/// manager is expected to take it over when the process exits.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), BoxedError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        debug!(bytes = text.len(), "selection copied to clipboard");
        Ok(())
    }
}

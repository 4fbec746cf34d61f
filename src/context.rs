//! Service context bundling the port trait objects.

use std::path::PathBuf;

use crate::adapters::live::{ConsoleNotifier, FileEditor, StdoutSink, SystemClipboard, TmuxSink};
use crate::config::{Config, SinkKind};
use crate::error::{Error, Result};
use crate::ports::{Clipboard, Editor, Notifier, TerminalSink};

/// Bundles the four boundary ports into a single context.
///
/// Workflows receive every collaborator through this struct; nothing reads
/// ambient host state, so tests wire fakes in and assert on them.
pub struct ServiceContext {
    /// Host editor state (document, cursor, selection).
    pub editor: Box<dyn Editor>,
    /// Host clipboard.
    pub clipboard: Box<dyn Clipboard>,
    /// Terminal sink commands are dispatched to.
    pub sink: Box<dyn TerminalSink>,
    /// User-visible notifications.
    pub notifier: Box<dyn Notifier>,
}

impl ServiceContext {
    /// Creates a live context: file-backed editor, system clipboard, the
    /// configured terminal sink, and stderr notifications.
    ///
    /// The tmux sink is obtained get-or-create: a detached session is
    /// started when the configured target is not running.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured sink cannot be reached or created.
    pub fn live(config: &Config, file: Option<PathBuf>, line: u32) -> Result<Self> {
        let sink: Box<dyn TerminalSink> = match config.sink {
            SinkKind::Tmux => {
                Box::new(TmuxSink::get_or_create(&config.tmux_target).map_err(Error::sink)?)
            }
            SinkKind::Stdout => Box::new(StdoutSink),
        };
        Ok(Self {
            editor: Box::new(FileEditor::new(file, line)),
            clipboard: Box::new(SystemClipboard),
            sink,
            notifier: Box::new(ConsoleNotifier),
        })
    }
}

//! Terminal sink port: a destination accepting command text.

use crate::error::BoxedError;

/// Delivers lines of text to an interactive terminal-like sink.
///
/// The sink is explicit state: workflows receive a handle through the
/// service context rather than reading an ambient "active terminal", which
/// keeps dispatch testable against an in-memory fake.
pub trait TerminalSink: Send + Sync {
    /// Sends `text` to the sink. With `execute` set the text is also
    /// submitted (the sink's equivalent of pressing enter).
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be reached.
    fn send(&self, text: &str, execute: bool) -> Result<(), BoxedError>;
}

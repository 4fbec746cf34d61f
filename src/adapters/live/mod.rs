//! Live adapters backed by the real host environment.

pub mod clipboard;
pub mod editor;
pub mod notify;
pub mod terminal;

pub use clipboard::SystemClipboard;
pub use editor::FileEditor;
pub use notify::ConsoleNotifier;
pub use terminal::{StdoutSink, TmuxSink};

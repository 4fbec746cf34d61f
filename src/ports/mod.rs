//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the core workflows and the host
//! environment (editor state, clipboard, terminal sink, notifications).
//! Implementations live in `src/adapters/`.

pub mod clipboard;
pub mod editor;
pub mod notify;
pub mod terminal;

pub use clipboard::Clipboard;
pub use editor::Editor;
pub use notify::{MessageKind, Notifier};
pub use terminal::TerminalSink;

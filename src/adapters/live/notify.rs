//! Live notifier printing to stderr.

use crate::ports::{MessageKind, Notifier};

/// Notifier that prints messages to stderr, keeping stdout free for sink
/// output.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: MessageKind, text: &str) {
        match kind {
            MessageKind::Info => eprintln!("{text}"),
            MessageKind::Error => eprintln!("error: {text}"),
        }
    }
}

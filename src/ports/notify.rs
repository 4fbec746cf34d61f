//! Notification port for user-visible messages.

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Informational message; the action was a benign no-op.
    Info,
    /// Error message; the action could not proceed.
    Error,
}

/// Shows fire-and-forget notifications to the user.
pub trait Notifier: Send + Sync {
    /// Displays `text` with the given severity.
    fn notify(&self, kind: MessageKind, text: &str);
}

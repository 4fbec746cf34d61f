//! Live terminal sinks: a tmux pane and plain stdout.

use std::io::{self, Write};
use std::process::Command;

use tracing::debug;

use crate::error::BoxedError;
use crate::ports::TerminalSink;

/// Terminal sink driving a tmux session via `send-keys`.
pub struct TmuxSink {
    target: String,
}

impl TmuxSink {
    /// Attaches to the tmux target, starting a detached session of that
    /// name when none is running.
    ///
    /// # Errors
    ///
    /// Returns an error if tmux cannot be invoked or the session cannot be
    /// created.
    pub fn get_or_create(target: &str) -> Result<Self, BoxedError> {
        let probe = Command::new("tmux").args(["has-session", "-t", target]).output()?;
        if !probe.status.success() {
            debug!(target, "no tmux session found, starting one");
            let created = Command::new("tmux").args(["new-session", "-d", "-s", target]).output()?;
            if !created.status.success() {
                let stderr = String::from_utf8_lossy(&created.stderr);
                return Err(format!("failed to create tmux session {target}: {stderr}").into());
            }
        }
        Ok(Self { target: target.to_string() })
    }

    fn send_keys(&self, args: &[&str]) -> Result<(), BoxedError> {
        let output = Command::new("tmux")
            .args(["send-keys", "-t", &self.target])
            .args(args)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("tmux send-keys to {} failed: {stderr}", self.target).into());
        }
        Ok(())
    }
}

impl TerminalSink for TmuxSink {
    fn send(&self, text: &str, execute: bool) -> Result<(), BoxedError> {
        debug!(target = %self.target, execute, "sending text to tmux");
        // -l sends the text literally, control bytes included.
        self.send_keys(&["-l", text])?;
        if execute {
            self.send_keys(&["Enter"])?;
        }
        Ok(())
    }
}

/// Terminal sink that writes command text to stdout.
///
/// Useful for piping into another tool and for exercising the full flow in
/// integration tests without a tmux server.
pub struct StdoutSink;

impl TerminalSink for StdoutSink {
    fn send(&self, text: &str, execute: bool) -> Result<(), BoxedError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if execute {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

//! `scenecast quit` command: stop the running renderer.

use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::render::{INTERRUPT_TOKEN, QUIT_COMMAND};

/// Execute the `quit` command.
///
/// Sends the raw interrupt token (which the terminal delivers as Ctrl-C
/// without needing a submit), then the quit command followed by enter.
///
/// # Errors
///
/// Returns an error if the sink cannot be written to.
pub fn run(ctx: &ServiceContext) -> Result<()> {
    ctx.sink.send(INTERRUPT_TOKEN, false).map_err(Error::sink)?;
    ctx.sink.send(QUIT_COMMAND, true).map_err(Error::sink)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::{FakeEditor, MemoryClipboard, RecordingNotifier, RecordingSink};

    #[test]
    fn sends_interrupt_then_quit() {
        let sink = RecordingSink::default();
        let ctx = ServiceContext {
            editor: Box::new(FakeEditor::closed()),
            clipboard: Box::new(MemoryClipboard::default()),
            sink: Box::new(sink.clone()),
            notifier: Box::new(RecordingNotifier::default()),
        };

        run(&ctx).unwrap();

        assert_eq!(
            sink.sent(),
            vec![("\u{3}".to_string(), false), ("exit()".to_string(), true)]
        );
    }
}

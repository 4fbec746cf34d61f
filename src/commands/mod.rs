//! Command dispatch and handlers.

pub mod checkpoint;
pub mod quit;
pub mod scene;

use crate::cli::Command;
use crate::config::{Config, SinkKind};
use crate::context::ServiceContext;
use crate::error::Result;

/// Extra argument passed to `checkpoint_paste` for the record variant.
const RECORD_ARGS: &str = "record=True";

/// Extra argument passed to `checkpoint_paste` for the skip variant.
const SKIP_ARGS: &str = "skip=True";

/// Dispatch a parsed command to its handler with a live service context.
///
/// # Errors
///
/// Returns an error if the context cannot be wired or the handler hits an
/// environmental failure. User-state conditions (no editor, no definition,
/// empty selection) are reported through the notifier and are not errors.
pub fn dispatch(command: &Command) -> Result<()> {
    let config = Config::from_env();
    match command {
        Command::Scene { file, line, dry_run } => {
            // A dry run never touches the sink, so don't start tmux for it.
            let config =
                if *dry_run { Config { sink: SinkKind::Stdout, ..config } } else { config };
            let ctx = ServiceContext::live(&config, file.clone(), *line)?;
            scene::run(&ctx, *dry_run)
        }
        Command::Quit => {
            let ctx = ServiceContext::live(&config, None, 1)?;
            quit::run(&ctx)
        }
        Command::Checkpoint { file, line, record, skip } => {
            let extra_args = if *record {
                RECORD_ARGS
            } else if *skip {
                SKIP_ARGS
            } else {
                ""
            };
            let ctx = ServiceContext::live(&config, file.clone(), *line)?;
            checkpoint::run(&ctx, extra_args)
        }
    }
}

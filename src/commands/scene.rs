//! `scenecast scene` command: run the nearest scene definition.

use serde::Serialize;
use tracing::debug;

use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::locate::locate;
use crate::ports::MessageKind;
use crate::render::synthesize;

/// Derived command details emitted by `--dry-run`.
#[derive(Debug, Serialize)]
struct DerivedScene<'a> {
    command: String,
    scene: &'a str,
    file: &'a str,
    line: usize,
}

/// Execute the `scene` command.
///
/// Saves the document, locates the nearest definition at or above the
/// cursor, synthesizes the renderer invocation, and dispatches it to the
/// sink (or prints it as JSON when `dry_run` is set).
///
/// # Errors
///
/// Returns an error if a port fails; a missing editor or definition is
/// reported through the notifier and returns `Ok`.
pub fn run(ctx: &ServiceContext, dry_run: bool) -> Result<()> {
    ctx.editor.save().map_err(Error::editor)?;

    let Some(document) = ctx.editor.active_document().map_err(Error::editor)? else {
        ctx.notifier.notify(MessageKind::Info, "No active editor.");
        return Ok(());
    };
    let Some(cursor) = ctx.editor.cursor() else {
        ctx.notifier.notify(MessageKind::Info, "No active editor.");
        return Ok(());
    };

    let Some(definition) = locate(&document, cursor) else {
        ctx.notifier
            .notify(MessageKind::Error, "No matching definitions found before the cursor.");
        return Ok(());
    };
    debug!(scene = %definition.name, line = definition.line_number, "located scene definition");

    let spec = synthesize(&definition, &document.path);
    if dry_run {
        let derived = DerivedScene {
            command: spec.command_line(),
            scene: definition.name.as_str(),
            file: document.path.as_str(),
            line: definition.line_number,
        };
        println!("{}", serde_json::to_string(&derived)?);
        return Ok(());
    }

    ctx.sink.send(&spec.command_line(), true).map_err(Error::sink)?;
    Ok(())
}

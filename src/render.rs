//! Command synthesizer: turn a located definition into a renderer
//! invocation, plus the fixed tokens the terminal workflows send.

use crate::locate::DefinitionMatch;

/// Renderer program invoked for scene runs. Fixed for this integration.
pub const PROGRAM: &str = "manim";

/// Renderer selection flag, passed through verbatim.
pub const RENDERER_FLAG: &str = "--renderer opengl";

/// Raw interrupt token (ETX / Ctrl-C) sent to stop a running renderer.
pub const INTERRUPT_TOKEN: &str = "\u{3}";

/// Command that quits the renderer's interactive shell.
pub const QUIT_COMMAND: &str = "exit()";

/// Ordered command tokens destined to be joined into one command line.
///
/// Created fresh per synthesis and immediately consumed. Tokens are joined
/// with single spaces; the captured name and file path are not
/// shell-escaped, so paths containing spaces or shell metacharacters
/// produce a broken command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    tokens: Vec<String>,
}

impl CommandSpec {
    /// Joins the tokens with single spaces into the final command line.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.tokens.join(" ")
    }

    /// The ordered tokens of the command.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Builds the renderer invocation for a located definition:
/// `[program, renderer-flag, file-path, captured-name]`.
#[must_use]
pub fn synthesize(definition: &DefinitionMatch, file_path: &str) -> CommandSpec {
    CommandSpec {
        tokens: vec![
            PROGRAM.to_string(),
            RENDERER_FLAG.to_string(),
            file_path.to_string(),
            definition.name.clone(),
        ],
    }
}

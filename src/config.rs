//! Environment-driven configuration for the host adapters.

use std::env;

/// Which terminal sink the live context dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// A tmux pane driven via `tmux send-keys`.
    Tmux,
    /// Standard output, for piping into other tools and for tests.
    Stdout,
}

/// Adapter configuration resolved from the environment.
///
/// The synthesized command itself (program name, renderer flag) is fixed and
/// deliberately not configurable here; only host-side wiring is.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sink selection, from `SCENECAST_SINK` (`tmux` or `stdout`).
    pub sink: SinkKind,
    /// tmux target session, from `SCENECAST_TMUX_TARGET`.
    pub tmux_target: String,
}

impl Config {
    /// Loads configuration from the environment, honoring a `.env` file
    /// when present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let sink = match env::var("SCENECAST_SINK").as_deref() {
            Ok("stdout") => SinkKind::Stdout,
            _ => SinkKind::Tmux,
        };
        let tmux_target =
            env::var("SCENECAST_TMUX_TARGET").unwrap_or_else(|_| "scenecast".to_string());
        Self { sink, tmux_target }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { sink: SinkKind::Tmux, tmux_target: "scenecast".to_string() }
    }
}

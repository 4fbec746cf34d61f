//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `scenecast`.
#[derive(Debug, Parser)]
#[command(
    name = "scenecast",
    version,
    about = "Forward Manim scene runs and checkpoint pastes to a terminal"
)]
pub struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the scene class defined nearest at or above the cursor.
    Scene {
        /// Path of the active source file. Omit when no file is open.
        #[arg(long)]
        file: Option<PathBuf>,

        /// 1-based cursor line in the file.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,

        /// Print the derived command as JSON instead of dispatching it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Interrupt the running renderer and quit its interactive shell.
    Quit,

    /// Copy the selection to the clipboard and send a checkpoint_paste
    /// marker in its place. The selection is piped through stdin; without a
    /// pipe the cursor's line is used.
    Checkpoint {
        /// Path of the active source file, for the current-line fallback.
        #[arg(long)]
        file: Option<PathBuf>,

        /// 1-based cursor line in the file.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,

        /// Ask the terminal-side tool to record the replayed block.
        #[arg(long, conflicts_with = "skip")]
        record: bool,

        /// Ask the terminal-side tool to skip animations while replaying.
        #[arg(long)]
        skip: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_scene_subcommand() {
        let cli = Cli::parse_from(["scenecast", "scene", "--file", "foo.py", "--line", "3"]);
        match cli.command {
            Command::Scene { file, line, dry_run } => {
                assert_eq!(file.unwrap().to_str(), Some("foo.py"));
                assert_eq!(line, 3);
                assert!(!dry_run);
            }
            Command::Quit | Command::Checkpoint { .. } => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn scene_line_defaults_to_one() {
        let cli = Cli::parse_from(["scenecast", "scene"]);
        match cli.command {
            Command::Scene { line, .. } => assert_eq!(line, 1),
            Command::Quit | Command::Checkpoint { .. } => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn line_zero_is_rejected() {
        assert!(Cli::try_parse_from(["scenecast", "scene", "--line", "0"]).is_err());
    }

    #[test]
    fn parses_quit_subcommand() {
        let cli = Cli::parse_from(["scenecast", "quit"]);
        assert!(matches!(cli.command, Command::Quit));
    }

    #[test]
    fn checkpoint_record_and_skip_conflict() {
        let result = Cli::try_parse_from(["scenecast", "checkpoint", "--record", "--skip"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_checkpoint_variants() {
        let cli = Cli::parse_from(["scenecast", "checkpoint", "--record"]);
        match cli.command {
            Command::Checkpoint { record, skip, .. } => {
                assert!(record);
                assert!(!skip);
            }
            Command::Scene { .. } | Command::Quit => panic!("wrong command parsed"),
        }
    }
}

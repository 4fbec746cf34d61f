//! Core library entry for the `scenecast` CLI.
//!
//! `scenecast` locates the Manim scene class nearest the cursor in a source
//! file, derives a renderer command line from it, and forwards commands and
//! checkpoint-paste markers to a terminal sink.

pub mod adapters;
pub mod checkpoint;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod locate;
pub mod ports;
pub mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use error::{Error, Result};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error when argument parsing fails or command execution hits
/// an environmental failure.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version print to stdout and succeed.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(Error::Usage(err.to_string())),
    };

    init_logging(cli.verbose);
    commands::dispatch(&cli.command)
}

/// Initializes the tracing subscriber on stderr, keeping stdout free for
/// sink output. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

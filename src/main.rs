//! Binary entrypoint for the `scenecast` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match scenecast::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

//! Application entry point.
//!
//! Parses command-line arguments, merges configuration layers and delegates
//! execution to [`runner::run`].

use glossa::{cli, runner};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    let (parsed, matches) = match cli::parse_from(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(err) => err.exit(),
    };
    let max_level = if parsed.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt().with_max_level(max_level).with_writer(io::stderr).init();
    let merged = match cli::merge_with_config(&parsed, &matches) {
        Ok(merged) => merged,
        Err(err) => {
            tracing::error!(error = %err, "configuration merge failed");
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = io::stdout().lock();
    let outcome = runner::run(&merged, &mut stdout);
    let flushed = stdout.flush();
    match outcome.and_then(|()| Ok(flushed?)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(error = %message, "command failed");
            ExitCode::FAILURE
        }
    }
}

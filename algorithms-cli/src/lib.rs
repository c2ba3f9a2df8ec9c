//! Command-line front end for the algorithm engines.
//!
//! The `solve` subcommand reads a JSON request from disk, runs one engine
//! lifecycle and writes the result to stdout. `status` is a liveness probe.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod logging;
mod solve;

pub use error::{CliError, EXIT_CLIENT_ERROR, EXIT_FAILURE};
pub use solve::{OutputFormat, Problem};

use solve::SolveArgs;

const ARG_REQUEST: &str = "request";
const ARG_PROBLEM: &str = "problem";
const ARG_FORMAT: &str = "format";
const ARG_MAX_CAPACITY: &str = "max-capacity";
const ARG_MAX_BOARD_SIZE: &str = "max-board-size";
const ARG_MAX_NODES: &str = "max-nodes";
const ENV_REQUEST: &str = "ALGORITHMS_CMDS_SOLVE_REQUEST_PATH";
const ENV_PROBLEM: &str = "ALGORITHMS_CMDS_SOLVE_PROBLEM";

const STATUS_OK: &str = "{\"status\":\"ok\"}\n";

/// Run the CLI with the current process arguments, writing to stdout.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration, request
/// decoding, validation or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(&cli.log_level);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    dispatch(cli.command, &mut handle)
}

/// Run the CLI against explicit arguments and an explicit output sink.
///
/// No logging subscriber is installed, so embedding callers keep control of
/// their own.
///
/// # Errors
///
/// Returns [`CliError`] under the same conditions as [`run`].
pub fn run_with<I, T>(argv: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv).map_err(CliError::ArgumentParsing)?;
    dispatch(cli.command, writer)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Solve(args) => solve::run_solve_with(args, writer),
        Command::Status => writer
            .write_all(STATUS_OK.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "algorithms",
    about = "Solve knapsack, N-Queens and shortest-path instances",
    version
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "warn", value_name = "filter")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve one problem instance read from a JSON file.
    Solve(SolveArgs),
    /// Report that the tool is operational.
    Status,
}

#[cfg(test)]
mod tests;

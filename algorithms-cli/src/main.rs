//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use algorithms_cli::CliError;

fn main() -> ExitCode {
    match algorithms_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &CliError) -> ExitCode {
    eprintln!("algorithms: {err}");
    ExitCode::from(err.exit_code())
}

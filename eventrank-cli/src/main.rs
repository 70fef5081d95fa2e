//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use eventrank_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on standard error"
)]
fn main() {
    match eventrank_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors with its own exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("eventrank: {err}");
            std::process::exit(1);
        }
    }
}

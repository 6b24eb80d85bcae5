//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use wayfinder_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    match wayfinder_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wayfinder: {err}");
            std::process::exit(1);
        }
    }
}

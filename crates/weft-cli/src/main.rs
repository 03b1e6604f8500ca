//! CLI entrypoint for the Weft structural scanner.
//!
//! The binary delegates to [`weft_cli::run`], which loads configuration,
//! parses the query, and prints its result as JSON.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    weft_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}

//! # till Entry Point
//!
//! Parses arguments, sets up logging and hands over to
//! [`till_cli::run`] with the process's stdin and stdout.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;

use till_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    till_cli::init_tracing(cli.verbose);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match till_cli::run(cli, stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {}", err);
            err.exit_code()
        }
    }
}

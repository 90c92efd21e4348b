//! multiswap CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the chain,
//! and exit with status 1 on any argument or processing error.
//! For programmatic use, prefer the library API (`multiswap::api`).

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

mod cli;

fn main() -> ExitCode {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Need at least `--faces <face>` or `--target <target>` to do anything useful
    if std::env::args_os().len() < 3 {
        let _ = cli::CliArgs::command().print_long_help();
        return ExitCode::FAILURE;
    }

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

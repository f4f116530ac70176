use std::process::ExitCode;

use clap::Parser;
use langfix::cli::{Arguments, ExitStatus, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitStatus::Error.into()
        }
    }
}

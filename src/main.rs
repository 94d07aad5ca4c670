use clap::Parser;
use std::process::ExitCode;
use treesweep::{Cli, Output};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose > 0, cli.quiet);

    match cli.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

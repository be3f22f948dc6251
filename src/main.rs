//! `gen` entry point
//!
//! Parses the index range, writes one case file per index and prints the
//! written paths. Bad arguments and generation errors both exit with code 1.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use cpgen::cli::{is_usage_error, render_summary, run_cli, Cli};
use cpgen::logging;

fn try_main(cli: &Cli, raw_args: &[String]) -> cpgen::Result<()> {
    let summary = run_cli(cli, raw_args)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let cli = match Cli::try_parse_from(&raw_args) {
        Ok(cli) => cli,
        Err(err) => {
            // help and version text land here too
            let _ = err.print();
            return if is_usage_error(&err) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main(&cli, &raw_args) {
        tracing::error!(error = %err, "test generation failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

//! Vacancy extractor CLI.

use std::io;

use anyhow::Context;
use clap::Parser;

use vacancy_cli::cli::{Cli, Command};
use vacancy_cli::commands::{run_columns, run_extract};
use vacancy_cli::logging::init_logging;
use vacancy_cli::summary::print_summary;
use vacancy_output::write_document;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.into_command() {
        Command::Extract(args) => match run_extract(&args).and_then(|run| {
            write_document(io::stdout().lock(), &run.document).context("write to stdout")?;
            Ok(run)
        }) {
            Ok(run) => {
                if args.summary {
                    print_summary(&run);
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Columns(args) => match run_columns(&args) {
            Ok(table) => {
                println!("{table}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}


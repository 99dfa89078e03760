//! CLI argument definitions for the vacancy extractor.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use vacancy_model::{DEFAULT_CODE_COLUMN, DEFAULT_VALUE_COLUMN};

use crate::logging::{LogConfig, LogFormat};

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "logement_vacants_communes.csv";

#[derive(Parser)]
#[command(
    name = "vacancy-cli",
    version,
    about = "Extract long-term housing vacancy counts per municipality as JSON",
    long_about = "Read a semicolon-delimited municipality file and print, for each \
                  municipality code, the number of dwellings vacant for more than two years.\n\n\
                  Suppressed values (\"s\") and other non-numeric cells are skipped. \
                  Running without a subcommand is the same as `extract`.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub extract: ExtractArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The subcommand to run, `extract` when none was named.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Extract(self.extract))
    }

    /// Builds the logging configuration; `--log-level` beats `-v`/`-q`, and
    /// either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level_filter(level_filter)
            .with_env_filter(!(self.verbosity.is_present() || self.log_level.is_some()))
            .with_format(format)
            .with_ansi(ansi)
            .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract vacancy counts and print them to stdout.
    Extract(ExtractArgs),

    /// List the header columns of a file.
    Columns(ColumnsArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Path to the municipality CSV file.
    #[arg(value_name = "CSV_FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Field delimiter (a single ASCII character, or `tab`).
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Header of the municipality code column.
    #[arg(long = "code-column", value_name = "NAME", default_value = DEFAULT_CODE_COLUMN)]
    pub code_column: String,

    /// Header of the vacancy count column; also names the output field.
    #[arg(long = "value-column", value_name = "NAME", default_value = DEFAULT_VALUE_COLUMN)]
    pub value_column: String,

    /// Guess the columns from header names when the configured ones are absent.
    #[arg(long = "detect-columns")]
    pub detect_columns: bool,

    /// Skip rows whose municipality code is shorter than N characters.
    #[arg(long = "min-code-length", value_name = "N")]
    pub min_code_length: Option<usize>,

    /// Output document format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,

    /// Print extraction statistics to stderr after the document.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ColumnsArgs {
    /// Path to the municipality CSV file.
    #[arg(value_name = "CSV_FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Field delimiter (a single ASCII character, or `tab`).
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    #[value(alias = "ts")]
    Typescript,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parses a delimiter argument into a single byte.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    if value.eq_ignore_ascii_case("tab") || value == "\\t" {
        return Ok(b'\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() && !matches!(ch, '"' | '\n' | '\r') => Ok(ch as u8),
        (Some(_), None) => Err(format!("unsupported delimiter '{value}'")),
        _ => Err(format!(
            "delimiter must be a single character, got '{value}'"
        )),
    }
}

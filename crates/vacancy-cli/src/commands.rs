use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info_span};

use vacancy_ingest::{ColumnMode, ExtractOptions, extract_vacancies, read_headers};
use vacancy_model::ExtractStats;
use vacancy_output::{OutputFormat, render};

use crate::cli::{ColumnsArgs, ExtractArgs, OutputFormatArg};
use crate::summary::{apply_table_style, header_cell};

/// Outcome of an `extract` run, rendered but not yet written.
#[derive(Debug)]
pub struct ExtractRun {
    pub input: PathBuf,
    pub document: String,
    pub stats: ExtractStats,
    pub codes: usize,
    pub total: u64,
}

pub fn extract_options(args: &ExtractArgs) -> ExtractOptions {
    let mode = if args.detect_columns {
        ColumnMode::Detect
    } else {
        ColumnMode::Exact
    };
    ExtractOptions::default()
        .with_delimiter(args.delimiter)
        .with_code_column(args.code_column.clone())
        .with_value_column(args.value_column.clone())
        .with_column_mode(mode)
        .with_min_code_length(args.min_code_length)
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Json => OutputFormat::Json,
        OutputFormatArg::Typescript => OutputFormat::TypeScript,
    }
}

/// Reads the input and renders the output document.
pub fn run_extract(args: &ExtractArgs) -> Result<ExtractRun> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let options = extract_options(args);
    debug!(?options, "extract options");
    let extraction = extract_vacancies(&args.input, &options)
        .with_context(|| format!("extract vacancies from {}", args.input.display()))?;
    let document = render(&extraction.table, output_format(args.format))
        .context("render output document")?;
    Ok(ExtractRun {
        input: args.input.clone(),
        document,
        stats: extraction.stats,
        codes: extraction.table.len(),
        total: extraction.table.total(),
    })
}

/// Builds the header listing for the `columns` subcommand.
pub fn run_columns(args: &ColumnsArgs) -> Result<Table> {
    let headers = read_headers(&args.input, args.delimiter)
        .with_context(|| format!("read headers of {}", args.input.display()))?;
    Ok(columns_table(&headers))
}

pub fn columns_table(headers: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (idx, name) in headers.iter().enumerate() {
        table.add_row(vec![Cell::new(idx + 1), Cell::new(name)]);
    }
    table
}

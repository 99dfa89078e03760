//! Single-pass extraction over a delimited vacancy file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, info, info_span, trace, warn};

use vacancy_model::{ExtractStats, VacancyTable};

use crate::error::{IngestError, Result};
use crate::options::ExtractOptions;
use crate::value::{VacancyValue, classify_value};

use super::header::{ResolvedColumns, normalize_header, resolve_columns};

/// Result of one extraction pass.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: VacancyTable,
    pub stats: ExtractStats,
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| IngestError::from_io(path, e))
}

fn build_reader<R: Read>(source: R, delimiter: u8) -> Reader<R> {
    // Flexible: long rows are fine, short rows are checked per referenced field.
    ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

fn read_header_row<R: Read>(reader: &mut Reader<R>, path: &Path) -> Result<Vec<String>> {
    let headers = reader
        .headers()
        .map_err(|e| IngestError::from_csv(path, e))?;
    Ok(headers.iter().map(normalize_header).collect())
}

/// Reads the normalized header names of `path`.
pub fn read_headers(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let file = open_file(path)?;
    let mut reader = build_reader(file, delimiter);
    read_header_row(&mut reader, path)
}

/// Extracts vacancy counts from the CSV file at `path`.
///
/// The file handle lives inside the reader and is closed when this returns,
/// on success and on error alike.
pub fn extract_vacancies(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let file = open_file(path)?;
    extract_from_reader(file, path, options)
}

/// Extracts vacancy counts from any byte source; `path` only labels errors and logs.
pub fn extract_from_reader<R: Read>(
    source: R,
    path: &Path,
    options: &ExtractOptions,
) -> Result<Extraction> {
    let span = info_span!("extract", path = %path.display());
    let _guard = span.enter();

    let mut reader = build_reader(source, options.delimiter);
    let headers = read_header_row(&mut reader, path)?;
    let mut table = VacancyTable::new(options.value_column.clone());
    let mut stats = ExtractStats::default();
    if headers.is_empty() {
        warn!("file has no header row, nothing to extract");
        return Ok(Extraction { table, stats });
    }
    let columns = resolve_columns(&headers, options, path)?;

    let mut record = StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| IngestError::from_csv(path, e))?
    {
        if record.iter().all(str::is_empty) {
            continue;
        }
        stats.rows_read += 1;
        let line = record.position().map_or(0, csv::Position::line);
        let (code, raw) = referenced_fields(&record, columns, options, line, path)?;

        match classify_value(raw) {
            VacancyValue::Count(count) => {
                if let Some(min) = options.min_code_length {
                    if code.chars().count() < min {
                        stats.short_code += 1;
                        debug!(line, code, min, "skipping short municipality code");
                        continue;
                    }
                }
                stats.accepted += 1;
                trace!(line, code, %count, "accepted");
                if let Some(previous) = table.insert(code, count) {
                    stats.overwritten += 1;
                    debug!(line, code, %previous, "repeated code, replaced earlier value");
                }
            }
            VacancyValue::Suppressed => {
                stats.suppressed += 1;
                debug!(line, code, "skipping suppressed value");
            }
            VacancyValue::NonNumeric(value) => {
                stats.non_numeric += 1;
                debug!(line, code, value, "skipping non-numeric value");
            }
        }
    }

    info!(
        rows = stats.rows_read,
        accepted = stats.accepted,
        codes = table.len(),
        skipped = stats.skipped(),
        suppressed = stats.suppressed,
        non_numeric = stats.non_numeric,
        short_code = stats.short_code,
        overwritten = stats.overwritten,
        "extraction complete"
    );
    Ok(Extraction { table, stats })
}

fn referenced_fields<'r>(
    record: &'r StringRecord,
    columns: ResolvedColumns,
    options: &ExtractOptions,
    line: u64,
    path: &Path,
) -> Result<(&'r str, &'r str)> {
    let field = |idx: usize, column: &str| {
        record.get(idx).ok_or_else(|| IngestError::MissingField {
            column: column.to_string(),
            line,
            path: path.to_path_buf(),
        })
    };
    let code = field(columns.code, &options.code_column)?;
    let value = field(columns.value, &options.value_column)?;
    Ok((code, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(contents: &str) -> Result<Extraction> {
        extract_from_reader(
            contents.as_bytes(),
            Path::new("mem.csv"),
            &ExtractOptions::default(),
        )
    }

    #[test]
    fn skips_blank_lines_without_counting() {
        let extraction =
            extract("CODGEO_25;pp_vacant_plus_2ans_25\n01001;3\n\n01002;4\n").unwrap();
        assert_eq!(extraction.stats.rows_read, 2);
        assert_eq!(extraction.table.len(), 2);
    }

    #[test]
    fn zero_byte_input_is_empty() {
        let extraction = extract("").unwrap();
        assert!(extraction.table.is_empty());
        assert_eq!(extraction.stats, ExtractStats::default());
    }

    #[test]
    fn short_row_missing_value_is_fatal() {
        let err = extract("CODGEO_25;pp_vacant_plus_2ans_25\n01001;3\n01002\n").unwrap_err();
        match err {
            IngestError::MissingField { column, line, .. } => {
                assert_eq!(column, "pp_vacant_plus_2ans_25");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_trailing_fields_are_ignored() {
        let extraction =
            extract("CODGEO_25;pp_vacant_plus_2ans_25\n01001;3;extra;fields\n").unwrap();
        assert_eq!(extraction.table.get("01001").map(ToString::to_string), Some("3".into()));
    }

    #[test]
    fn values_wider_than_u64_keep_every_digit() {
        let extraction = extract(
            "CODGEO_25;pp_vacant_plus_2ans_25\n01001;12\n01002;0123456789012345678901234\n",
        )
        .unwrap();
        let codes: Vec<&str> = extraction.table.codes().collect();
        assert_eq!(codes, vec!["01001", "01002"]);
        assert_eq!(
            extraction.table.get("01002").map(ToString::to_string),
            Some("123456789012345678901234".into())
        );
        assert_eq!(extraction.stats.accepted, 2);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let mut bytes = b"CODGEO_25;pp_vacant_plus_2ans_25\n".to_vec();
        bytes.extend_from_slice(b"0\xff1;3\n");
        let err = extract_from_reader(
            bytes.as_slice(),
            Path::new("mem.csv"),
            &ExtractOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }
}

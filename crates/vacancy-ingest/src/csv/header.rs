//! Header normalization and column resolution.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::options::{ColumnMode, ExtractOptions};

/// Positions of the referenced columns within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub code: usize,
    pub value: usize,
}

/// Normalizes a header value: trims whitespace and a leading byte-order mark.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Locates the code and value columns in `headers`.
///
/// A name appearing more than once resolves to its last occurrence, so a
/// repeated header shadows earlier ones.
pub fn resolve_columns(
    headers: &[String],
    options: &ExtractOptions,
    path: &Path,
) -> Result<ResolvedColumns> {
    let code = find_column(
        headers,
        &options.code_column,
        options.column_mode,
        detect_code_column,
    );
    let value = find_column(
        headers,
        &options.value_column,
        options.column_mode,
        detect_value_column,
    );
    let missing = |column: &str| IngestError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    };
    let code = code.ok_or_else(|| missing(&options.code_column))?;
    let value = value.ok_or_else(|| missing(&options.value_column))?;
    debug!(
        code_column = %headers[code],
        value_column = %headers[value],
        code_index = code,
        value_index = value,
        "resolved columns"
    );
    Ok(ResolvedColumns { code, value })
}

fn find_column(
    headers: &[String],
    name: &str,
    mode: ColumnMode,
    detect: fn(&[String]) -> Option<usize>,
) -> Option<usize> {
    if let Some(idx) = headers.iter().rposition(|header| header == name) {
        return Some(idx);
    }
    match mode {
        ColumnMode::Exact => None,
        ColumnMode::Detect => {
            let idx = detect(headers)?;
            warn!(
                expected = name,
                detected = %headers[idx],
                "column not found by name, using detected column"
            );
            Some(idx)
        }
    }
}

/// First header that looks like a municipality code (`CODGEO`, `*insee*`, `*code*`).
pub fn detect_code_column(headers: &[String]) -> Option<usize> {
    headers.iter().position(|header| {
        let lower = header.to_lowercase();
        header == "CODGEO" || lower.contains("insee") || lower.contains("code")
    })
}

/// First header that looks like a long-term vacancy count (`*vacant*` with `2` or `plus`).
pub fn detect_value_column(headers: &[String]) -> Option<usize> {
    headers.iter().position(|header| {
        let lower = header.to_lowercase();
        lower.contains("vacant") && (lower.contains('2') || lower.contains("plus"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().copied().map(normalize_header).collect()
    }

    #[test]
    fn normalize_strips_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff}CODGEO_25"), "CODGEO_25");
        assert_eq!(normalize_header("  LIBGEO "), "LIBGEO");
    }

    #[test]
    fn exact_mode_resolves_by_name() {
        let headers = headers(&["LIBGEO", "pp_vacant_plus_2ans_25", "CODGEO_25"]);
        let resolved =
            resolve_columns(&headers, &ExtractOptions::default(), Path::new("t.csv")).unwrap();
        assert_eq!(resolved, ResolvedColumns { code: 2, value: 1 });
    }

    #[test]
    fn exact_mode_reports_missing_column() {
        let headers = headers(&["CODGEO", "vacants"]);
        let err = resolve_columns(&headers, &ExtractOptions::default(), Path::new("t.csv"))
            .unwrap_err();
        match err {
            IngestError::MissingColumn { column, .. } => assert_eq!(column, "CODGEO_25"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn repeated_header_resolves_to_last() {
        let headers = headers(&["CODGEO_25", "pp_vacant_plus_2ans_25", "CODGEO_25"]);
        let resolved =
            resolve_columns(&headers, &ExtractOptions::default(), Path::new("t.csv")).unwrap();
        assert_eq!(resolved.code, 2);
    }

    #[test]
    fn detect_mode_falls_back_to_heuristics() {
        let headers = headers(&["LIBGEO", "Code INSEE", "pp_vacant_2ans", "pp_vacant"]);
        let options = ExtractOptions::default().with_column_mode(ColumnMode::Detect);
        let resolved = resolve_columns(&headers, &options, Path::new("t.csv")).unwrap();
        assert_eq!(resolved, ResolvedColumns { code: 1, value: 2 });
    }

    #[test]
    fn detect_prefers_exact_names() {
        let headers = headers(&["code_region", "CODGEO_25", "pp_vacant_plus_2ans_25"]);
        let options = ExtractOptions::default().with_column_mode(ColumnMode::Detect);
        let resolved = resolve_columns(&headers, &options, Path::new("t.csv")).unwrap();
        assert_eq!(resolved, ResolvedColumns { code: 1, value: 2 });
    }

    #[test]
    fn detect_value_needs_long_term_marker() {
        assert_eq!(detect_value_column(&headers(&["nb_vacant"])), None);
        assert_eq!(detect_value_column(&headers(&["nb_vacant_plus"])), Some(0));
        assert_eq!(detect_code_column(&headers(&["CODGEO"])), Some(0));
    }
}

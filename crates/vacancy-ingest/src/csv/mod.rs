//! CSV reading utilities.

mod header;
mod reader;

pub use header::{
    ResolvedColumns, detect_code_column, detect_value_column, normalize_header, resolve_columns,
};
pub use reader::{Extraction, extract_from_reader, extract_vacancies, read_headers};

//! Vacancy data ingestion.
//!
//! Reads a delimited municipality file in one pass and keeps, per code, the
//! last all-digit vacancy count seen. Non-numeric values (including the
//! suppressed-statistic sentinel `s`) are skipped; structural problems are
//! errors.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vacancy_ingest::{ExtractOptions, extract_vacancies};
//!
//! let extraction = extract_vacancies(
//!     Path::new("logement_vacants_communes.csv"),
//!     &ExtractOptions::default(),
//! )?;
//! println!("{} municipalities", extraction.table.len());
//! ```

mod csv;
mod error;
mod options;
mod value;

// === Error Types ===
pub use error::{IngestError, Result};

// === Configuration ===
pub use options::{ColumnMode, ExtractOptions};

// === CSV Reading ===
pub use crate::csv::{
    Extraction, ResolvedColumns, detect_code_column, detect_value_column, extract_from_reader,
    extract_vacancies, normalize_header, read_headers, resolve_columns,
};

// === Value Checks ===
pub use value::{VacancyValue, classify_value, is_numeric};

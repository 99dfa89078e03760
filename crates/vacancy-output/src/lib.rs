//! Vacancy table rendering.
//!
//! - **JSON**: the municipality → `{ field: count }` object, two-space indented
//! - **TypeScript**: the same object wrapped in an exported, typed constant
//!
//! Documents are rendered fully in memory; writing happens in one step so a
//! failed run never leaves partial output behind.

mod error;
mod json;
mod typescript;

use std::io::Write;

use vacancy_model::VacancyTable;

pub use error::{OutputError, Result};
pub use json::render_json;
pub use typescript::{EXPORT_NAME, render_typescript};

/// Output document kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    TypeScript,
}

/// Renders `table` in the requested format.
pub fn render(table: &VacancyTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(table),
        OutputFormat::TypeScript => render_typescript(table),
    }
}

/// Writes a rendered document followed by a newline, then flushes.
pub fn write_document<W: Write>(mut writer: W, document: &str) -> Result<()> {
    writer.write_all(document.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

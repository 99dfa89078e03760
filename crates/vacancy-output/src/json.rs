//! JSON document rendering.

use vacancy_model::VacancyTable;

use crate::error::Result;

/// Renders `table` as a two-space indented JSON object.
///
/// Keys keep first-seen order and non-ASCII text is written as-is.
pub fn render_json(table: &VacancyTable) -> Result<String> {
    // The pretty printer indents by two spaces.
    Ok(serde_json::to_string_pretty(table)?)
}

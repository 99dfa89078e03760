//! TypeScript data module rendering.

use vacancy_model::VacancyTable;

use crate::error::Result;
use crate::json::render_json;

/// Name of the exported constant.
pub const EXPORT_NAME: &str = "communeVacancyData";

/// Renders `table` as a TypeScript module exporting one typed record constant.
pub fn render_typescript(table: &VacancyTable) -> Result<String> {
    let body = render_json(table)?;
    let property = property_name(table.field())?;
    Ok(format!(
        "// Long-term vacant dwellings (vacant for more than two years) per municipality.\n\
         // Generated file, do not edit.\n\
         export const {EXPORT_NAME}: Record<string, {{ {property}: number }}> = {body};"
    ))
}

/// Bare identifier when valid, otherwise a quoted string key.
fn property_name(field: &str) -> Result<String> {
    let mut chars = field.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_' || ch == '$');
    if starts_ok && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$') {
        Ok(field.to_string())
    } else {
        Ok(serde_json::to_string(field)?)
    }
}

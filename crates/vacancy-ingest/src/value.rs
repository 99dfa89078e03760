//! Vacancy value classification.

use vacancy_model::{SUPPRESSED_SENTINEL, VacancyCount};

/// Outcome of checking one raw vacancy cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VacancyValue<'a> {
    /// All-digit value, of any width.
    Count(VacancyCount),
    /// The suppressed-statistic sentinel.
    Suppressed,
    /// Empty or containing a non-digit character; holds the trimmed text.
    NonNumeric(&'a str),
}

/// Returns true when `value` is non-empty and made only of ASCII digits.
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Trims `raw` and classifies it.
pub fn classify_value(raw: &str) -> VacancyValue<'_> {
    let trimmed = raw.trim();
    if is_numeric(trimmed) {
        if let Some(count) = VacancyCount::from_digits(trimmed) {
            return VacancyValue::Count(count);
        }
    }
    if trimmed == SUPPRESSED_SENTINEL {
        VacancyValue::Suppressed
    } else {
        VacancyValue::NonNumeric(trimmed)
    }
}

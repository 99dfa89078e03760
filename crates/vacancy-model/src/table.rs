use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::DEFAULT_VALUE_COLUMN;
use crate::count::VacancyCount;

/// One municipality and its vacancy count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyEntry {
    pub code: String,
    pub count: VacancyCount,
}

/// Mapping from municipality code to vacancy count.
///
/// Codes keep the position of their first insertion; inserting an existing
/// code replaces its count in place. Serializes as
/// `{ "<code>": { "<field>": <count> }, ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyTable {
    field: String,
    entries: Vec<VacancyEntry>,
    index: HashMap<String, usize>,
}

impl Default for VacancyTable {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_COLUMN)
    }
}

impl VacancyTable {
    /// Creates an empty table whose records name their value `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Field name used inside each serialized record.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Inserts or replaces the count for `code`, returning the previous count.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        count: impl Into<VacancyCount>,
    ) -> Option<VacancyCount> {
        let code = code.into();
        let count = count.into();
        if let Some(&idx) = self.index.get(&code) {
            return Some(std::mem::replace(&mut self.entries[idx].count, count));
        }
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push(VacancyEntry { code, count });
        None
    }

    pub fn get(&self, code: &str) -> Option<&VacancyCount> {
        self.index.get(code).map(|&idx| &self.entries[idx].count)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Returns the number of distinct codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &VacancyEntry> {
        self.entries.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.entries.iter().fold(0u64, |acc, entry| {
            acc.saturating_add(entry.count.as_u64().unwrap_or(u64::MAX))
        })
    }
}

impl<'a> IntoIterator for &'a VacancyTable {
    type Item = &'a VacancyEntry;
    type IntoIter = std::slice::Iter<'a, VacancyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

struct FieldRecord<'a> {
    field: &'a str,
    count: &'a VacancyCount,
}

impl Serialize for FieldRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, self.count)?;
        map.end()
    }
}

impl Serialize for VacancyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            let record = FieldRecord {
                field: &self.field,
                count: &entry.count,
            };
            map.serialize_entry(&entry.code, &record)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_previous_count() {
        let mut table = VacancyTable::default();
        assert_eq!(table.insert("02001", 5), None);
        assert_eq!(table.insert("02001", 9), Some(VacancyCount::from(5)));
        assert_eq!(table.get("02001").and_then(VacancyCount::as_u64), Some(9));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn replaced_code_keeps_first_position() {
        let mut table = VacancyTable::default();
        table.insert("01001", 1);
        table.insert("01002", 2);
        table.insert("01001", 3);

        let codes: Vec<&str> = table.codes().collect();
        assert_eq!(codes, vec!["01001", "01002"]);
        assert_eq!(table.get("01001").and_then(VacancyCount::as_u64), Some(3));
    }

    #[test]
    fn total_sums_counts() {
        let mut table = VacancyTable::new("n");
        table.insert("a", 4);
        table.insert("b", 6);
        assert_eq!(table.total(), 10);
        assert_eq!(table.field(), "n");
    }

    #[test]
    fn total_saturates_on_wide_counts() {
        let mut table = VacancyTable::default();
        table.insert("01001", 12);
        let wide = VacancyCount::from_digits("123456789012345678901234").expect("digits");
        table.insert("01002", wide);
        assert_eq!(table.total(), u64::MAX);
    }

    #[test]
    fn missing_code_is_absent() {
        let table = VacancyTable::default();
        assert!(table.is_empty());
        assert!(!table.contains("01001"));
        assert_eq!(table.get("01001"), None);
    }
}

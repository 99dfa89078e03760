use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Number;

/// Non-negative vacancy count of any magnitude.
///
/// Kept as canonical decimal digits (no leading zeros), so a value wider than
/// `u64` survives unchanged and still serializes as a bare JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VacancyCount(Number);

impl VacancyCount {
    /// Parses a run of ASCII digits. Returns `None` for empty or non-digit text.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let canonical = match digits.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };
        Number::from_str(canonical).ok().map(Self)
    }

    /// The count as `u64`, or `None` when it does not fit.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }
}

impl From<u64> for VacancyCount {
    fn from(count: u64) -> Self {
        Self(Number::from(count))
    }
}

impl fmt::Display for VacancyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for VacancyCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

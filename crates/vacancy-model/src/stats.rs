/// Counters gathered during one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Data rows read, blank lines excluded.
    pub rows_read: usize,
    /// Rows whose value passed the numeric check and were stored.
    pub accepted: usize,
    /// Rows carrying the suppressed-value sentinel.
    pub suppressed: usize,
    /// Rows with any other non-numeric value, empty included.
    pub non_numeric: usize,
    /// Rows dropped because the code was shorter than the configured minimum.
    pub short_code: usize,
    /// Accepted rows that replaced an earlier value for the same code.
    pub overwritten: usize,
}

impl ExtractStats {
    /// Rows that contributed nothing to the table.
    pub fn skipped(&self) -> usize {
        self.suppressed + self.non_numeric + self.short_code
    }
}

//! Extraction configuration.

use vacancy_model::{DEFAULT_CODE_COLUMN, DEFAULT_VALUE_COLUMN};

/// How the code and value columns are located in the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnMode {
    /// Columns must be present under their configured names.
    #[default]
    Exact,
    /// Fall back to name heuristics when a configured name is absent.
    Detect,
}

/// Options controlling one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Field delimiter byte. Defaults to `;`.
    pub delimiter: u8,
    /// Header of the municipality code column.
    pub code_column: String,
    /// Header of the vacancy count column; also names the output field.
    pub value_column: String,
    /// Column lookup strategy.
    pub column_mode: ColumnMode,
    /// Drop rows whose code has fewer characters than this.
    pub min_code_length: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            column_mode: ColumnMode::default(),
            min_code_length: None,
        }
    }
}

impl ExtractOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_code_column(mut self, column: impl Into<String>) -> Self {
        self.code_column = column.into();
        self
    }

    #[must_use]
    pub fn with_value_column(mut self, column: impl Into<String>) -> Self {
        self.value_column = column.into();
        self
    }

    #[must_use]
    pub fn with_column_mode(mut self, mode: ColumnMode) -> Self {
        self.column_mode = mode;
        self
    }

    #[must_use]
    pub fn with_min_code_length(mut self, length: Option<usize>) -> Self {
        self.min_code_length = length;
        self
    }
}

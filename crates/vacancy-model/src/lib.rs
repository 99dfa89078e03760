//! Domain types for housing-vacancy extraction.
//!
//! The source dataset publishes, per French municipality (`CODGEO_25`), the
//! number of private dwellings vacant for more than two years
//! (`pp_vacant_plus_2ans_25`). This crate holds the in-memory result of one
//! extraction run: an insertion-ordered [`VacancyTable`] and the
//! [`ExtractStats`] counters gathered while building it.

pub mod count;
pub mod stats;
pub mod table;

pub use count::VacancyCount;
pub use stats::ExtractStats;
pub use table::{VacancyEntry, VacancyTable};

/// Header naming the municipality code column.
pub const DEFAULT_CODE_COLUMN: &str = "CODGEO_25";

/// Header naming the vacancy count column, also used as the output field.
pub const DEFAULT_VALUE_COLUMN: &str = "pp_vacant_plus_2ans_25";

/// Placeholder the dataset uses for suppressed (statistical secret) values.
pub const SUPPRESSED_SENTINEL: &str = "s";

//! CLI library components for the vacancy extractor.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

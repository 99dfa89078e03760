use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ExtractRun;

/// Prints the run statistics to stderr; stdout holds the document.
pub fn print_summary(run: &ExtractRun) {
    eprintln!("Input: {}", run.input.display());
    eprintln!("{}", summary_table(run));
}

pub fn summary_table(run: &ExtractRun) -> Table {
    let stats = &run.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(stats.rows_read)]);
    table.add_row(vec![
        Cell::new("Accepted"),
        Cell::new(stats.accepted).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Suppressed (s)"),
        count_cell(stats.suppressed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Non-numeric"),
        count_cell(stats.non_numeric, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Short code"),
        count_cell(stats.short_code, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Overwritten"),
        count_cell(stats.overwritten, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Municipalities")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(run.codes).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Vacant dwellings")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(run.total).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! Table rendering for finished reports.

use comfy_table::{Cell, CellAlignment, Row, Table, presets::ASCII_MARKDOWN};

use crate::analyzers::types::ReportRow;

pub const HEADERS: [&str; 2] = ["Brand", "Average rating"];

/// Renders report rows as a markdown-style table.
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_header(HEADERS.to_vec());
    for r in rows {
        let mut row = Row::new();
        row.add_cell(Cell::new(&r.brand).set_alignment(CellAlignment::Left));
        row.add_cell(Cell::new(r.formatted_average()).set_alignment(CellAlignment::Right));
        t.add_row(row);
    }
    t.to_string()
}

/// Prints the table to stdout.
pub fn print_table(rows: &[ReportRow]) {
    println!("{}", render_table(rows));
}

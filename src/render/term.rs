//! Terminal rendering of the matrix.

use crate::matrix::{Matrix, COLUMNS};
use crate::render::{cell_color, CellColor};
use tabled::builder::Builder;
use tabled::settings::object::{Cell, Rows};
use tabled::settings::{Color, Modify, Style};

/// Render the matrix as an ANSI table, title line first.
pub fn render(matrix: &Matrix) -> String {
    let mut builder = Builder::default();
    builder.push_record(Matrix::labels());
    for row in &matrix.rows {
        builder.push_record(row.iter().cloned());
    }
    builder.push_record(matrix.average_row.iter().cloned());

    let mut table = builder.build();
    table.with(Style::rounded());
    table.with(Modify::new(Rows::first()).with(Color::BOLD));
    table.with(Modify::new(Rows::last()).with(Color::BOLD));

    for (r, row) in matrix.rows.iter().enumerate() {
        for (c, column) in COLUMNS.iter().enumerate() {
            if let Some(color) = cell_color(column.rule, &row[c], matrix.means[c]) {
                // Row 0 is the header
                table.with(Modify::new(Cell::new(r + 1, c)).with(background(color)));
            }
        }
    }

    format!("{}\n{}", matrix.title(), table)
}

fn background(color: CellColor) -> Color {
    match color {
        CellColor::GreenDark => Color::BG_GREEN,
        CellColor::GreenLight => Color::BG_BRIGHT_GREEN,
        CellColor::Yellow => Color::BG_YELLOW,
        CellColor::RedLight => Color::BG_BRIGHT_RED,
        CellColor::RedDark => Color::BG_RED,
        CellColor::White => Color::BG_WHITE,
    }
}

//! Sizing helpers for rendering a table as fixed-width ASCII text.
//!
//! A fixed-width rendering writes, per column, the column name, the type
//! keyword, and one value per row, all in the same character budget. The
//! width computed here is the minimum budget that fits all three without
//! truncation, plus one separating space.

use crate::table::table::Table;

/// Computes the minimum fixed width of every column of a table.
///
/// Per column this is the maximum of the column name length, the type
/// keyword length, and the rendered length of every value in that column,
/// plus one. Runs in O(rows x columns); the result does not depend on
/// row order.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .info()
        .iter()
        .map(|column| column.name.len().max(column.kind.as_keyword().len()))
        .collect();
    for row in table.iter() {
        for (width, value) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(value.to_string().len());
        }
    }
    for width in widths.iter_mut() {
        *width += 1;
    }
    widths
}

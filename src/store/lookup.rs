//! Label lookup over the occupied rectangle.

use super::grid::{CellRef, Table};

/// First cell whose content equals `label`, scanning column by column
/// (left to right) and, inside a column, row by row (top to bottom).
///
/// The comparison is exact: no trimming, no case folding. Empty cells hold
/// no value and never match, so an empty label is never found.
pub fn locate(table: &Table, label: &str) -> Option<CellRef> {
    if label.is_empty() {
        return None;
    }
    let max_row = table.max_row();
    let max_column = table.max_column();

    for column in 1..=max_column {
        for row in 1..=max_row {
            if table.get(row, column) == label {
                return Some(CellRef::new(row, column));
            }
        }
    }
    None
}

/// First cell in `column`, strictly below `header_row`, equal to `value`.
pub fn locate_below(table: &Table, column: usize, header_row: usize, value: &str) -> Option<CellRef> {
    if value.is_empty() {
        return None;
    }
    ((header_row + 1)..=table.max_row())
        .find(|&row| table.get(row, column) == value)
        .map(|row| CellRef::new(row, column))
}

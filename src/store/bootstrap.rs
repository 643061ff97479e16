//! One-shot creation of an empty sheet.

use super::grid::{CellRef, Table};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Where a new sheet gets its key header.
pub const KEY_HEADER_CELL: CellRef = CellRef::new(2, 2);
/// Where a new sheet gets its value header.
pub const VALUE_HEADER_CELL: CellRef = CellRef::new(2, 3);

/// Create a sheet holding only the two header cells (B2 and C2).
///
/// Never overwrites: an existing file yields `StoreExists`.
pub fn bootstrap(path: &Path, key_label: &str, value_label: &str) -> AppResult<()> {
    if key_label.is_empty() || value_label.is_empty() {
        return Err(AppError::Config("header labels must not be empty".into()));
    }
    if key_label == value_label {
        return Err(AppError::Config(format!(
            "key and value labels must differ (both are '{key_label}')"
        )));
    }
    if path.exists() {
        return Err(AppError::StoreExists(path.display().to_string()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut table = Table::new();
    table.set(KEY_HEADER_CELL.row, KEY_HEADER_CELL.column, key_label);
    table.set(VALUE_HEADER_CELL.row, VALUE_HEADER_CELL.column, value_label);
    table.save(path)
}

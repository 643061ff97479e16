//! Table-level operations: key enumeration, append-or-accumulate, records.
//!
//! These work on an already opened [`Table`]; opening and persisting is the
//! job of [`super::TableStore`].

use super::grid::{CellRef, Table};
use super::lookup::{locate, locate_below};
use super::{Labels, Record, UpsertOutcome};
use crate::errors::{AppError, AppResult};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_PER_HOUR
}

pub fn hours_to_seconds(hours: f64) -> f64 {
    hours * SECONDS_PER_HOUR
}

/// Header cell for `label`, or `LabelNotFound` naming it.
pub fn require_label(table: &Table, label: &str) -> AppResult<CellRef> {
    locate(table, label).ok_or_else(|| AppError::LabelNotFound(label.to_string()))
}

/// Stored hours at `at`. An empty cell counts as zero; `inf` and `NaN` are
/// not numbers here.
pub fn read_hours(table: &Table, at: CellRef) -> AppResult<f64> {
    let raw = table.cell(at).trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(hours) if hours.is_finite() => Ok(hours),
        _ => Err(AppError::InvalidValue {
            cell: at.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Every cell under the key header down to the last occupied row, blanks included.
pub fn keys_in(table: &Table, key_label: &str) -> AppResult<Vec<String>> {
    let header = require_label(table, key_label)?;

    Ok(((header.row + 1)..=table.max_row())
        .map(|row| table.get(row, header.column).to_string())
        .collect())
}

/// Append `key` after the last occupied row, or add `delta_seconds` to the
/// hours already stored for it.
pub fn upsert_in(
    table: &mut Table,
    key: &str,
    delta_seconds: u64,
    labels: &Labels,
) -> AppResult<UpsertOutcome> {
    let key_header = require_label(table, &labels.key)?;
    let value_header = require_label(table, &labels.value)?;
    if key_header.column == value_header.column {
        return Err(AppError::Config(format!(
            "labels '{}' and '{}' share column {}",
            labels.key,
            labels.value,
            key_header.column_letter()
        )));
    }

    let delta = delta_seconds as f64;

    match locate_below(table, key_header.column, key_header.row, key) {
        None => {
            let row = table.max_row() + 1;
            let hours = seconds_to_hours(delta);
            table.set(row, key_header.column, key);
            table.set(row, value_header.column, hours.to_string());
            Ok(UpsertOutcome::Appended { row, hours })
        }
        Some(existing) => {
            let at = CellRef::new(existing.row, value_header.column);
            let current = hours_to_seconds(read_hours(table, at)?);
            let hours = seconds_to_hours(current + delta);
            table.set(at.row, at.column, hours.to_string());
            Ok(UpsertOutcome::Accumulated {
                row: existing.row,
                hours,
            })
        }
    }
}

/// Keyed rows with their hours. Rows with an empty key cell are skipped.
pub fn records_in(table: &Table, labels: &Labels) -> AppResult<Vec<Record>> {
    let key_header = require_label(table, &labels.key)?;
    let value_header = require_label(table, &labels.value)?;

    let mut out = Vec::new();
    for row in (key_header.row + 1)..=table.max_row() {
        let key = table.get(row, key_header.column);
        if key.is_empty() {
            continue;
        }
        let hours = read_hours(table, CellRef::new(row, value_header.column))?;
        out.push(Record {
            row,
            key: key.to_string(),
            hours,
        });
    }
    Ok(out)
}

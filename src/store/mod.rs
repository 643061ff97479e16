//! Label-indexed sheet store.
//!
//! The sheet is a CSV grid. Columns are found by scanning for the configured
//! header labels on every call, never by fixed position. Each operation is a
//! self-contained transaction: read the file, locate, modify, write back.

pub mod bootstrap;
pub mod grid;
pub mod lookup;
pub mod ops;

pub use bootstrap::bootstrap;
pub use grid::{CellRef, Table};
pub use lookup::locate;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_KEY_LABEL: &str = "task name";
pub const DEFAULT_VALUE_LABEL: &str = "task time";

/// The two header labels that identify the key and value columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub key: String,
    pub value: String,
}

impl Labels {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_LABEL, DEFAULT_VALUE_LABEL)
    }
}

/// What an upsert did to the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpsertOutcome {
    /// Path or key was empty; nothing was read or written.
    Skipped,
    /// A new row was written at `row`.
    Appended { row: usize, hours: f64 },
    /// The existing row `row` now holds `hours`.
    Accumulated { row: usize, hours: f64 },
}

/// One keyed row of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub row: usize,
    pub key: String,
    pub hours: f64,
}

/// Handle on a sheet file. Holds only the path; the file is opened and
/// released inside every call.
#[derive(Debug, Clone)]
pub struct TableStore {
    path: PathBuf,
}

impl TableStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// An empty path means "no file chosen yet".
    pub fn is_unset(&self) -> bool {
        self.path.as_os_str().is_empty()
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the sheet, or `StoreNotFound` if the file is missing.
    pub fn open(&self) -> AppResult<Table> {
        if !self.exists() {
            return Err(AppError::StoreNotFound(self.path.display().to_string()));
        }
        Table::read(&self.path)
    }

    /// Keys under the `key_label` header, in row order. Empty when unset.
    pub fn list_keys(&self, key_label: &str) -> AppResult<Vec<String>> {
        if self.is_unset() {
            return Ok(Vec::new());
        }
        let table = self.open()?;
        ops::keys_in(&table, key_label)
    }

    /// Append `key` or accumulate `delta_seconds` into its row, then persist.
    ///
    /// Nothing is written if any lookup fails.
    pub fn upsert(&self, key: &str, delta_seconds: u64, labels: &Labels) -> AppResult<UpsertOutcome> {
        if self.is_unset() || key.is_empty() {
            return Ok(UpsertOutcome::Skipped);
        }

        let mut table = self.open()?;
        let outcome = ops::upsert_in(&mut table, key, delta_seconds, labels)?;
        table.save(&self.path)?;
        Ok(outcome)
    }

    /// All keyed rows with their stored hours. Empty when unset.
    pub fn records(&self, labels: &Labels) -> AppResult<Vec<Record>> {
        if self.is_unset() {
            return Ok(Vec::new());
        }
        let table = self.open()?;
        ops::records_in(&table, labels)
    }

    /// Create the file with just the two headers.
    pub fn bootstrap(&self, labels: &Labels) -> AppResult<()> {
        bootstrap::bootstrap(&self.path, &labels.key, &labels.value)
    }
}

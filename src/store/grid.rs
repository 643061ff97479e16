//! In-memory grid of the sheet file.
//!
//! Rows and columns are 1-based. The occupied extent is derived from cell
//! content each time it is asked for, so a freshly read table always
//! reports the extent of what is on disk.

use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, Writer};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Coordinates of a single cell (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub column: usize,
}

impl CellRef {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Spreadsheet-style column name: 1 → A, 26 → Z, 27 → AA.
    pub fn column_letter(&self) -> String {
        let mut n = self.column;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    cells: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            cells: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Read a sheet file. Every CSV record is one row; no header handling.
    pub fn read(path: &Path) -> AppResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut cells = Vec::new();
        for record in rdr.records() {
            let record = record?;
            cells.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { cells })
    }

    /// Last row holding at least one non-empty cell (0 when the table is empty).
    pub fn max_row(&self) -> usize {
        self.cells
            .iter()
            .rposition(|row| row.iter().any(|c| !c.is_empty()))
            .map_or(0, |i| i + 1)
    }

    /// Last column holding at least one non-empty cell (0 when the table is empty).
    pub fn max_column(&self) -> usize {
        self.cells
            .iter()
            .filter_map(|row| row.iter().rposition(|c| !c.is_empty()))
            .max()
            .map_or(0, |i| i + 1)
    }

    /// Cell content; cells outside the stored grid read as empty.
    pub fn get(&self, row: usize, column: usize) -> &str {
        if row == 0 || column == 0 {
            return "";
        }
        self.cells
            .get(row - 1)
            .and_then(|r| r.get(column - 1))
            .map_or("", String::as_str)
    }

    pub fn cell(&self, at: CellRef) -> &str {
        self.get(at.row, at.column)
    }

    /// Write a cell, growing the grid as needed.
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<String>) {
        assert!(row > 0 && column > 0, "cell coordinates are 1-based");

        if self.cells.len() < row {
            self.cells.resize_with(row, Vec::new);
        }
        let r = &mut self.cells[row - 1];
        if r.len() < column {
            r.resize(column, String::new());
        }
        r[column - 1] = value.into();
    }

    /// The occupied rectangle, padded with empty cells.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let width = self.max_column();
        (1..=self.max_row())
            .map(|r| (1..=width).map(|c| self.get(r, c).to_string()).collect())
            .collect()
    }

    pub fn to_csv(&self) -> AppResult<Vec<u8>> {
        let mut wtr = Writer::from_writer(Vec::new());
        for row in self.rows() {
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
    }

    /// Replace `path` with the table content via temp file + rename,
    /// so readers never observe a half-written sheet.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let content = self.to_csv()?;

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&content)?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

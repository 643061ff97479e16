// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::RecordExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::store::{Labels, TableStore};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the per-task totals.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every keyed row of the sheet.
    ///
    /// Returns the number of rows written (0 when the sheet has no tasks,
    /// in which case no file is created).
    pub fn export(
        store: &TableStore,
        labels: &Labels,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let rows: Vec<RecordExport> = store.records(labels)?.iter().map(RecordExport::from).collect();

        if rows.is_empty() {
            warning("No tasks found in the sheet. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}

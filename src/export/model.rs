// src/export/model.rs

use crate::store::Record;
use crate::store::ops::hours_to_seconds;
use serde::Serialize;

/// Flat per-task row shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub task: String,
    pub hours: f64,
    pub seconds: u64,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            task: r.key.clone(),
            hours: r.hours,
            seconds: hours_to_seconds(r.hours).round().max(0.0) as u64,
        }
    }
}

/// Header for XLSX (CSV / JSON take the serde field names)
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["task", "hours", "seconds"]
}

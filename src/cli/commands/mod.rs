pub mod add;
pub mod backup;
pub mod config;
pub mod create;
pub mod export;
pub mod init;
pub mod log;
pub mod show;
pub mod start;
pub mod status;
pub mod stop;
pub mod tasks;

use crate::store::UpsertOutcome;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::format_hours;

/// Shared rendering of an upsert result for `add` and `stop`.
pub(crate) fn report_outcome(task: &str, outcome: &UpsertOutcome, decimals: usize) {
    match outcome {
        UpsertOutcome::Skipped if task.is_empty() => {
            warning("Empty task name: nothing saved.");
        }
        UpsertOutcome::Skipped => {
            warning("No sheet configured: nothing saved.");
        }
        UpsertOutcome::Appended { row, hours } => {
            success(format!(
                "New task '{task}' added at row {row}: {} h",
                format_hours(*hours, decimals)
            ));
        }
        UpsertOutcome::Accumulated { row, hours } => {
            success(format!(
                "Task '{task}' (row {row}) now totals {} h",
                format_hours(*hours, decimals)
            ));
        }
    }
}

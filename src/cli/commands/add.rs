use crate::cli::commands::report_outcome;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::log::ttlog_to;
use crate::errors::{AppError, AppResult};
use crate::store::{TableStore, UpsertOutcome};
use crate::utils::time::parse_duration;

/// Add a duration to a task directly.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        task,
        duration,
        create,
    } = cmd
    {
        if task.trim().is_empty() {
            return Err(AppError::TaskRequired);
        }
        let seconds = parse_duration(duration)?;
        let store = TableStore::new(&cfg.store);

        let outcome = AddLogic::apply(&store, &cfg.labels(), task, seconds, *create)?;
        report_outcome(task, &outcome, cfg.decimals);

        if outcome != UpsertOutcome::Skipped {
            ttlog_to(
                &cfg.state_db,
                "add",
                task,
                &format!("{seconds} s saved to {}", cfg.store),
            );
        }
    }
    Ok(())
}

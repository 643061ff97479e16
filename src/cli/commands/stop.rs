use crate::cli::commands::report_outcome;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::{TableStore, UpsertOutcome};
use crate::ui::messages::{info, warning};
use crate::utils::formatting::secs2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop {
        task,
        discard,
        create,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.state_db)?;
        let store = TableStore::new(&cfg.store);

        let report = TimerLogic::stop(
            &mut pool,
            &store,
            &cfg.labels(),
            task.as_deref(),
            *discard,
            *create,
        )?;

        info(format!("Elapsed: {}", secs2readable(report.seconds)));

        match (&report.task, &report.outcome) {
            (_, None) => warning("Timer discarded, nothing saved."),
            (Some(t), Some(outcome)) => {
                report_outcome(t, outcome, cfg.decimals);
                if *outcome == UpsertOutcome::Skipped {
                    warning("The timer is still running.");
                }
            }
            (None, Some(_)) => {}
        }
    }
    Ok(())
}

use crate::core::add::AddLogic;
use crate::db::log::ttlog_quiet;
use crate::db::models::ActiveTimer;
use crate::db::pool::DbPool;
use crate::db::timer::{clear_timer, load_timer, save_timer};
use crate::errors::{AppError, AppResult};
use crate::store::{Labels, TableStore, UpsertOutcome};
use crate::utils::time::{elapsed_seconds, parse_timestamp};
use chrono::Local;

/// What `stop` did with the elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct StopReport {
    pub task: Option<String>,
    pub seconds: u64,
    /// `None` when the timer was discarded.
    pub outcome: Option<UpsertOutcome>,
}

/// Running timer plus seconds elapsed so far.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerStatus {
    pub timer: ActiveTimer,
    pub seconds: u64,
}

pub struct TimerLogic;

impl TimerLogic {
    pub fn start(pool: &mut DbPool, task: Option<&str>) -> AppResult<ActiveTimer> {
        if let Some(running) = load_timer(&pool.conn)? {
            return Err(AppError::TimerRunning(running.started_at));
        }

        let timer = ActiveTimer {
            started_at: Local::now().to_rfc3339(),
            task: task.filter(|t| !t.is_empty()).map(str::to_string),
        };
        save_timer(&pool.conn, &timer)?;

        ttlog_quiet(
            &pool.conn,
            "start",
            timer.task.as_deref().unwrap_or(""),
            "Timer started",
        );
        Ok(timer)
    }

    pub fn status(pool: &mut DbPool) -> AppResult<Option<TimerStatus>> {
        match load_timer(&pool.conn)? {
            None => Ok(None),
            Some(timer) => {
                let seconds = elapsed_seconds(&parse_timestamp(&timer.started_at)?);
                Ok(Some(TimerStatus { timer, seconds }))
            }
        }
    }

    /// Stop the running timer and store the elapsed seconds on its task.
    ///
    /// The timer keeps running whenever the time could not be stored
    /// (no task, sheet unset, or any sheet error), so nothing is lost.
    pub fn stop(
        pool: &mut DbPool,
        store: &TableStore,
        labels: &Labels,
        task: Option<&str>,
        discard: bool,
        create: bool,
    ) -> AppResult<StopReport> {
        let status = Self::status(pool)?.ok_or(AppError::TimerNotRunning)?;

        if discard {
            clear_timer(&pool.conn)?;
            ttlog_quiet(
                &pool.conn,
                "discard",
                status.timer.task.as_deref().unwrap_or(""),
                &format!("Timer discarded after {} s", status.seconds),
            );
            return Ok(StopReport {
                task: status.timer.task,
                seconds: status.seconds,
                outcome: None,
            });
        }

        let task = task
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or(status.timer.task)
            .ok_or(AppError::TaskRequired)?;

        let outcome = AddLogic::apply(store, labels, &task, status.seconds, create)?;

        if outcome != UpsertOutcome::Skipped {
            clear_timer(&pool.conn)?;
            ttlog_quiet(
                &pool.conn,
                "stop",
                &task,
                &format!("{} s saved to {}", status.seconds, store.path().display()),
            );
        }

        Ok(StopReport {
            task: Some(task),
            seconds: status.seconds,
            outcome: Some(outcome),
        })
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { task } = cmd {
        let mut pool = DbPool::open(&cfg.state_db)?;
        let timer = TimerLogic::start(&mut pool, task.as_deref())?;

        match &timer.task {
            Some(t) => success(format!("Timer started for '{t}' at {}", timer.started_at)),
            None => success(format!("Timer started at {}", timer.started_at)),
        }
    }
    Ok(())
}

use crate::config::Config;
use crate::core::timer::TimerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::ops::seconds_to_hours;
use crate::ui::messages::info;
use crate::utils::formatting::{format_hours, secs2readable};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.state_db)?;

    match TimerLogic::status(&mut pool)? {
        None => info("No timer running."),
        Some(status) => {
            let task = status.timer.task.as_deref().unwrap_or("(no task yet)");
            println!("⏱️  Running since {}", status.timer.started_at);
            println!("   Task    : {task}");
            println!(
                "   Elapsed : {} ({} h)",
                secs2readable(status.seconds),
                format_hours(seconds_to_hours(status.seconds as f64), cfg.decimals)
            );
        }
    }
    Ok(())
}

//! Queries on the single-row `timer` table.

use crate::db::models::ActiveTimer;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_timer(conn: &Connection) -> AppResult<Option<ActiveTimer>> {
    let timer = conn
        .query_row("SELECT started_at, task FROM timer WHERE id = 1", [], |row| {
            Ok(ActiveTimer {
                started_at: row.get(0)?,
                task: row.get(1)?,
            })
        })
        .optional()?;
    Ok(timer)
}

pub fn save_timer(conn: &Connection, timer: &ActiveTimer) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO timer (id, started_at, task) VALUES (1, ?1, ?2)",
        params![timer.started_at, timer.task],
    )?;
    Ok(())
}

/// Remove the running timer. Returns false when none was running.
pub fn clear_timer(conn: &Connection) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM timer WHERE id = 1", [])?;
    Ok(n > 0)
}

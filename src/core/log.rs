use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::colors_enabled;
use ansi_term::Colour;

/// Colour of an operation name in the log listing
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "stop" => Colour::Green,
        "start" => Colour::Cyan,
        "discard" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Cut to `max` characters, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t = s.chars().take(max.saturating_sub(3)).collect::<String>();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    truncate(&format!("{} ({})", e.operation, e.target), 60)
                };
                (e.id, date, op_target, e.message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rows {
            // only the operation word is coloured; padding is computed on the plain text
            let (op, rest) = op_target
                .split_once(' ')
                .map_or((op_target.as_str(), ""), |(a, b)| (a, b));
            let colored = if !colors_enabled() {
                op_target.clone()
            } else if rest.is_empty() {
                color_for_operation(op).paint(op).to_string()
            } else {
                format!("{} {}", color_for_operation(op).paint(op), rest)
            };
            let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TableStore;
use crate::ui::messages::info;
use crate::utils::colors::colorize_hours;
use crate::utils::formatting::{bold, format_hours};
use crate::utils::table::{Align, Column, Table};

/// Print hours per task followed by the total.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let records = TableStore::new(&cfg.store).records(&cfg.labels())?;

    if records.is_empty() {
        info("No tasks yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column {
            header: bold("row"),
            align: Align::Right,
        },
        Column {
            header: bold(&cfg.key_label),
            align: Align::Left,
        },
        Column {
            header: bold(&cfg.value_label),
            align: Align::Right,
        },
    ]);

    for r in &records {
        let hours = format_hours(r.hours, cfg.decimals);
        table.add_row(vec![
            r.row.to_string(),
            r.key.clone(),
            colorize_hours(&hours, r.hours),
        ]);
    }

    let total: f64 = records.iter().map(|r| r.hours).sum();
    table.add_row(vec![
        String::new(),
        bold("total time"),
        bold(&format!("{} h", format_hours(total, cfg.decimals))),
    ]);

    print!("{}", table.render());
    Ok(())
}

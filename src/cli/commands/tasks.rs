use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TableStore;
use crate::ui::messages::info;

/// Print the task names, one per line, in sheet order.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let keys = TableStore::new(&cfg.store).list_keys(&cfg.key_label)?;

    let names: Vec<&String> = keys.iter().filter(|k| !k.trim().is_empty()).collect();
    if names.is_empty() {
        info("No tasks yet.");
        return Ok(());
    }

    for name in names {
        println!("{name}");
    }
    Ok(())
}

use crate::config::Config;
use crate::db::log::ttlog_to;
use crate::errors::AppResult;
use crate::store::TableStore;
use crate::store::bootstrap::{KEY_HEADER_CELL, VALUE_HEADER_CELL};
use crate::ui::messages::success;

/// Create an empty sheet at the configured path.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = TableStore::new(&cfg.store);
    store.bootstrap(&cfg.labels())?;

    success(format!(
        "Sheet created: {} ({} = '{}', {} = '{}')",
        store.path().display(),
        KEY_HEADER_CELL,
        cfg.key_label,
        VALUE_HEADER_CELL,
        cfg.value_label
    ));

    ttlog_to(&cfg.state_db, "create", &cfg.store, "Sheet created");
    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::TableStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the state database (running timer, internal log)
///  - the sheet, with its two header labels, unless it already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cfg, cli.test)?;

    println!("⚙️  Initializing timeyourwork…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  State DB    : {}", &cfg.state_db);
    println!("📊 Sheet       : {}", &cfg.store);

    let pool = DbPool::open(&cfg.state_db)?;

    let store = TableStore::new(&cfg.store);
    if store.exists() {
        info(format!(
            "Sheet already present, left untouched: {}",
            store.path().display()
        ));
    } else {
        store.bootstrap(&cfg.labels())?;
        success(format!(
            "Sheet created with headers '{}' and '{}'",
            cfg.key_label, cfg.value_label
        ));
    }

    ttlog_quiet(&pool.conn, "init", &cfg.store, "Initialized");

    println!("🎉 timeyourwork initialization completed!");
    Ok(())
}

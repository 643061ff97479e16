use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::ttlog_to;
use crate::errors::AppResult;
use crate::store::TableStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = TableStore::new(&cfg.store);
        let written = BackupLogic::backup(&store, file, *compress, *force)?;

        ttlog_to(
            &cfg.state_db,
            "backup",
            &written.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}

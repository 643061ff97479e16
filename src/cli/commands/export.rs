use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_to;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::TableStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = TableStore::new(&cfg.store);
        let n = ExportLogic::export(&store, &cfg.labels(), *format, file, *force)?;

        if n > 0 {
            ttlog_to(
                &cfg.state_db,
                "export",
                file,
                &format!("{n} tasks exported as {}", format.as_str()),
            );
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        ExportLogic::export(
            &pool,
            *format,
            file,
            range.as_deref(),
            *force,
            &cfg.policy(),
        )?;
    }
    Ok(())
}

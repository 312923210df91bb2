use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::ScanLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::resolve_period;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { period, file } = cmd {
        let policy = cfg.policy();

        let timeline = match file {
            Some(f) => {
                let path = expand_tilde(f);
                header(format!("Scanning {}", path.display()));
                ScanLogic::scan_file(&path, &policy)?
            }
            None => {
                let bounds = resolve_period(period.as_deref())?;
                let pool = open_db(&cfg.database)?;
                header(match bounds {
                    Some((from, to)) => format!("Scanning lessons {} → {}", from, to),
                    None => "Scanning all lessons".to_string(),
                });
                ScanLogic::scan_book(&pool, bounds, &policy)?
            }
        };

        ScanLogic::print_timeline(&timeline);
    }

    Ok(())
}

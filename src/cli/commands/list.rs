use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::scan::ScanLogic;
use crate::db::initialize::open_db;
use crate::db::queries::load_lessons;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::format_travel_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let pool = open_db(&cfg.database)?;

        let bounds = if *now {
            let t = date::today();
            Some((t, t))
        } else {
            date::resolve_period(period.as_deref())?
        };

        let lessons = load_lessons(&pool, bounds)?;
        if lessons.is_empty() {
            info("No lessons for the selected period.");
            return Ok(());
        }

        let policy = cfg.policy();
        let reports = Core::build_reports(&lessons, &policy);

        for report in &reports {
            ScanLogic::print_day(report, &cfg.separator_char);
        }

        // cancelled lessons stay in the book but are not drawn
        let hidden = lessons.iter().filter(|l| !l.is_active()).count();
        if hidden > 0 {
            info(format!("{} cancelled lesson(s) not shown.", hidden));
        }

        if reports.len() > 1 {
            let total: i64 = reports.iter().map(|r| r.total_travel_minutes).sum();
            info(format!(
                "{} day(s), {} of driving in total.",
                reports.len(),
                format_travel_time(total)
            ));
        }
    }
    Ok(())
}

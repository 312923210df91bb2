use super::parse_point;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::lesson::Lesson;
use crate::utils::date::require_date;
use crate::utils::time::lesson_bounds;

/// Dry run of `add`: assess the candidate, store nothing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        date,
        start,
        end,
        at,
    } = cmd
    {
        let d = require_date(date)?;
        let (start_at, end_at) = lesson_bounds(d, start, end)?;
        let candidate = Lesson::new("", start_at, end_at, parse_point(at.as_ref())?, None);

        let pool = open_db(&cfg.database)?;
        let assessment = CheckLogic::assess(&pool, &candidate, &cfg.policy())?;
        CheckLogic::print(&candidate, &assessment);
    }

    Ok(())
}

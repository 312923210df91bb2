use super::parse_point;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::lesson::Lesson;
use crate::utils::date::require_date;
use crate::utils::time::lesson_bounds;

/// Book a lesson in the local book.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        student,
        at,
        address,
    } = cmd
    {
        //
        // 1. Parse date and times (mandatory)
        //
        let d = require_date(date)?;
        let (start_at, end_at) = lesson_bounds(d, start, end)?;

        //
        // 2. Meeting point (optional)
        //
        let point = parse_point(at.as_ref())?;

        let lesson = Lesson::new(
            student.clone().unwrap_or_default(),
            start_at,
            end_at,
            point,
            address.clone(),
        );

        //
        // 3. Open DB and execute logic
        //
        let mut pool = open_db(&cfg.database)?;
        AddLogic::apply(&mut pool, &lesson, &cfg.policy())?;
    }

    Ok(())
}

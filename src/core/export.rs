use crate::core::calculator::timeline::build_timeline;
use crate::core::calculator::travel::TravelPolicy;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_lessons;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ensure_writable, export_csv, export_json, legs_to_export};
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the transfers between lessons.
    ///
    /// - `range`: `None` (current month), `"all"` or `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD` and `A:B` ranges of those
    /// - `file`: output path; `~/` is expanded
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
        policy: &TravelPolicy,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        if path.as_os_str().is_empty() {
            return Err(AppError::Export("output file path is empty".into()));
        }

        ensure_writable(&path, force)?;

        let bounds = resolve_period(range)?;
        let lessons = load_lessons(pool, bounds)?;
        let timeline = build_timeline(&lessons, policy);

        if timeline.legs.is_empty() {
            warning("No transfers found for the selected range. Nothing to export.");
            return Ok(0);
        }

        let rows = legs_to_export(&timeline);
        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} transfer(s) → {}", rows.len(), path.display()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rows.len())
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::require_date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, id, cancel } = cmd {
        let mut pool = open_db(&cfg.database)?;

        // single lesson: cancelling is reversible, deleting is not
        if let Some(id) = id {
            if !*cancel
                && !ask_confirmation(&format!(
                    "Delete lesson #{}? This action is irreversible.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            DeleteLogic::apply_id(&mut pool, *id, *cancel)?;
            if *cancel {
                success(format!("Lesson #{} has been cancelled.", id));
            } else {
                success(format!("Lesson #{} has been deleted.", id));
            }
            return Ok(());
        }

        if let Some(date_str) = date {
            let d = require_date(date_str)?;

            if !ask_confirmation(&format!(
                "Delete ALL lessons for {}? This action is irreversible.",
                d
            )) {
                info("Operation cancelled.");
                return Ok(());
            }

            DeleteLogic::apply_date(&mut pool, d)?;
            success(format!("All lessons for {} have been deleted.", d));
        }
    }

    Ok(())
}

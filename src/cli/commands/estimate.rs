use super::parse_point;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{gap_verdict, info};
use crate::utils::formatting::{format_distance, format_margin, format_travel_time};

/// Estimate the drive between two points, optionally against a gap.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Estimate { from, to, gap } = cmd {
        let from = parse_point(from.as_ref())?;
        let to = parse_point(to.as_ref())?;
        let policy = cfg.policy();

        let travel = policy.estimate_travel_minutes(from.as_ref(), to.as_ref());
        let distance = format_distance(from.as_ref(), to.as_ref());

        if distance.is_empty() {
            info(format!(
                "Distance: unknown (default {} min applies)",
                policy.default_travel_minutes
            ));
        } else {
            info(format!("Distance: {}", distance));
        }
        info(format!("Travel  : {}", format_travel_time(travel)));

        if let Some(gap) = gap {
            let assessment = policy.classify_gap(*gap, travel);
            gap_verdict(
                assessment.status,
                format!(
                    "Gap {} → {}, margin {}",
                    format_travel_time(*gap),
                    assessment.status.label(),
                    format_margin(assessment.margin_minutes)
                ),
            );
        }
    }

    Ok(())
}

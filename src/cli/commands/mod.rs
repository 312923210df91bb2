pub mod add;
pub mod check;
pub mod config;
pub mod del;
pub mod estimate;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod scan;

use crate::errors::AppResult;
use crate::models::coordinate::GeoCoordinate;

/// Parse an optional `--at`/`--from`/`--to` value.
pub(crate) fn parse_point(raw: Option<&String>) -> AppResult<Option<GeoCoordinate>> {
    raw.map(|s| s.parse::<GeoCoordinate>()).transpose()
}

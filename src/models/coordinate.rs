use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A WGS-84 point in decimal degrees.
///
/// No range validation is performed: out-of-range values simply produce the
/// literal result of the distance formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are real numbers (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Great-circle distance to `other`, in kilometres.
    pub fn distance_km(&self, other: &GeoCoordinate) -> f64 {
        crate::core::calculator::distance::distance_km(self, other)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Parse the CLI form `"lat,lon"` (spaces around the comma are allowed).
impl FromStr for GeoCoordinate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_raw, lon_raw) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinate(s.to_string()))?;

        let latitude: f64 = lat_raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;
        let longitude: f64 = lon_raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;

        let point = Self::new(latitude, longitude);
        if !point.is_finite() {
            return Err(AppError::InvalidCoordinate(s.to_string()));
        }

        Ok(point)
    }
}

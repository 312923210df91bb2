//! Straight-line (great-circle) distance between two meeting points.

use crate::models::coordinate::GeoCoordinate;

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance in kilometres.
///
/// Symmetric, zero for identical points, and well defined for antipodal
/// points thanks to `atan2`. Always finite and non-negative for finite input.
pub fn distance_km(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // rounding can push h a hair outside [0, 1]
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

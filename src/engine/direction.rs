//! Compass bearing between two points.

use tracing::instrument;

use super::difference::approx_eq;
use crate::country::GeoPoint;

/// Folds a longitude delta into (-180, 180] so the bearing follows the
/// shorter way around the antimeridian.
pub fn normalize_longitude_delta(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Bearing in degrees from `from` toward `to`, in [0, 360).
///
/// 0° points north and 90° east. Returns `None` when the two points
/// coincide, since no direction is meaningful there.
#[instrument]
pub fn bearing(from: GeoPoint, to: GeoPoint) -> Option<f64> {
    let lat_diff = to.latitude - from.latitude;
    let lng_diff = normalize_longitude_delta(to.longitude - from.longitude);

    if approx_eq(lat_diff, 0.0) && approx_eq(lng_diff, 0.0) {
        return None;
    }

    // Longitude first: atan2(east, north) puts 0° at north.
    Some((lng_diff.atan2(lat_diff).to_degrees() + 360.0) % 360.0)
}

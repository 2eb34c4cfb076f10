//! Coordinate invariant: latitude and longitude lie on the globe.

use super::Invariant;
use crate::country::Country;

/// Invariant: latitude ∈ [-90, 90] and longitude ∈ [-180, 180], both finite.
pub struct CoordinatesInRange;

impl Invariant<Country> for CoordinatesInRange {
    fn holds(country: &Country) -> bool {
        let point = country.location();
        (-90.0..=90.0).contains(&point.latitude) && (-180.0..=180.0).contains(&point.longitude)
    }

    fn description() -> &'static str {
        "Coordinates lie within [-90, 90] latitude and [-180, 180] longitude"
    }
}

//! Area invariant.

use super::Invariant;
use crate::country::Country;

/// Invariant: area is a finite, non-negative number of km².
pub struct NonNegativeArea;

impl Invariant<Country> for NonNegativeArea {
    fn holds(country: &Country) -> bool {
        country.area().is_finite() && *country.area() >= 0.0
    }

    fn description() -> &'static str {
        "Area is finite and non-negative"
    }
}

//! Self-neighbour invariant.

use super::Invariant;
use crate::country::Country;

/// Invariant: a country never lists itself among its neighbours.
pub struct NotOwnNeighbour;

impl Invariant<Country> for NotOwnNeighbour {
    fn holds(country: &Country) -> bool {
        !country.borders(country.code())
    }

    fn description() -> &'static str {
        "Neighbour list does not contain the country itself"
    }
}

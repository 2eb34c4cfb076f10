//! Set-membership invariant.

use std::collections::HashSet;

use super::Invariant;
use crate::country::Country;

/// Invariant: continents, languages and neighbour codes hold no duplicates.
///
/// These lists are sets that keep their source order; a duplicate would
/// show up twice in every intersection built from them.
pub struct DistinctMembers;

fn distinct<'a>(items: impl IntoIterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}

/// Codes are compared without regard to ASCII case.
fn distinct_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    codes.into_iter().all(|code| seen.insert(code.to_ascii_uppercase()))
}

impl Invariant<Country> for DistinctMembers {
    fn holds(country: &Country) -> bool {
        distinct(country.continents().iter().map(String::as_str))
            && distinct(country.languages().iter().map(String::as_str))
            && distinct_codes(country.neighbours().iter().map(|n| n.code().as_str()))
    }

    fn description() -> &'static str {
        "Continents, languages and neighbour codes are distinct"
    }
}

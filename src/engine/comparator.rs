//! Field-by-field comparison of a guess against the target.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::difference::Difference;
use super::direction::bearing;
use crate::country::{Country, Difficulty, Neighbour};

/// Feedback for a single guess, measured as "target relative to guess".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Target area relative to the guess.
    pub area_difference: Difference,
    /// Target population relative to the guess.
    pub population_difference: Difference,
    /// Target latitude relative to the guess.
    pub latitude_difference: Difference,
    /// Target longitude relative to the guess.
    pub longitude_difference: Difference,
    /// Guess and target lie in the same region.
    pub region_equal: bool,
    /// Guess and target lie in the same subregion.
    pub subregion_equal: bool,
    /// Continents shared by guess and target, in target order.
    pub same_continents: Vec<String>,
    /// Languages shared by guess and target, in target order.
    pub same_languages: Vec<String>,
    /// Target neighbours whose code the guess also borders, in target order.
    pub same_neighbours: Vec<Neighbour>,
    /// Bearing from guess toward target in degrees, when revealed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<f64>,
}

/// Compares `guess` against `target` under the given difficulty.
///
/// Total over well-formed records; never fails.
#[instrument(
    skip(guess, target),
    fields(guess = %guess.code(), target = %target.code(), difficulty = %difficulty)
)]
pub fn compare(guess: &Country, target: &Country, difficulty: Difficulty) -> Comparison {
    let region_equal = guess.region() == target.region();
    let subregion_equal = guess.subregion() == target.subregion();

    let direction = if difficulty.shows_direction(region_equal) {
        bearing(guess.location(), target.location())
    } else {
        None
    };

    let comparison = Comparison {
        area_difference: Difference::of(*guess.area(), *target.area()),
        population_difference: Difference::of(
            *guess.population() as f64,
            *target.population() as f64,
        ),
        latitude_difference: Difference::of(*guess.latitude(), *target.latitude()),
        longitude_difference: Difference::of(*guess.longitude(), *target.longitude()),
        region_equal,
        subregion_equal,
        same_continents: shared_names(target.continents(), guess.continents()),
        same_languages: shared_names(target.languages(), guess.languages()),
        same_neighbours: shared_neighbours(target.neighbours(), guess.neighbours()),
        direction,
    };

    debug!(
        region_equal,
        shared_neighbours = comparison.same_neighbours.len(),
        direction = ?comparison.direction,
        "Guess compared"
    );
    comparison
}

/// Entries of `target` also present in `guess`, keeping target order.
fn shared_names(target: &[String], guess: &[String]) -> Vec<String> {
    target
        .iter()
        .filter(|name| guess.contains(name))
        .cloned()
        .collect()
}

/// Target neighbours matched by code, ignoring ASCII case, against the
/// guess's neighbours.
fn shared_neighbours(target: &[Neighbour], guess: &[Neighbour]) -> Vec<Neighbour> {
    let guess_codes: HashSet<String> = guess
        .iter()
        .map(|n| n.code().to_ascii_uppercase())
        .collect();
    target
        .iter()
        .filter(|n| guess_codes.contains(&n.code().to_ascii_uppercase()))
        .cloned()
        .collect()
}

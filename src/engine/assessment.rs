//! Per-move result assembly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::comparator::{Comparison, compare};
use super::hints::{HintThresholds, Hints, get_hints};
use crate::country::{Country, Difficulty};

/// Everything returned to the player for one move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    /// The guess is the target.
    pub correct: bool,
    /// Field-by-field feedback.
    pub comparison: Comparison,
    /// Hints as of the guess count including this move.
    pub hints: Hints,
}

/// Assesses a guess made after `prior_guess_count` earlier guesses.
///
/// Hints count the current guess, so they are computed at
/// `prior_guess_count + 1`. Persisting that increment is the caller's job.
#[instrument(
    skip(guess, target, thresholds),
    fields(guess = %guess.code(), target = %target.code(), difficulty = %difficulty)
)]
pub fn assess_move(
    guess: &Country,
    target: &Country,
    difficulty: Difficulty,
    prior_guess_count: u32,
    thresholds: &HintThresholds,
) -> MoveOutcome {
    let comparison = compare(guess, target, difficulty);
    let correct = guess.id() == target.id();
    let guess_count = prior_guess_count.saturating_add(1);
    let hints = get_hints(guess_count, target, thresholds);

    info!(correct, guess_count, "Move assessed");
    MoveOutcome {
        correct,
        comparison,
        hints,
    }
}

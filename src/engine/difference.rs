//! Three-way numeric comparison with float tolerance.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Absolute tolerance, sized for degree-valued fields.
pub const ABSOLUTE_TOLERANCE: f64 = 1e-6;

/// Relative tolerance, sized for large magnitudes such as population.
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Returns true when `a` and `b` differ only by float round-trip noise.
#[instrument]
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= ABSOLUTE_TOLERANCE.max(RELATIVE_TOLERANCE * scale)
}

/// How the target measures against the guess.
///
/// The reading is always "target relative to guess": a guess of 1.23 km²
/// against a 400 km² target yields [`Difference::More`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difference {
    /// Target is larger than the guess.
    More,
    /// Target is smaller than the guess.
    Less,
    /// Target and guess are approximately equal.
    Equal,
}

impl Difference {
    /// Classifies `target` relative to `guess`.
    #[instrument]
    pub fn of(guess: f64, target: f64) -> Self {
        if approx_eq(target, guess) {
            Self::Equal
        } else if target > guess {
            Self::More
        } else {
            Self::Less
        }
    }
}

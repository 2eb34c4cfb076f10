//! Progressive unlocking of categorical facts about the target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::country::{Country, DrivingSide};

/// A fact about the target that unlocks after enough guesses.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum HintField {
    /// Whether the target has no coastline.
    Landlocked,
    /// Which side of the road the target drives on.
    DrivingSide,
    /// Number of countries bordering the target.
    NeighbourCount,
    /// Number of languages spoken in the target.
    LanguageCount,
    /// The target's capital.
    Capital,
}

/// Guess count at which each hint unlocks. Reaching the threshold unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HintThresholds {
    /// Threshold for [`HintField::Landlocked`].
    pub landlocked: u32,
    /// Threshold for [`HintField::DrivingSide`].
    #[serde(alias = "driving_side")]
    pub driving_side: u32,
    /// Threshold for [`HintField::NeighbourCount`].
    #[serde(alias = "neighbour_count")]
    pub neighbour_count: u32,
    /// Threshold for [`HintField::LanguageCount`].
    #[serde(alias = "language_count")]
    pub language_count: u32,
    /// Threshold for [`HintField::Capital`].
    pub capital: u32,
}

impl Default for HintThresholds {
    fn default() -> Self {
        Self {
            landlocked: 2,
            driving_side: 1,
            neighbour_count: 4,
            language_count: 4,
            capital: 6,
        }
    }
}

impl HintThresholds {
    /// Looks up the threshold for a field.
    pub fn threshold(&self, field: HintField) -> u32 {
        match field {
            HintField::Landlocked => self.landlocked,
            HintField::DrivingSide => self.driving_side,
            HintField::NeighbourCount => self.neighbour_count,
            HintField::LanguageCount => self.language_count,
            HintField::Capital => self.capital,
        }
    }
}

/// A single hint as of some guess count.
///
/// On the wire the variant is carried by a `state` tag rather than a
/// boolean `locked` field: `{"state":"locked","unlocksIn":N}` is
/// `locked = true`, `{"state":"unlocked","value":V}` is `locked = false`.
/// A locked hint never carries `value` and an unlocked one never carries
/// `unlocksIn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Hint<T> {
    /// Not yet revealed.
    Locked {
        /// Guesses still needed; always at least one.
        #[serde(rename = "unlocksIn")]
        unlocks_in: u32,
    },
    /// Revealed.
    Unlocked {
        /// The target's value for this field.
        value: T,
    },
}

impl<T> Hint<T> {
    /// Locks or reveals `value` depending on how far `guess_count` is from `threshold`.
    fn gate(guess_count: u32, threshold: u32, value: impl FnOnce() -> T) -> Self {
        if guess_count < threshold {
            Self::Locked {
                unlocks_in: threshold - guess_count,
            }
        } else {
            Self::Unlocked { value: value() }
        }
    }

    /// Whether the hint is still hidden.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }

    /// The revealed value, if unlocked.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Unlocked { value } => Some(value),
            Self::Locked { .. } => None,
        }
    }

    /// Guesses remaining until unlock, if locked.
    pub fn unlocks_in(&self) -> Option<u32> {
        match self {
            Self::Locked { unlocks_in } => Some(*unlocks_in),
            Self::Unlocked { .. } => None,
        }
    }
}

/// Every hint about the target as of a given guess count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hints {
    /// Whether the target is landlocked.
    pub landlocked: Hint<bool>,
    /// The target's driving side.
    pub driving_side: Hint<DrivingSide>,
    /// The target's capital, which some territories lack.
    pub capital: Hint<Option<String>>,
    /// How many countries border the target.
    pub neighbour_count: Hint<usize>,
    /// How many languages the target lists.
    pub language_count: Hint<usize>,
}

impl Hints {
    /// Number of hints currently revealed.
    pub fn unlocked_count(&self) -> usize {
        [
            self.landlocked.is_locked(),
            self.driving_side.is_locked(),
            self.capital.is_locked(),
            self.neighbour_count.is_locked(),
            self.language_count.is_locked(),
        ]
        .iter()
        .filter(|locked| !**locked)
        .count()
    }
}

/// Computes which hints about `target` are revealed after `guess_count` guesses.
///
/// Counts are the target's full totals, independent of what has been guessed.
#[instrument(skip(target, thresholds), fields(target = %target.code()))]
pub fn get_hints(guess_count: u32, target: &Country, thresholds: &HintThresholds) -> Hints {
    let hints = Hints {
        landlocked: Hint::gate(guess_count, thresholds.landlocked, || *target.landlocked()),
        driving_side: Hint::gate(guess_count, thresholds.driving_side, || {
            *target.driving_side()
        }),
        capital: Hint::gate(guess_count, thresholds.capital, || target.capital().clone()),
        neighbour_count: Hint::gate(guess_count, thresholds.neighbour_count, || {
            target.neighbour_count()
        }),
        language_count: Hint::gate(guess_count, thresholds.language_count, || {
            target.language_count()
        }),
    };

    debug!(unlocked = hints.unlocked_count(), "Hints computed");
    hints
}

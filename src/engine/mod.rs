//! Guess comparison and hint-unlocking engine.
//!
//! Everything here is a pure, synchronous function of its inputs: no
//! storage, no shared state, no errors over well-formed records.

mod assessment;
mod comparator;
mod difference;
mod direction;
mod hints;

pub use assessment::{MoveOutcome, assess_move};
pub use comparator::{Comparison, compare};
pub use difference::{ABSOLUTE_TOLERANCE, Difference, RELATIVE_TOLERANCE, approx_eq};
pub use direction::{bearing, normalize_longitude_delta};
pub use hints::{Hint, HintField, HintThresholds, Hints, get_hints};

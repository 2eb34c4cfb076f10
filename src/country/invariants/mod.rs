//! Record invariants for country data.
//!
//! Every country that enters the game passes these checks at ingestion, so
//! the comparison engine can take its inputs as well-formed.

mod coordinates;
mod measures;
mod members;
mod neighbours;

pub use coordinates::CoordinatesInRange;
pub use measures::NonNegativeArea;
pub use members::DistinctMembers;
pub use neighbours::NotOwnNeighbour;

/// A logical property that must hold for a given record.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given record.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s; every member is evaluated so
/// the caller sees all violations at once.
pub trait InvariantSet<S> {
    /// Returns `Ok(())` if all invariants hold, otherwise every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All country record invariants as a composable set.
pub type CountryInvariants = (
    CoordinatesInRange,
    NonNegativeArea,
    NotOwnNeighbour,
    DistinctMembers,
);

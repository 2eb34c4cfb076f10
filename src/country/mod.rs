//! Country records and the invariants every record satisfies.

mod invariants;
mod types;

pub use invariants::{
    CoordinatesInRange, CountryInvariants, DistinctMembers, Invariant, InvariantSet,
    InvariantViolation, NonNegativeArea, NotOwnNeighbour,
};
pub use types::{Country, CountryId, Difficulty, DrivingSide, GeoPoint, Neighbour};

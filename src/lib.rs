//! Strictly Geoguess library - comparison and hint engine for a country guessing game
//!
//! A player guesses countries one at a time. Each guess is compared
//! against a secret target, and categorical facts about the target unlock
//! as the guess count grows.
//!
//! # Architecture
//!
//! - **Engine**: pure comparison, bearing and hint-unlocking functions
//! - **Country**: validated country records and their invariants
//! - **Catalog**: typed ingestion of raw country data
//! - **Config**: hint thresholds and data paths from TOML
//! - **Session**: in-memory game ledger with atomic guess counting
//!
//! # Example
//!
//! ```
//! use strictly_geoguess::{Country, CountryId, Difficulty, HintThresholds, assess_move};
//!
//! let guess = Country::new(CountryId(1), "JT", "Jestia").with_latitude(10.0);
//! let target = Country::new(CountryId(2), "QW", "Qwertia").with_latitude(20.0);
//!
//! let outcome = assess_move(&guess, &target, Difficulty::Easy, 0, &HintThresholds::default());
//! assert!(!outcome.correct);
//! assert_eq!(outcome.comparison.direction, Some(0.0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod country;
mod engine;
mod session;

// Crate-level exports - Country records
pub use country::{
    CoordinatesInRange, Country, CountryId, CountryInvariants, Difficulty, DistinctMembers,
    DrivingSide, GeoPoint, Invariant, InvariantSet, InvariantViolation, Neighbour,
    NonNegativeArea, NotOwnNeighbour,
};

// Crate-level exports - Engine
pub use engine::{
    ABSOLUTE_TOLERANCE, Comparison, Difference, Hint, HintField, HintThresholds, Hints,
    MoveOutcome, RELATIVE_TOLERANCE, approx_eq, assess_move, bearing, compare, get_hints,
    normalize_longitude_delta,
};

// Crate-level exports - Ingestion
pub use catalog::{CatalogError, CountryCatalog, RawCountry};

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, ConfigErrorKind, EngineConfig};

// Crate-level exports - Game ledger
pub use session::{GameId, GameSession, GameStatus, OwnerId, SessionError, SessionManager};

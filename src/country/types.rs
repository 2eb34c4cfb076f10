//! Core domain types for countries and game settings.

use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Opaque identifier of a country record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct CountryId(pub u32);

/// Side of the road traffic keeps to.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DrivingSide {
    /// Traffic keeps left.
    Left,
    /// Traffic keeps right.
    Right,
}

/// Game-wide difficulty, fixed when the game starts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Direction is always shown.
    #[default]
    Easy,
    /// Direction is shown only when the guess shares the target's region.
    Medium,
    /// Direction is never shown.
    Hard,
}

impl Difficulty {
    /// Whether a bearing toward the target is revealed for a guess.
    #[instrument]
    pub fn shows_direction(self, region_equal: bool) -> bool {
        match self {
            Self::Easy => true,
            Self::Medium => region_equal,
            Self::Hard => false,
        }
    }
}

/// A bordering country, referenced by name and code.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Getters, new,
)]
pub struct Neighbour {
    /// Display name of the neighbour.
    #[new(into)]
    name: String,
    /// ISO-style code, used as the matching key.
    #[new(into)]
    code: String,
}

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, new)]
pub struct GeoPoint {
    /// Latitude in [-90, 90].
    pub latitude: f64,
    /// Longitude in [-180, 180].
    pub longitude: f64,
}

/// A fully joined country record.
///
/// Records are built once at ingestion (see [`CountryCatalog`](crate::CountryCatalog))
/// and treated as read-only afterwards. The `with_*` setters exist for
/// assembling a record, not for mutating one that is already in play.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema, Getters, Setters)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_")]
pub struct Country {
    /// Opaque record id.
    #[setters(skip)]
    id: CountryId,
    /// ISO-style code.
    #[setters(skip)]
    code: String,
    /// Display name.
    #[setters(skip)]
    name: String,
    /// Area in km².
    area: f64,
    /// Population.
    population: u64,
    /// Latitude of the reference point.
    latitude: f64,
    /// Longitude of the reference point.
    longitude: f64,
    /// Driving side.
    driving_side: DrivingSide,
    /// No coastline.
    landlocked: bool,
    /// Region name.
    #[setters(into)]
    region: String,
    /// Subregion name.
    #[setters(into)]
    subregion: String,
    /// Capital, absent for some territories.
    capital: Option<String>,
    /// Continent names, as an ordered set.
    continents: Vec<String>,
    /// Language names, as an ordered set.
    languages: Vec<String>,
    /// Bordering countries, as an ordered set keyed by code.
    neighbours: Vec<Neighbour>,
}

impl Country {
    /// Creates a record with the given identity and empty attributes.
    ///
    /// Attributes are filled in with the `with_*` setters.
    #[instrument(skip(code, name))]
    pub fn new(id: CountryId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            area: 0.0,
            population: 0,
            latitude: 0.0,
            longitude: 0.0,
            driving_side: DrivingSide::Right,
            landlocked: false,
            region: String::new(),
            subregion: String::new(),
            capital: None,
            continents: Vec::new(),
            languages: Vec::new(),
            neighbours: Vec::new(),
        }
    }

    /// Location of the country's reference point.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Number of bordering countries.
    pub fn neighbour_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Number of spoken languages.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Whether `code` names one of this country's neighbours, ignoring case.
    pub fn borders(&self, code: &str) -> bool {
        self.neighbours.iter().any(|n| n.code.eq_ignore_ascii_case(code))
    }
}

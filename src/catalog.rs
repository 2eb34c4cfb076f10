//! Country data ingestion.
//!
//! Raw records are parsed from JSON and checked against
//! [`CountryInvariants`] before they become [`Country`] values. Nothing
//! downstream re-validates shape or ranges.

use std::collections::HashMap;
use std::path::Path;

use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::country::{
    Country, CountryId, CountryInvariants, DrivingSide, InvariantSet, Neighbour,
};

/// Country record as it arrives from storage or a data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountry {
    /// Opaque identifier.
    pub id: u32,
    /// ISO-style code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Area in km².
    pub area: f64,
    /// Population.
    pub population: u64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Driving side.
    pub driving_side: DrivingSide,
    /// Whether the country has no coastline.
    #[serde(default)]
    pub landlocked: bool,
    /// Region name.
    pub region: String,
    /// Subregion name.
    pub subregion: String,
    /// Capital, if any.
    #[serde(default)]
    pub capital: Option<String>,
    /// Continent names.
    #[serde(default)]
    pub continents: Vec<String>,
    /// Language names.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Bordering countries.
    #[serde(default)]
    pub neighbours: Vec<Neighbour>,
}

impl TryFrom<RawCountry> for Country {
    type Error = CatalogError;

    fn try_from(raw: RawCountry) -> Result<Self, Self::Error> {
        if raw.code.trim().is_empty() {
            return Err(CatalogError::new(format!(
                "Country {} ({}) has an empty code",
                raw.id, raw.name
            )));
        }

        let country = Country::new(CountryId(raw.id), raw.code, raw.name)
            .with_area(raw.area)
            .with_population(raw.population)
            .with_latitude(raw.latitude)
            .with_longitude(raw.longitude)
            .with_driving_side(raw.driving_side)
            .with_landlocked(raw.landlocked)
            .with_region(raw.region)
            .with_subregion(raw.subregion)
            .with_capital(raw.capital)
            .with_continents(raw.continents)
            .with_languages(raw.languages)
            .with_neighbours(raw.neighbours);

        validate(&country)?;
        Ok(country)
    }
}

/// Checks every record invariant, reporting all violations in one error.
#[instrument(skip(country), fields(code = %country.code()))]
fn validate(country: &Country) -> Result<(), CatalogError> {
    CountryInvariants::check_all(country).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Country record rejected");
        CatalogError::new(format!(
            "Country {} ({}) violates: {}",
            country.id(),
            country.code(),
            descriptions
        ))
    })
}

/// Read-only set of validated countries with id and code lookups.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    by_id: HashMap<CountryId, usize>,
    by_code: HashMap<String, usize>,
}

impl CountryCatalog {
    /// Builds a catalog from assembled countries.
    ///
    /// Every record is checked against [`CountryInvariants`] here, so a
    /// catalog never holds a country the engine cannot compare.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a record violates an invariant or two
    /// countries share an id or a code.
    #[instrument(skip(countries), fields(count = countries.len()))]
    pub fn from_countries(countries: Vec<Country>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(countries.len());
        let mut by_code = HashMap::with_capacity(countries.len());

        for (index, country) in countries.iter().enumerate() {
            validate(country)?;
            if by_id.insert(*country.id(), index).is_some() {
                return Err(CatalogError::new(format!(
                    "Duplicate country id {}",
                    country.id()
                )));
            }
            if by_code.insert(country.code().to_uppercase(), index).is_some() {
                return Err(CatalogError::new(format!(
                    "Duplicate country code '{}'",
                    country.code()
                )));
            }
        }

        info!(count = countries.len(), "Country catalog built");
        Ok(Self {
            countries,
            by_id,
            by_code,
        })
    }

    /// Parses and validates a JSON array of country records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed JSON, on any record that fails
    /// validation, or on duplicate ids and codes.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawCountry> = serde_json::from_str(json)
            .map_err(|e| CatalogError::new(format!("Failed to parse country data: {}", e)))?;
        debug!(records = raw.len(), "Country records parsed");

        let countries = raw
            .into_iter()
            .map(Country::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_countries(countries)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or its contents
    /// are rejected by [`CountryCatalog::from_json_str`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        debug!("Loading country data from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(format!("Failed to read country data: {}", e)))?;
        Self::from_json_str(&content)
    }

    /// All countries, in source order.
    #[instrument(skip(self))]
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    /// Looks a country up by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: CountryId) -> Option<&Country> {
        self.by_id.get(&id).map(|&index| &self.countries[index])
    }

    /// Looks a country up by code, ignoring case.
    #[instrument(skip(self))]
    pub fn by_code(&self, code: &str) -> Option<&Country> {
        self.by_code
            .get(&code.to_uppercase())
            .map(|&index| &self.countries[index])
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the catalog holds no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Country data rejected at ingestion.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

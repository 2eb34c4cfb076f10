//! Engine configuration loaded from TOML.
//!
//! ```toml
//! catalog_path = "data/countries.json"
//!
//! [hints]
//! landlocked = 2
//! drivingSide = 1
//! capital = 6
//! ```
//!
//! Missing keys fall back to [`HintThresholds::default`].

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::engine::HintThresholds;

/// Environment variable naming the config file read by [`EngineConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "STRICTLY_GEOGUESS_CONFIG";

/// Settings consumed by the game service.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Guess counts at which hints unlock.
    hints: HintThresholds,

    /// Country data file, if the service should load one.
    catalog_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(hints: HintThresholds, catalog_path: Option<PathBuf>) -> Self {
        Self {
            hints,
            catalog_path,
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the TOML is malformed or has wrongly typed values.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Parse, format!("Failed to parse config: {}", e))
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Io, format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(hints = ?config.hints, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `.env`, then the file named by [`CONFIG_ENV_VAR`].
    ///
    /// Falls back to defaults when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is set but not valid unicode,
    /// or the named file cannot be loaded.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(path),
            Err(std::env::VarError::NotPresent) => {
                debug!(var = CONFIG_ENV_VAR, "No config file set, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::new(
                ConfigErrorKind::Env,
                format!("{} is not usable: {}", CONFIG_ENV_VAR, e),
            )),
        }
    }
}

/// What went wrong while loading configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("io")]
    Io,
    /// The contents were not valid configuration.
    #[display("parse")]
    Parse,
    /// The environment pointed somewhere unusable.
    #[display("env")]
    Env,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error ({}): {} at {}:{}", kind, message, file, line)]
pub struct ConfigError {
    /// Category of failure.
    pub kind: ConfigErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ConfigErrorKind, message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

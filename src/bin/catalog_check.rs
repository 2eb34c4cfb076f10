//! Geoguess catalog checker
//!
//! Validates a country data file and an optional engine config before they
//! are handed to a game service.

#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use strictly_geoguess::{CountryCatalog, EngineConfig, HintField};
use strum::IntoEnumIterator;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Validate country data and engine configuration
#[derive(Parser, Debug)]
#[command(name = "geoguess-check")]
#[command(about = "Validate geoguess country data and config", long_about = None)]
#[command(version)]
struct Cli {
    /// Country data file (JSON array of country records)
    #[arg(long)]
    countries: Option<PathBuf>,

    /// Engine config file (TOML). Defaults to $STRICTLY_GEOGUESS_CONFIG.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path),
        None => EngineConfig::from_env(),
    }
    .context("Loading engine config")?;

    for field in HintField::iter() {
        info!(%field, threshold = config.hints().threshold(field), "Hint threshold");
    }

    let Some(path) = cli.countries.or_else(|| config.catalog_path().clone()) else {
        bail!("No country data given: pass --countries or set catalog_path in the config");
    };

    let catalog = CountryCatalog::from_file(&path)
        .with_context(|| format!("Loading country data from {}", path.display()))?;

    if catalog.is_empty() {
        warn!(path = %path.display(), "Country data is empty");
    }

    let isolated = catalog
        .all()
        .iter()
        .filter(|c| c.neighbours().is_empty())
        .count();
    info!(
        countries = catalog.len(),
        without_neighbours = isolated,
        "Country data is valid"
    );

    Ok(())
}

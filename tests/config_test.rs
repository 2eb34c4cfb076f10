//! Tests for engine configuration loading.

use std::io::Write;
use std::path::PathBuf;

use strictly_geoguess::{ConfigErrorKind, EngineConfig, HintField, HintThresholds};
use tempfile::NamedTempFile;

#[test]
fn test_empty_config_uses_defaults() {
    let config = EngineConfig::from_toml_str("").expect("Parse failed");
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.hints(), &HintThresholds::default());
    assert!(config.catalog_path().is_none());
}

#[test]
fn test_partial_hints_keep_other_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
        [hints]
        capital = 10
        drivingSide = 0
        "#,
    )
    .expect("Parse failed");

    assert_eq!(config.hints().threshold(HintField::Capital), 10);
    assert_eq!(config.hints().threshold(HintField::DrivingSide), 0);
    assert_eq!(config.hints().threshold(HintField::Landlocked), 2);
    assert_eq!(config.hints().threshold(HintField::NeighbourCount), 4);
}

#[test]
fn test_snake_case_keys_accepted() {
    let config = EngineConfig::from_toml_str(
        r#"
        [hints]
        neighbour_count = 7
        language_count = 8
        "#,
    )
    .expect("Parse failed");

    assert_eq!(config.hints().neighbour_count, 7);
    assert_eq!(config.hints().language_count, 8);
}

#[test]
fn test_catalog_path() {
    let config = EngineConfig::from_toml_str(r#"catalog_path = "data/countries.json""#)
        .expect("Parse failed");
    assert_eq!(
        config.catalog_path(),
        &Some(PathBuf::from("data/countries.json"))
    );
}

#[test]
fn test_negative_threshold_rejected() {
    let err = EngineConfig::from_toml_str("[hints]\nlandlocked = -1").expect_err("negative");
    assert_eq!(err.kind, ConfigErrorKind::Parse);
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[hints]\nlandlocked = 3").expect("Failed to write");

    let config = EngineConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.hints().landlocked, 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = EngineConfig::from_file("/nonexistent/geoguess.toml").expect_err("missing file");
    assert_eq!(err.kind, ConfigErrorKind::Io);
    assert!(err.to_string().contains("Config error (io)"));
}
